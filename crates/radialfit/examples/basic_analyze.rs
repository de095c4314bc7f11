use radialfit::{read_outline_file, search, AnalyzeConfig, Outline};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <outline.csv> [grid_resolution] [out.json]", args[0]);
        std::process::exit(2);
    }

    let rows = read_outline_file(Path::new(&args[1]))?;
    let grid_resolution: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => 10,
    };

    let outline = Outline::new(rows)?;
    let result = search(&outline, &AnalyzeConfig::with_grid_resolution(grid_resolution))?;
    print!("{result}");

    if let Some(out_path) = args.get(3) {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(out_path, json)?;
        println!("Wrote {out_path}");
    }
    Ok(())
}
