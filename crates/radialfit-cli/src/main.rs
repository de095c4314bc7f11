//! radialfit CLI — check whether an outline file is a radial function.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use radialfit::{
    plot_fit, read_outline_file, search, AnalyzeConfig, Outline, RadialFitConfig, TieBreak,
};

#[derive(Parser)]
#[command(name = "radialfit")]
#[command(
    about = "Check if a shape outline read from a file can be represented as a radial frequency pattern",
    long_about = "Check if a shape outline read from a file can be represented as a radial \
                  frequency pattern.\n\nThe file holds one vertex per line, in traversal order:\n\
                  <x1>,<y1>\n<x2>,<y2>\n...\n<xn>,<yn>"
)]
#[command(version)]
struct Cli {
    /// Outline file with one `x,y` pair per line.
    filename: PathBuf,

    /// Number of grid points (in each direction) to scan.
    /// Overrides the config file; 10 when neither is given.
    #[arg(short = 'g', long = "gridsize")]
    gridsize: Option<usize>,

    /// Visualize the results of the analysis as a PNG plot.
    #[arg(short, long)]
    visualize: bool,

    /// Path of the plot written by --visualize (default: <FILENAME stem>_rf.png).
    #[arg(long)]
    plot_out: Option<PathBuf>,

    /// Write the full result (grid and per-candidate errors) as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// JSON configuration file for analysis and plot settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat candidates within this error tolerance of the minimum as tied
    /// and pick the one nearest their centroid.
    #[arg(long, value_name = "TOL")]
    tie_centroid: Option<f64>,

    /// Score candidates on a single thread.
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<RadialFitConfig> {
        let mut config = match &self.config {
            Some(path) => RadialFitConfig::from_json_file(path)?,
            None => RadialFitConfig::default(),
        };
        self.apply_overrides(&mut config.analyze);
        Ok(config)
    }

    fn apply_overrides(&self, analyze: &mut AnalyzeConfig) {
        if let Some(n) = self.gridsize {
            analyze.grid_resolution = n;
        }
        if let Some(tolerance) = self.tie_centroid {
            analyze.tie_break = TieBreak::NearestTiedCentroid { tolerance };
        }
        if self.sequential {
            analyze.parallel = false;
        }
    }

    fn plot_path(&self) -> PathBuf {
        self.plot_out
            .clone()
            .unwrap_or_else(|| default_plot_path(&self.filename))
    }
}

fn default_plot_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "outline".to_string());
    input.with_file_name(format!("{stem}_rf.png"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    tracing::info!("Loading outline: {}", cli.filename.display());
    let rows = read_outline_file(&cli.filename)?;
    let outline = Outline::new(rows)
        .with_context(|| format!("invalid outline in {}", cli.filename.display()))?;
    tracing::info!(
        "{} vertices, grid resolution {}",
        outline.len(),
        config.analyze.grid_resolution
    );

    let result = search(&outline, &config.analyze)?;
    print!("{result}");

    if let Some(json_path) = &cli.json {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
        tracing::info!("Results written to {}", json_path.display());
    }

    if cli.visualize {
        let plot_path = cli.plot_path();
        let canvas = plot_fit(&config.plot, &outline, &result);
        canvas
            .save_png(&plot_path)
            .with_context(|| format!("failed to write plot {}", plot_path.display()))?;
        tracing::info!("Plot written to {}", plot_path.display());
    }

    Ok(())
}
