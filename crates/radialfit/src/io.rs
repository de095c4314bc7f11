//! Outline files: one `x,y` vertex per line, traversal order, no header.
//!
//! Whitespace around fields is ignored, as are blank lines and lines
//! starting with `#`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::OutlineReadError;

/// Parse `x,y` records from any reader.
pub fn read_outline_csv<R: Read>(reader: R) -> Result<Vec<[f64; 2]>, OutlineReadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 2 {
            return Err(OutlineReadError::FieldCount {
                line,
                found: record.len(),
            });
        }
        let parse = |field: &str| {
            field.parse::<f64>().map_err(|_| OutlineReadError::Number {
                line,
                value: field.to_string(),
            })
        };
        points.push([parse(&record[0])?, parse(&record[1])?]);
    }
    tracing::debug!("read {} outline vertices", points.len());
    Ok(points)
}

/// Read an outline file from disk.
pub fn read_outline_file(path: &Path) -> Result<Vec<[f64; 2]>, OutlineReadError> {
    let file = File::open(path).map_err(|source| OutlineReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_outline_csv(file)
}
