//! Error types.

use std::path::PathBuf;

/// Errors returned by outline normalization and the center search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Outline array is neither `2×N` nor `N×2`, or its data length
    /// disagrees with its shape.
    #[error("outline of shape {shape:?} can not be interpreted as 2-D points")]
    InvalidShape {
        /// Shape as supplied by the caller.
        shape: Vec<usize>,
    },
    /// Fewer vertices than a closed outline needs.
    #[error("outline needs at least 3 points, got {got}")]
    TooFewPoints {
        /// Number of vertices supplied.
        got: usize,
    },
    /// Grid resolution of zero.
    #[error("grid resolution must be positive")]
    InvalidGridResolution,
    /// No lattice point was classified inside the outline.
    #[error("no grid point inside the outline at grid resolution {grid_resolution}")]
    EmptyGrid {
        /// Resolution that produced the empty inner grid.
        grid_resolution: usize,
    },
}

/// Errors raised while reading an outline file.
#[derive(Debug, thiserror::Error)]
pub enum OutlineReadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A record that does not hold exactly one `x,y` pair.
    #[error("line {line}: expected 2 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    /// A field that does not parse as a real number.
    #[error("line {line}: invalid number {value:?}")]
    Number { line: u64, value: String },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
