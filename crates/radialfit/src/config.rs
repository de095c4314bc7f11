//! Analysis and plotting configuration.

use std::path::Path;

use crate::error::ConfigError;

/// How to pick among candidates with the same (or nearly the same) error.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First minimum in lattice scan order.
    #[default]
    FirstOccurrence,
    /// Candidates within `tolerance` of the minimum are tied; the one
    /// nearest the centroid of the tied set wins.
    NearestTiedCentroid {
        /// Absolute error tolerance for a tie.
        tolerance: f64,
    },
}

/// Center search parameters.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Candidates per axis of the bounding square.
    pub grid_resolution: usize,
    /// Minimum selection rule.
    pub tie_break: TieBreak,
    /// Score candidates on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            grid_resolution: 10,
            tie_break: TieBreak::FirstOccurrence,
            parallel: true,
        }
    }
}

impl AnalyzeConfig {
    /// Default configuration at the given grid resolution.
    pub fn with_grid_resolution(grid_resolution: usize) -> Self {
        Self {
            grid_resolution,
            ..Default::default()
        }
    }
}

/// Raster plot layout.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Blank border around the plotted data (pixels).
    pub margin_px: u32,
    /// `log10(error)` mapped to white and black respectively.
    pub log_error_range: [f64; 2],
    /// Radius of a grid point disc.
    pub point_radius_px: i32,
    /// Half the side of the square marking the chosen center.
    pub center_half_size_px: i32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            margin_px: 24,
            log_error_range: [-3.0, 2.0],
            point_radius_px: 4,
            center_half_size_px: 5,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadialFitConfig {
    pub analyze: AnalyzeConfig,
    pub plot: PlotConfig,
}

impl RadialFitConfig {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
