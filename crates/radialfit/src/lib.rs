//! radialfit — decide whether a closed 2-D outline is a radial function.
//!
//! An outline is *radial* about a center when every ray from that center
//! crosses it exactly once, so that radius is a single-valued function of
//! angle, `r(φ)`. The crate searches a square lattice of candidate centers
//! and reports the one whose view of the outline is closest to radial.
//!
//! The stages are:
//!
//! 1. **Outline** – normalize complex or `2×N` / `N×2` real input.
//! 2. **Inside** – winding test by summed, wrapped turning angles.
//! 3. **Grid** – `n×n` lattice over the bounding square, filtered to the
//!    interior.
//! 4. **Score** – unwrap vertex phases about a candidate, sort by phase and
//!    measure the worst radius mismatch.
//! 5. **Search** – score every inner candidate and select the minimum.
//!
//! Around the core sit an outline file reader ([`read_outline_file`]), a
//! text summary ([`format_report`]) and a raster plot ([`plot_fit`]).
//!
//! # Example
//!
//! ```
//! use std::f64::consts::TAU;
//!
//! let outline: Vec<[f64; 2]> = (0..100)
//!     .map(|i| {
//!         let t = TAU * i as f64 / 100.0;
//!         [t.cos(), t.sin()]
//!     })
//!     .collect();
//! let result = radialfit::analyze(outline, 20).unwrap();
//! assert!(result.error < 1e-6);
//! ```

mod complex_serde;
mod config;
mod error;
mod grid;
mod inside;
mod io;
mod outline;
mod plot;
mod report;
mod score;
mod search;

#[cfg(test)]
pub(crate) mod test_utils;

/// Complex point `x + iy`, the internal form of a 2-D point.
pub type C64 = nalgebra::Complex<f64>;

pub use config::{AnalyzeConfig, PlotConfig, RadialFitConfig, TieBreak};
pub use error::{AnalysisError, ConfigError, OutlineReadError};
pub use grid::{inner_grid, lattice, linspace, spacing};
pub use inside::{is_inside, turning_angle};
pub use io::{read_outline_csv, read_outline_file};
pub use outline::{normalize, Outline, OutlineInput, MIN_OUTLINE_POINTS};
pub use plot::{error_gray, plot_fit, render_fit, PlotCanvas};
pub use report::format_report;
pub use score::{radial_error, score, unwrap_phase};
pub use search::{analyze, score_candidates, search, FitResult};
