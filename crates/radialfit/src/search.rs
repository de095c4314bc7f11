//! Grid search for the center that best explains the outline as `r(φ)`.
//!
//! Every inner-grid candidate is scored with [`crate::score::score`]; the
//! minimum wins. Candidate order is the lattice scan order throughout, so
//! the first-occurrence tie-break is reproducible whether or not scoring
//! runs in parallel.

use crate::config::{AnalyzeConfig, TieBreak};
use crate::error::AnalysisError;
use crate::grid::inner_grid;
use crate::outline::{Outline, OutlineInput};
use crate::score::score;
use crate::C64;

/// Outcome of a center search.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitResult {
    /// Selected center.
    #[serde(with = "crate::complex_serde::point")]
    pub center: C64,
    /// Fit error at `center`.
    pub error: f64,
    /// Inner grid, lattice scan order.
    #[serde(with = "crate::complex_serde::points")]
    pub grid: Vec<C64>,
    /// Error per inner-grid candidate, aligned with `grid`.
    pub grid_errors: Vec<f64>,
    /// Index of `center` in `grid`.
    pub best_index: usize,
    /// Candidates per axis of the lattice.
    pub grid_resolution: usize,
}

impl FitResult {
    /// Center as `[x, y]`.
    pub fn center_xy(&self) -> [f64; 2] {
        [self.center.re, self.center.im]
    }

    /// Base-10 logarithm of the error at the chosen center.
    pub fn log10_error(&self) -> f64 {
        self.error.log10()
    }
}

/// Search with the default configuration at the given grid resolution.
pub fn analyze(
    outline: impl Into<OutlineInput>,
    grid_resolution: usize,
) -> Result<FitResult, AnalysisError> {
    let outline = Outline::new(outline)?;
    search(&outline, &AnalyzeConfig::with_grid_resolution(grid_resolution))
}

/// Score every lattice point inside `outline` and select the best one.
pub fn search(outline: &Outline, config: &AnalyzeConfig) -> Result<FitResult, AnalysisError> {
    let n = config.grid_resolution;
    if n == 0 {
        return Err(AnalysisError::InvalidGridResolution);
    }

    let grid = inner_grid(outline, n);
    if grid.is_empty() {
        return Err(AnalysisError::EmptyGrid { grid_resolution: n });
    }

    let grid_errors = score_candidates(outline.points(), &grid, config.parallel);
    let best_index = select(&grid, &grid_errors, config.tie_break);
    let center = grid[best_index];
    let error = grid_errors[best_index];

    if !error.is_finite() {
        tracing::warn!("non-finite error {} at selected center {}", error, center);
    }
    tracing::debug!(
        "best center ({:.4}, {:.4}) of {} candidates, error={:.3e}",
        center.re,
        center.im,
        grid.len(),
        error
    );

    Ok(FitResult {
        center,
        error,
        grid,
        grid_errors,
        best_index,
        grid_resolution: n,
    })
}

/// Score each candidate; output order follows `grid`.
///
/// `parallel` is ignored without the `parallel` feature.
pub fn score_candidates(outline: &[C64], grid: &[C64], parallel: bool) -> Vec<f64> {
    if parallel && cfg!(feature = "parallel") {
        return score_parallel(outline, grid);
    }
    grid.iter()
        .map(|&z| {
            let err = score(outline, z);
            tracing::trace!("candidate ({:.4}, {:.4}): error={:.3e}", z.re, z.im, err);
            err
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn score_parallel(outline: &[C64], grid: &[C64]) -> Vec<f64> {
    use rayon::prelude::*;
    grid.par_iter().map(|&z| score(outline, z)).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(outline: &[C64], grid: &[C64]) -> Vec<f64> {
    grid.iter().map(|&z| score(outline, z)).collect()
}

/// First index of the smallest error, NaN ranked last.
///
/// Falls back to index 0 when every error is NaN.
fn first_minimum(errors: &[f64]) -> usize {
    let mut best = 0usize;
    for (i, &e) in errors.iter().enumerate() {
        if (errors[best].is_nan() && !e.is_nan()) || e < errors[best] {
            best = i;
        }
    }
    best
}

fn select(grid: &[C64], errors: &[f64], tie_break: TieBreak) -> usize {
    let first = first_minimum(errors);
    match tie_break {
        TieBreak::FirstOccurrence => first,
        TieBreak::NearestTiedCentroid { tolerance } => {
            let min = errors[first];
            if min.is_nan() {
                return first;
            }
            let limit = min + tolerance.max(0.0);
            let tied: Vec<usize> = (0..errors.len()).filter(|&i| errors[i] <= limit).collect();
            let centroid = tied.iter().map(|&i| grid[i]).sum::<C64>() / tied.len() as f64;

            let mut best = first;
            let mut best_dist = (grid[first] - centroid).norm_sqr();
            for &i in &tied {
                let d = (grid[i] - centroid).norm_sqr();
                if d < best_dist {
                    best = i;
                    best_dist = d;
                }
            }
            best
        }
    }
}
