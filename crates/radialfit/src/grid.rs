//! Candidate center lattice over the outline's bounding square.

use crate::inside::is_inside;
use crate::outline::Outline;
use crate::C64;

/// `n` evenly spaced values from `lo` to `hi`, both included.
///
/// A single sample sits at `lo`.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i + 1 == n { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Square `n×n` lattice spanning the outline's coordinate range.
///
/// The range is shared by both axes, so the lattice is square even for a
/// wide or tall outline. Candidate `i·n + j` is `(xs[i], ys[j])`.
pub fn lattice(outline: &Outline, n: usize) -> Vec<C64> {
    let [lo, hi] = outline.coordinate_range();
    let axis = linspace(lo, hi, n);
    axis.iter()
        .flat_map(|&x| axis.iter().map(move |&y| C64::new(x, y)))
        .collect()
}

/// Lattice spacing along either axis, `None` below two samples.
pub fn spacing(outline: &Outline, n: usize) -> Option<f64> {
    if n < 2 {
        return None;
    }
    let [lo, hi] = outline.coordinate_range();
    Some((hi - lo) / (n - 1) as f64)
}

/// Lattice points enclosed by the outline, in lattice scan order.
pub fn inner_grid(outline: &Outline, n: usize) -> Vec<C64> {
    let all = lattice(outline, n);
    let total = all.len();
    let inner: Vec<C64> = all
        .into_iter()
        .filter(|&z| is_inside(z, outline.points()))
        .collect();
    tracing::debug!("{} of {} lattice points inside the outline", inner.len(), total);
    inner
}
