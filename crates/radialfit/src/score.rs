//! Radial-fit error of an outline about a candidate center.
//!
//! Seen from a center about which the outline is a radial function `r(φ)`,
//! the vertex phases increase monotonically along the traversal, so sorting
//! the vertices by (unwrapped) phase leaves them in place. Any ray that
//! crosses the outline more than once breaks that monotonicity, and the
//! sort then pairs each phase with a radius taken from elsewhere on the
//! outline. The worst such mismatch is the error.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::C64;

/// Remove 2π discontinuities from a phase sequence.
///
/// A step whose magnitude reaches π is replaced by its equivalent in
/// [−π, π), except that a positive step of exactly π stays +π. The first
/// value is kept as-is.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return out;
    };
    out.push(first);
    let mut correction = 0.0;
    for w in phase.windows(2) {
        let step = w[1] - w[0];
        if step.abs() >= PI {
            let mut wrapped = (step + PI).rem_euclid(TAU) - PI;
            if wrapped == -PI && step > 0.0 {
                wrapped = PI;
            }
            correction += wrapped - step;
        }
        out.push(w[1] + correction);
    }
    out
}

/// Indices that sort `values` ascending; stable, NaN after every number.
pub(crate) fn argsort(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| match (values[a].is_nan(), values[b].is_nan()) {
        (false, false) => values[a].total_cmp(&values[b]),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    });
    idx
}

/// Error of an outline already expressed relative to the candidate center.
pub fn radial_error(displaced: &[C64]) -> f64 {
    let radius: Vec<f64> = displaced.iter().map(|z| z.norm()).collect();
    let phase = unwrap_phase(&displaced.iter().map(|z| z.arg()).collect::<Vec<_>>());
    let order = argsort(&phase);

    let mut worst = 0.0f64;
    for (k, &i) in order.iter().enumerate() {
        let reconstructed = C64::from_polar(radius[k], phase[i]);
        let d = (displaced[i] - reconstructed).norm_sqr();
        // f64::max drops NaN
        if d.is_nan() {
            return f64::NAN;
        }
        worst = worst.max(d);
    }
    worst
}

/// Worst-point squared deviation of `outline` from a radial function about
/// `center`.
///
/// The outline is assumed simple and consistently ordered; a
/// self-intersecting outline still yields a number, just not a meaningful
/// one.
pub fn score(outline: &[C64], center: C64) -> f64 {
    let displaced: Vec<C64> = outline.iter().map(|&z| z - center).collect();
    radial_error(&displaced)
}
