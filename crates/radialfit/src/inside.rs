//! Point-in-outline classification by total turning angle.
//!
//! Seen from a query point, the outline's vertices sweep a total signed angle
//! of ±2π when the point is enclosed and 0 when it is not. Each step between
//! consecutive vertices is wrapped into (−π, π] before summing, so the sum
//! never picks up the ±2π jumps of principal-value angles.

use std::f64::consts::PI;

use crate::C64;

/// Wrap an angle difference into (−π, π] via atan2.
#[inline]
pub(crate) fn wrap_angle(d: f64) -> f64 {
    d.sin().atan2(d.cos())
}

/// Total signed angle swept by the closed outline around `point`.
///
/// A point coincident with a vertex sees that vertex at angle 0.
pub fn turning_angle(point: C64, outline: &[C64]) -> f64 {
    let Some(&first) = outline.first() else {
        return 0.0;
    };
    let first_angle = (first - point).arg();
    let mut prev = first_angle;
    let mut total = 0.0;
    for &z in &outline[1..] {
        let angle = (z - point).arg();
        total += wrap_angle(angle - prev);
        prev = angle;
    }
    total + wrap_angle(first_angle - prev)
}

/// True when `point` is enclosed by the outline (either winding direction).
pub fn is_inside(point: C64, outline: &[C64]) -> bool {
    turning_angle(point, outline).abs() > PI
}
