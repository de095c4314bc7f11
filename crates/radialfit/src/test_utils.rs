//! Synthetic outlines shared by unit tests.

use std::f64::consts::TAU;

use crate::C64;

/// Outline with vertices at `θ_i = 2πi/n` and radius `radius(θ_i)` around
/// `center`, counter-clockwise.
pub(crate) fn radial_outline(center: C64, n: usize, radius: impl Fn(f64) -> f64) -> Vec<C64> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            center + C64::from_polar(radius(theta), theta)
        })
        .collect()
}

/// `n` points evenly sampled on a circle.
pub(crate) fn circle(center: C64, radius: f64, n: usize) -> Vec<C64> {
    radial_outline(center, n, |_| radius)
}

/// Regular `n`-gon with its first vertex at angle `phase`.
pub(crate) fn regular_polygon(center: C64, radius: f64, n: usize, phase: f64) -> Vec<C64> {
    (0..n)
        .map(|i| center + C64::from_polar(radius, phase + TAU * i as f64 / n as f64))
        .collect()
}

/// C-shaped band around the origin: outer arc of radius 1 counter-clockwise
/// from `gap` to `2π − gap`, then an inner arc of radius `inner` back.
///
/// No interior point sees the whole band along single-crossing rays.
pub(crate) fn c_shape(inner: f64, gap: f64, n_arc: usize) -> Vec<C64> {
    let angles: Vec<f64> = (0..n_arc)
        .map(|k| gap + (TAU - 2.0 * gap) * k as f64 / (n_arc - 1) as f64)
        .collect();
    let outer = angles.iter().map(|&t| C64::from_polar(1.0, t));
    let back = angles.iter().rev().map(|&t| C64::from_polar(inner, t));
    outer.chain(back).collect()
}
