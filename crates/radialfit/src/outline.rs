//! Outline representation and input normalization.
//!
//! Outlines arrive either as complex points or as a real coordinate array of
//! shape `2×N` or `N×2`. Both are normalized to an [`Outline`], an ordered
//! sequence of complex points `x + iy`, implicitly closed.

use crate::error::AnalysisError;
use crate::C64;

/// Minimum number of vertices for a closed outline.
pub const MIN_OUTLINE_POINTS: usize = 3;

/// Raw outline input prior to normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineInput {
    /// One-dimensional sequence of complex points.
    Complex(Vec<C64>),
    /// Real coordinate array in row-major order.
    ///
    /// `shape` may have any rank; only `[2, N]` and `[N, 2]` are accepted.
    Array {
        /// Array dimensions, slowest axis first.
        shape: Vec<usize>,
        /// Row-major values, `shape.iter().product()` of them.
        data: Vec<f64>,
    },
}

impl OutlineInput {
    /// `N×2` array from `(x, y)` rows.
    pub fn from_rows(rows: &[[f64; 2]]) -> Self {
        Self::Array {
            shape: vec![rows.len(), 2],
            data: rows.iter().flat_map(|&[x, y]| [x, y]).collect(),
        }
    }

    /// `2×N` array from separate x and y columns.
    ///
    /// Lengths must agree, otherwise normalization reports an invalid shape.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Self {
        let mut data = Vec::with_capacity(xs.len() + ys.len());
        data.extend_from_slice(xs);
        data.extend_from_slice(ys);
        Self::Array {
            shape: vec![2, xs.len()],
            data,
        }
    }
}

impl From<Vec<C64>> for OutlineInput {
    fn from(points: Vec<C64>) -> Self {
        Self::Complex(points)
    }
}

impl From<Vec<[f64; 2]>> for OutlineInput {
    fn from(rows: Vec<[f64; 2]>) -> Self {
        Self::from_rows(&rows)
    }
}

impl From<&[[f64; 2]]> for OutlineInput {
    fn from(rows: &[[f64; 2]]) -> Self {
        Self::from_rows(rows)
    }
}

/// Closed polygonal outline, vertices stored as `x + iy`.
///
/// The last vertex connects back to the first. Consecutive duplicates are
/// tolerated; scoring degrades instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<C64>,
}

impl Outline {
    /// Normalize any accepted input into an outline.
    pub fn new(input: impl Into<OutlineInput>) -> Result<Self, AnalysisError> {
        normalize(input.into())
    }

    /// Vertices in traversal order.
    pub fn points(&self) -> &[C64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed outline.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convert back to `(x, y)` rows.
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|z| [z.re, z.im]).collect()
    }

    /// Smallest and largest coordinate over both axes combined.
    pub fn coordinate_range(&self) -> [f64; 2] {
        self.points
            .iter()
            .fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], z| {
                [lo.min(z.re).min(z.im), hi.max(z.re).max(z.im)]
            })
    }
}

/// Canonicalize outline input.
///
/// A `[2, N]` array is read as an x row followed by a y row; a `[N, 2]`
/// array as `(x, y)` rows. The leading axis is checked first, so `[2, 2]`
/// counts as `2×N`.
pub fn normalize(input: OutlineInput) -> Result<Outline, AnalysisError> {
    let points = match input {
        OutlineInput::Complex(points) => points,
        OutlineInput::Array { shape, data } => {
            let invalid = || AnalysisError::InvalidShape {
                shape: shape.clone(),
            };
            if shape.len() != 2 || shape[0].checked_mul(shape[1]) != Some(data.len()) {
                return Err(invalid());
            }
            if shape[0] == 2 {
                let n = shape[1];
                data[..n]
                    .iter()
                    .zip(&data[n..])
                    .map(|(&x, &y)| C64::new(x, y))
                    .collect()
            } else if shape[1] == 2 {
                data.chunks_exact(2)
                    .map(|xy| C64::new(xy[0], xy[1]))
                    .collect()
            } else {
                return Err(invalid());
            }
        }
    };

    if points.len() < MIN_OUTLINE_POINTS {
        return Err(AnalysisError::TooFewPoints { got: points.len() });
    }
    Ok(Outline { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_input_is_kept_verbatim() {
        let pts = vec![C64::new(0.0, 0.0), C64::new(1.0, 0.0), C64::new(0.0, 1.0)];
        let outline = Outline::new(pts.clone()).unwrap();
        assert_eq!(outline.points(), pts.as_slice());
    }

    #[test]
    fn rows_roundtrip_exactly() {
        let rows = vec![[0.1, -2.5], [3.0e-7, 4.25], [-1.0 / 3.0, 7.0], [1e12, -1e-12]];
        let outline = Outline::new(rows.clone()).unwrap();
        assert_eq!(outline.to_xy(), rows);
    }

    #[test]
    fn columns_match_rows() {
        let xs = [0.0, 2.0, 2.0, 0.0];
        let ys = [0.0, 0.0, 1.0, 1.0];
        let from_cols = normalize(OutlineInput::from_columns(&xs, &ys)).unwrap();
        let rows: Vec<[f64; 2]> = xs.iter().zip(&ys).map(|(&x, &y)| [x, y]).collect();
        let from_rows = Outline::new(rows).unwrap();
        assert_eq!(from_cols, from_rows);
    }

    #[test]
    fn leading_axis_of_two_wins() {
        let input = OutlineInput::Array {
            shape: vec![2, 2],
            data: vec![1.0, 2.0, 3.0, 4.0],
        };
        assert_eq!(
            normalize(input),
            Err(AnalysisError::TooFewPoints { got: 2 })
        );

        let input = OutlineInput::Array {
            shape: vec![2, 3],
            data: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        };
        let outline = normalize(input).unwrap();
        assert_eq!(outline.to_xy(), vec![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn rejects_unsupported_shapes() {
        let bad = [
            OutlineInput::Array {
                shape: vec![6],
                data: vec![0.0; 6],
            },
            OutlineInput::Array {
                shape: vec![3, 3],
                data: vec![0.0; 9],
            },
            OutlineInput::Array {
                shape: vec![2, 2, 2],
                data: vec![0.0; 8],
            },
            OutlineInput::Array {
                shape: vec![4, 2],
                data: vec![0.0; 7],
            },
            OutlineInput::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
        ];
        for input in bad {
            assert!(
                matches!(normalize(input), Err(AnalysisError::InvalidShape { .. })),
                "expected InvalidShape"
            );
        }
    }

    #[test]
    fn coordinate_range_spans_both_axes() {
        let outline = Outline::new(vec![[0.0, -3.0], [5.0, 1.0], [2.0, 2.0]]).unwrap();
        assert_eq!(outline.coordinate_range(), [-3.0, 5.0]);
    }
}
