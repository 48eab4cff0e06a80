//! seek::bounds — resolution and broadcasting of per-dimension box bounds.
//!
//! Purpose
//! -------
//! Turn the caller's raw `(lo, hi)` slice into a validated, per-dimension
//! [`Bounds`] value before any solver is constructed. One pair with an
//! N-dimensional start broadcasts to all N dimensions; any other length
//! mismatch is a configuration error raised up front (fail fast, no
//! solver invocation, no state-function evaluation).
//!
//! Conventions
//! -----------
//! - Every pair must be finite with `lo < hi`; degenerate or reversed
//!   boxes are rejected rather than silently reordered.
//! - Resolution happens exactly once per seek, after the calling
//!   convention has fixed the dimensionality.

use crate::{
    errors::{MaatError, MaatResult},
    seek::types::Point,
};

/// Validated per-dimension box bounds for a seek.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pairs: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validate raw bounds against the resolved dimensionality, applying
    /// the single-pair broadcast rule.
    ///
    /// # Errors
    /// - [`MaatError::EmptyBounds`] for an empty slice.
    /// - [`MaatError::InvalidBound`] for a non-finite pair or `lo >= hi`.
    /// - [`MaatError::BoundsLengthMismatch`] when the length is neither 1
    ///   nor `dim`.
    pub fn resolve(raw: &[(f64, f64)], dim: usize) -> MaatResult<Self> {
        if raw.is_empty() {
            return Err(MaatError::EmptyBounds);
        }
        for (index, &(lo, hi)) in raw.iter().enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(MaatError::InvalidBound {
                    index,
                    lo,
                    hi,
                    reason: "Bounds must be finite.",
                });
            }
            if lo >= hi {
                return Err(MaatError::InvalidBound {
                    index,
                    lo,
                    hi,
                    reason: "Lower bound must be strictly below upper bound.",
                });
            }
        }
        let pairs = if raw.len() == 1 && dim > 1 {
            vec![raw[0]; dim]
        } else if raw.len() != dim {
            return Err(MaatError::BoundsLengthMismatch { expected: dim, found: raw.len() });
        } else {
            raw.to_vec()
        };
        Ok(Self { pairs })
    }

    /// Number of bounded dimensions.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false after resolution; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The `(lo, hi)` pair for one dimension.
    pub fn pair(&self, index: usize) -> (f64, f64) {
        self.pairs[index]
    }

    /// Clamp a point into the box, coordinate by coordinate.
    pub fn clamp(&self, point: &Point) -> Point {
        Point::from_iter(
            point.iter().zip(&self.pairs).map(|(&x, &(lo, hi))| x.clamp(lo, hi)),
        )
    }

    /// Whether every coordinate lies inside the closed box.
    pub fn contains(&self, point: &Point) -> bool {
        point.iter().zip(&self.pairs).all(|(&x, &(lo, hi))| x >= lo && x <= hi)
    }

    /// Squared distance from the point to the box, coordinate by
    /// coordinate. Zero everywhere inside; grows quadratically outside, so
    /// a gradient taken through it always points back toward the box.
    pub fn excess(&self, point: &Point) -> f64 {
        point
            .iter()
            .zip(&self.pairs)
            .map(|(&x, &(lo, hi))| {
                let overshoot = x - x.clamp(lo, hi);
                overshoot * overshoot
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_pair_broadcasts_to_all_dimensions() {
        let bounds = Bounds::resolve(&[(0.0, 1.0)], 3).expect("resolve should succeed");
        assert_eq!(bounds.len(), 3);
        for i in 0..3 {
            assert_eq!(bounds.pair(i), (0.0, 1.0));
        }
    }

    #[test]
    fn exact_length_match_is_kept_verbatim() {
        let raw = [(0.0, 1.0), (-2.0, 2.0)];
        let bounds = Bounds::resolve(&raw, 2).expect("resolve should succeed");
        assert_eq!(bounds.pair(1), (-2.0, 2.0));
    }

    #[test]
    fn empty_bounds_are_rejected() {
        assert_eq!(Bounds::resolve(&[], 1).expect_err("should fail"), MaatError::EmptyBounds);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let raw = [(0.0, 1.0), (0.0, 1.0)];
        let err = Bounds::resolve(&raw, 3).expect_err("should fail");
        assert_eq!(err, MaatError::BoundsLengthMismatch { expected: 3, found: 2 });
    }

    #[test]
    fn degenerate_and_non_finite_pairs_are_rejected() {
        assert!(matches!(
            Bounds::resolve(&[(1.0, 1.0)], 1),
            Err(MaatError::InvalidBound { index: 0, .. })
        ));
        assert!(matches!(
            Bounds::resolve(&[(2.0, 1.0)], 1),
            Err(MaatError::InvalidBound { .. })
        ));
        assert!(matches!(
            Bounds::resolve(&[(0.0, f64::INFINITY)], 1),
            Err(MaatError::InvalidBound { .. })
        ));
    }

    #[test]
    fn excess_is_zero_inside_and_quadratic_outside() {
        let bounds = Bounds::resolve(&[(0.0, 1.0)], 2).expect("resolve should succeed");
        assert_eq!(bounds.excess(&array![0.0, 1.0]), 0.0);
        assert_eq!(bounds.excess(&array![0.5, 0.25]), 0.0);
        // 0.5 below the lower bound and 2.0 above the upper bound
        let outside = array![-0.5, 3.0];
        assert!((bounds.excess(&outside) - (0.25 + 4.0)).abs() < 1e-12);
    }

    #[test]
    fn clamp_and_contains_agree() {
        let bounds = Bounds::resolve(&[(0.0, 1.0)], 2).expect("resolve should succeed");
        let outside = array![-0.5, 1.5];
        assert!(!bounds.contains(&outside));
        let clamped = bounds.clamp(&outside);
        assert_eq!(clamped, array![0.0, 1.0]);
        assert!(bounds.contains(&clamped));
    }
}
