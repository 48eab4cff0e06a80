//! Validation helpers for the seek dispatcher.
//!
//! This module centralizes common consistency checks used across the
//! dispatcher interface:
//!
//! - **Tolerance checks**: [`verify_tol_grad`], [`verify_tol_cost`] ensure
//!   numeric tolerances are finite and strictly positive when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries on finite-difference output.
//! - **Outcome checks**: [`validate_best_point`] and [`validate_objective`]
//!   ensure the solver handed back a usable result.
//!
//! These helpers standardize error reporting through domain-specific
//! [`MaatError`] variants so higher-level code stays uniform.

use crate::{
    errors::{MaatError, MaatResult},
    seek::types::{Grad, Point},
};

/// Validate the optional gradient-norm tolerance.
///
/// Accepts `None`; when `Some`, the value must be finite and strictly
/// positive.
///
/// # Errors
/// Returns [`MaatError::InvalidTolGrad`] if the value is non-finite or ≤ 0.
pub fn verify_tol_grad(tol: Option<f64>) -> MaatResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(MaatError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(MaatError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance.
///
/// Accepts `None`; when `Some`, the value must be finite and strictly
/// positive.
///
/// # Errors
/// Returns [`MaatError::InvalidTolCost`] if the value is non-finite or ≤ 0.
pub fn verify_tol_cost(tol: Option<f64>) -> MaatResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(MaatError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(MaatError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`MaatError::GradientDimMismatch`] if length does not match `dim`.
/// - [`MaatError::InvalidGradient`] with the index/value of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> MaatResult<()> {
    if grad.len() != dim {
        return Err(MaatError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(MaatError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap the solver's best point.
///
/// Accepts only a present vector with all finite entries.
///
/// # Errors
/// - [`MaatError::MissingBestPoint`] if no vector was provided.
/// - [`MaatError::InvalidBestPoint`] if any element is non-finite.
pub fn validate_best_point(best: Option<Point>) -> MaatResult<Point> {
    match best {
        Some(point) => {
            for (index, &value) in point.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MaatError::InvalidBestPoint {
                        index,
                        value,
                        reason: "Best-point coordinates must be finite.",
                    });
                }
            }
            Ok(point)
        }
        None => Err(MaatError::MissingBestPoint),
    }
}

/// Validate that the best objective value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`MaatError::NonFiniteObjective`] if the value is NaN or
/// infinite.
pub fn validate_objective(value: f64) -> MaatResult<()> {
    if !value.is_finite() {
        return Err(MaatError::NonFiniteObjective { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn none_tolerances_are_accepted() {
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_cost(None).is_ok());
    }

    #[test]
    fn negative_tolerances_are_rejected() {
        assert!(matches!(verify_tol_grad(Some(-1.0)), Err(MaatError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_cost(Some(-1.0)), Err(MaatError::InvalidTolCost { .. })));
    }

    #[test]
    fn gradient_dimension_and_finiteness_are_enforced() {
        assert!(validate_grad(&array![1.0, 2.0], 2).is_ok());
        assert!(matches!(
            validate_grad(&array![1.0], 2),
            Err(MaatError::GradientDimMismatch { expected: 2, found: 1 })
        ));
        assert!(matches!(
            validate_grad(&array![1.0, f64::INFINITY], 2),
            Err(MaatError::InvalidGradient { index: 1, .. })
        ));
    }

    #[test]
    fn best_point_checks_cover_missing_and_non_finite() {
        assert!(validate_best_point(Some(array![0.1])).is_ok());
        assert_eq!(validate_best_point(None).expect_err("should fail"), MaatError::MissingBestPoint);
        assert!(matches!(
            validate_best_point(Some(array![f64::NAN])),
            Err(MaatError::InvalidBestPoint { index: 0, .. })
        ));
    }

    #[test]
    fn objective_must_be_finite() {
        assert!(validate_objective(-123.45).is_ok());
        assert!(matches!(
            validate_objective(f64::NAN),
            Err(MaatError::NonFiniteObjective { .. })
        ));
    }
}
