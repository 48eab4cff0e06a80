use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for core and seek operations.
pub type MaatResult<T> = Result<T, MaatError>;

#[derive(Debug, Clone, PartialEq)]
pub enum MaatError {
    // ---- Caller-supplied functions ----
    /// A caller-supplied state, field, or constraint function failed.
    Evaluation {
        source_name: String,
        message: String,
    },

    /// A state function asked for the wrong calling convention.
    CandidateMismatch {
        expected: &'static str,
    },

    // ---- Start point ----
    /// The start point must contain at least one coordinate.
    EmptyStart,

    /// Start coordinates need to be finite.
    NonFiniteStart {
        index: usize,
        value: f64,
    },

    // ---- Bounds ----
    /// The bounds list must contain at least one (lo, hi) pair.
    EmptyBounds,

    /// Bounds length is neither 1 nor the point dimension.
    BoundsLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// A single (lo, hi) pair is malformed.
    InvalidBound {
        index: usize,
        lo: f64,
        hi: f64,
        reason: &'static str,
    },

    // ---- SeekOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLbfgsMem {
        mem: usize,
        reason: &'static str,
    },

    /// Exploration temperature needs to be finite and non-negative.
    InvalidExploration {
        value: f64,
        reason: &'static str,
    },

    // ---- Objective ----
    /// The integrated objective produced a non-finite value during a seek.
    NonFiniteObjective {
        value: f64,
    },

    // ---- Gradient ----
    /// Gradient dimensions do not match point dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Seek outcome ----
    /// The solver finished without a best point.
    MissingBestPoint,

    /// Best-point coordinates must be finite.
    InvalidBestPoint {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl MaatError {
    /// Shorthand for an [`MaatError::Evaluation`] raised inside a named
    /// caller-supplied function.
    pub fn evaluation(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        MaatError::Evaluation { source_name: source_name.into(), message: message.into() }
    }
}

impl std::error::Error for MaatError {}

impl std::fmt::Display for MaatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Caller-supplied functions ----
            MaatError::Evaluation { source_name, message } => {
                write!(f, "Evaluation failed in '{source_name}': {message}")
            }
            MaatError::CandidateMismatch { expected } => {
                write!(f, "Candidate shape mismatch: state function expected {expected}")
            }

            // ---- Start point ----
            MaatError::EmptyStart => {
                write!(f, "Start point must contain at least one coordinate")
            }
            MaatError::NonFiniteStart { index, value } => {
                write!(f, "Non-finite start coordinate at index {index}: {value}")
            }

            // ---- Bounds ----
            MaatError::EmptyBounds => {
                write!(f, "Bounds must contain at least one (lo, hi) pair")
            }
            MaatError::BoundsLengthMismatch { expected, found } => {
                write!(f, "Bounds length mismatch: expected {expected} pairs, found {found}")
            }
            MaatError::InvalidBound { index, lo, hi, reason } => {
                write!(f, "Invalid bound at index {index}: ({lo}, {hi}): {reason}")
            }

            // ---- SeekOptions ----
            MaatError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            MaatError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost change tolerance {tol}: {reason}")
            }
            MaatError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            MaatError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            MaatError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            MaatError::InvalidLbfgsMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            MaatError::InvalidExploration { value, reason } => {
                write!(f, "Invalid exploration temperature {value}: {reason}")
            }

            // ---- Objective ----
            MaatError::NonFiniteObjective { value } => {
                write!(f, "Non-finite objective value: {value}")
            }

            // ---- Gradient ----
            MaatError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            MaatError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- Seek outcome ----
            MaatError::MissingBestPoint => {
                write!(f, "Missing best point in solver outcome")
            }
            MaatError::InvalidBestPoint { index, value, reason } => {
                write!(f, "Invalid best-point coordinate at index {index}: {value}: {reason}")
            }

            // ---- Argmin ----
            MaatError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            MaatError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            MaatError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            MaatError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            MaatError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            MaatError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            MaatError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            MaatError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            MaatError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for MaatError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast::<MaatError>() {
            Ok(maat_err) => maat_err,
            Err(other) => match other.downcast::<ArgminError>() {
                Ok(argmin_err) => match argmin_err {
                    ArgminError::InvalidParameter { text } => MaatError::InvalidParameter { text },
                    ArgminError::NotImplemented { text } => MaatError::NotImplemented { text },
                    ArgminError::NotInitialized { text } => MaatError::NotInitialized { text },
                    ArgminError::ConditionViolated { text } => {
                        MaatError::ConditionViolated { text }
                    }
                    ArgminError::CheckpointNotFound { text } => {
                        MaatError::CheckPointNotFound { text }
                    }
                    ArgminError::PotentialBug { text } => MaatError::PotentialBug { text },
                    ArgminError::ImpossibleError { text } => MaatError::ImpossibleError { text },
                    _ => MaatError::UnknownError,
                },
                Err(err) => MaatError::BackendError { text: err.to_string() },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting for representative variants of each error group.
    // - Round-tripping a MaatError through argmin's boxed Error type.
    // - Mapping of raw ArgminError values into the wrapper variants.
    // -------------------------------------------------------------------------

    #[test]
    fn display_mentions_offending_values() {
        let err = MaatError::BoundsLengthMismatch { expected: 3, found: 2 };
        let text = err.to_string();
        assert!(text.contains('3') && text.contains('2'), "got: {text}");

        let err = MaatError::NonFiniteObjective { value: f64::NAN };
        assert!(err.to_string().contains("Non-finite"));
    }

    #[test]
    fn evaluation_helper_carries_source_name() {
        let err = MaatError::evaluation("Harmony", "negative dissonance");
        assert_eq!(
            err,
            MaatError::Evaluation {
                source_name: "Harmony".to_string(),
                message: "negative dissonance".to_string(),
            }
        );
        assert!(err.to_string().contains("Harmony"));
    }

    #[test]
    fn maat_error_round_trips_through_argmin_error() {
        let original = MaatError::NonFiniteObjective { value: f64::INFINITY };
        let boxed: Error = original.clone().into();
        let back: MaatError = boxed.into();
        assert_eq!(back, original);
    }

    #[test]
    fn argmin_error_maps_to_wrapper_variant() {
        let argmin_err: Error =
            ArgminError::InvalidParameter { text: "bad".to_string() }.into();
        let mapped: MaatError = argmin_err.into();
        assert_eq!(mapped, MaatError::InvalidParameter { text: "bad".to_string() });
    }

    #[test]
    fn foreign_error_becomes_backend_error() {
        let foreign: Error = std::fmt::Error.into();
        let mapped: MaatError = foreign.into();
        assert!(matches!(mapped, MaatError::BackendError { .. }));
    }
}
