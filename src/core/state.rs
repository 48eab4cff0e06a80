//! core::state — the structured state contract evaluated by fields and
//! constraints.
//!
//! Purpose
//! -------
//! Define the [`State`] trait that every problem state implements. A state
//! is a plain caller-defined struct whose typed attributes are read directly
//! by field and constraint closures, so a misspelled attribute is a compile
//! error rather than a runtime failure. The only behavior the engine itself
//! needs from a state is its optional complexity measure, consumed by Occam
//! regularization.
//!
//! Conventions
//! -----------
//! - States are produced fresh per evaluation by the caller's state function
//!   and are never owned or cached by the engine.
//! - `complexity` defaults to `0.0`; problems without a simplicity bias can
//!   ignore it entirely.

/// A problem state evaluated by fields and constraints.
///
/// Implementors are ordinary structs; the engine only consults
/// [`State::complexity`]. Everything else about the state is a private
/// contract between the caller's state function and the caller's field and
/// constraint closures.
///
/// # Example
/// ```
/// use maat_core::core::State;
///
/// struct Allocation {
///     cpu: f64,
///     memory: f64,
/// }
///
/// impl State for Allocation {
///     fn complexity(&self) -> f64 {
///         self.cpu + self.memory
///     }
/// }
/// ```
pub trait State {
    /// Complexity measure used by Occam regularization.
    ///
    /// Multiplied by the engine's `occam_lambda` inside `integrate`. Lower
    /// is simpler. Defaults to `0.0` for states without a complexity notion.
    fn complexity(&self) -> f64 {
        0.0
    }
}

/// Bare scalars act as minimal states for single-value toy problems.
impl State for f64 {}

/// Raw coordinate vectors act as minimal states when the candidate point
/// itself is the whole problem description.
impl State for Vec<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl State for Plain {}

    struct Weighed(f64);
    impl State for Weighed {
        fn complexity(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn complexity_defaults_to_zero() {
        assert_eq!(Plain.complexity(), 0.0);
        assert_eq!(3.25_f64.complexity(), 0.0);
    }

    #[test]
    fn complexity_override_is_used() {
        assert_eq!(Weighed(2.5).complexity(), 2.5);
    }
}
