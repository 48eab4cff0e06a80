//! core::constraint — hard requirements with a signed-margin convention.
//!
//! A [`Constraint`] evaluates a state to a signed margin: `margin >= 0`
//! means satisfied, and a negative margin's magnitude is the violation
//! depth. The constraint itself only evaluates; the satisfied/violated
//! interpretation and the quadratic penalty live in the engine.
//! [`ConstraintReport`] is the per-constraint diagnostic record produced by
//! `MaatCore::constraint_report`.

use std::fmt;

use crate::{
    core::state::State,
    errors::MaatResult,
};

/// Boxed margin evaluator for a constraint over a state.
pub type ConstraintFn<S> = Box<dyn Fn(&S) -> MaatResult<f64> + Send + Sync>;

/// A safety constraint over a state.
///
/// The closure must return a value `>= 0` when the constraint is satisfied;
/// a negative return violates the constraint by its magnitude. The engine
/// trusts this sign convention and does not enforce it.
pub struct Constraint<S> {
    name: String,
    func: ConstraintFn<S>,
    weight: f64,
}

impl<S: State> Constraint<S> {
    /// Build a constraint from an infallible margin closure.
    pub fn new(
        name: impl Into<String>, weight: f64, func: impl Fn(&S) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), func: Box::new(move |state| Ok(func(state))), weight }
    }

    /// Build a constraint from a fallible margin closure.
    pub fn fallible(
        name: impl Into<String>, weight: f64,
        func: impl Fn(&S) -> MaatResult<f64> + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), func: Box::new(func), weight }
    }

    /// Name used in constraint reports and hint messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight applied to this constraint's quadratic penalty.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Evaluate the signed margin at a state.
    ///
    /// # Errors
    /// Propagates whatever the caller's closure raises.
    pub fn margin(&self, state: &S) -> MaatResult<f64> {
        (self.func)(state)
    }
}

impl<S> fmt::Debug for Constraint<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Satisfaction status of a constraint at a particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintStatus {
    /// Margin is non-negative.
    Ok,
    /// Margin is negative; its magnitude is the violation depth.
    Violation,
}

impl fmt::Display for ConstraintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintStatus::Ok => write!(f, "OK"),
            ConstraintStatus::Violation => write!(f, "VIOLATION"),
        }
    }
}

/// Per-constraint diagnostic record, produced in declaration order.
///
/// Ephemeral: built per call to `MaatCore::constraint_report`, never cached,
/// independent of any prior seek.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintReport {
    /// Constraint name.
    pub name: String,
    /// Signed margin at the inspected state.
    pub margin: f64,
    /// Satisfied/violated interpretation of the margin.
    pub status: ConstraintStatus,
    /// Human-readable adjustment hint; present only on violation.
    pub hint: Option<String>,
}

impl ConstraintReport {
    /// Build a report from a name and a signed margin.
    pub(crate) fn from_margin(name: &str, margin: f64) -> Self {
        if margin >= 0.0 {
            Self { name: name.to_string(), margin, status: ConstraintStatus::Ok, hint: None }
        } else {
            let hint =
                format!("Adjust system by at least {:.4} to satisfy {name}", margin.abs());
            Self {
                name: name.to_string(),
                margin,
                status: ConstraintStatus::Violation,
                hint: Some(hint),
            }
        }
    }

    /// Required adjustment magnitude, exactly `|margin|`, when violated.
    pub fn shortfall(&self) -> Option<f64> {
        match self.status {
            ConstraintStatus::Ok => None,
            ConstraintStatus::Violation => Some(self.margin.abs()),
        }
    }
}
