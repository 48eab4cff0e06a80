//! core::engine — the MaatCore orchestration engine.
//!
//! Purpose
//! -------
//! Own the field and constraint collections plus the two penalty
//! coefficients, and fold them into a single scalar objective that generic
//! unconstrained solvers can minimize. The engine is deliberately free of
//! solver knowledge; the seek layer composes [`MaatCore::integrate`] with a
//! caller-supplied state function and hands the result to argmin.
//!
//! Key behaviors
//! -------------
//! - `integrate`: weighted field sum + Occam regularization + quadratic
//!   exterior penalty over violated constraints.
//! - `constraint_report`: per-constraint margins, statuses, and adjustment
//!   hints in declaration order.
//! - Coefficient accessors for the external reflection-loop pattern: a
//!   caller may raise `safety_lambda` after observing a violation, or relax
//!   it after consecutive safe runs, and the next `integrate` sees the new
//!   value immediately.
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine holds no history: repeated `integrate`/`seek` calls with
//!   mutated coefficients never observe stale penalty values.
//! - Caller closures are assumed pure and deterministic; their errors
//!   propagate unmodified and their outputs are not sanitized. A NaN or
//!   infinite field value flows straight out of `integrate`.
//! - Concurrent mutation of the coefficients is unsupported; callers
//!   serialize access if they share an engine across threads.
//!
//! Conventions
//! -----------
//! - The exterior penalty `safety_lambda * weight * max(0, -margin)^2` is
//!   zero-valued and zero-gradient while satisfied and grows quadratically
//!   with violation depth. It is only once continuously differentiable at
//!   `margin == 0` (a one-sided kink between the flat and quadratic
//!   regimes), which can slow gradient-based local search near the feasible
//!   boundary. This is a documented caveat of the method, not a defect.
//! - `safety_lambda` should be large relative to field magnitudes for
//!   near-feasible optima; `occam_lambda` biases ties toward
//!   lower-complexity states.

use crate::{
    core::{
        constraint::{Constraint, ConstraintReport},
        field::Field,
        state::State,
    },
    errors::MaatResult,
};

/// Default penalty strength; heavy enough that violations dominate
/// typical field values.
pub const DEFAULT_SAFETY_LAMBDA: f64 = 1e6;

/// Default complexity-regularization strength (disabled).
pub const DEFAULT_OCCAM_LAMBDA: f64 = 0.0;

/// Orchestration engine over fields, constraints, and penalty coefficients.
///
/// Constructed once per problem setup; the coefficients may be mutated
/// between seeks by an external reflection loop.
#[derive(Debug)]
pub struct MaatCore<S> {
    fields: Vec<Field<S>>,
    constraints: Vec<Constraint<S>>,
    safety_lambda: f64,
    occam_lambda: f64,
}

impl<S: State> MaatCore<S> {
    /// Build an engine over a field set with default coefficients and no
    /// constraints.
    pub fn new(fields: Vec<Field<S>>) -> Self {
        Self {
            fields,
            constraints: Vec::new(),
            safety_lambda: DEFAULT_SAFETY_LAMBDA,
            occam_lambda: DEFAULT_OCCAM_LAMBDA,
        }
    }

    /// Attach a constraint set, replacing any previous one.
    pub fn with_constraints(mut self, constraints: Vec<Constraint<S>>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the penalty strength at construction time.
    pub fn with_safety_lambda(mut self, safety_lambda: f64) -> Self {
        self.safety_lambda = safety_lambda;
        self
    }

    /// Set the complexity-regularization strength at construction time.
    pub fn with_occam_lambda(mut self, occam_lambda: f64) -> Self {
        self.occam_lambda = occam_lambda;
        self
    }

    /// Append a field; declaration order is reporting order.
    pub fn add_field(&mut self, field: Field<S>) {
        self.fields.push(field);
    }

    /// Append a constraint; declaration order is reporting order.
    pub fn add_constraint(&mut self, constraint: Constraint<S>) {
        self.constraints.push(constraint);
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field<S>] {
        &self.fields
    }

    /// Constraints in declaration order.
    pub fn constraints(&self) -> &[Constraint<S>] {
        &self.constraints
    }

    /// Current penalty strength.
    pub fn safety_lambda(&self) -> f64 {
        self.safety_lambda
    }

    /// Mutate the penalty strength; the next evaluation sees the new value.
    pub fn set_safety_lambda(&mut self, safety_lambda: f64) {
        self.safety_lambda = safety_lambda;
    }

    /// Current complexity-regularization strength.
    pub fn occam_lambda(&self) -> f64 {
        self.occam_lambda
    }

    /// Mutate the complexity-regularization strength.
    pub fn set_occam_lambda(&mut self, occam_lambda: f64) {
        self.occam_lambda = occam_lambda;
    }

    /// Fold fields, Occam regularization, and constraint penalties into a
    /// single scalar objective.
    ///
    /// Computes
    /// `sum(field.value) + occam_lambda * state.complexity()
    ///  + sum(safety_lambda * weight * max(0, -margin)^2)`.
    ///
    /// The result is not sanitized: non-finite field or margin values flow
    /// through so the caller (or the seek adapter, which rejects them at
    /// the solver boundary) decides what to do with them.
    ///
    /// # Errors
    /// Propagates any error raised by a field or constraint closure.
    pub fn integrate(&self, state: &S) -> MaatResult<f64> {
        let mut total = 0.0;
        for field in &self.fields {
            total += field.value(state)?;
        }

        let occam_penalty = self.occam_lambda * state.complexity();

        let mut penalty = 0.0;
        for constraint in &self.constraints {
            let margin = constraint.margin(state)?;
            let violation = (-margin).max(0.0);
            penalty += self.safety_lambda * violation * violation * constraint.weight();
        }

        Ok(total + occam_penalty + penalty)
    }

    /// Inspect every constraint at a state, in declaration order.
    ///
    /// Pure: no mutation, no dependency on any prior seek. Each record
    /// carries the signed margin, an `OK`/`VIOLATION` status, and (on
    /// violation) a hint stating the exact adjustment magnitude.
    ///
    /// # Errors
    /// Propagates any error raised by a constraint closure.
    pub fn constraint_report(&self, state: &S) -> MaatResult<Vec<ConstraintReport>> {
        let mut report = Vec::with_capacity(self.constraints.len());
        for constraint in &self.constraints {
            let margin = constraint.margin(state)?;
            report.push(ConstraintReport::from_margin(constraint.name(), margin));
        }
        Ok(report)
    }
}
