//! core::field — weighted soft-objective terms.
//!
//! A [`Field`] is an immutable, named, weighted scalar evaluator over a
//! state. Its contribution to the integrated objective is
//! `func(state) * weight`; the name exists purely for reporting.

use std::fmt;

use crate::{
    core::state::State,
    errors::MaatResult,
};

/// Boxed evaluator for a field over a state.
///
/// Closures are fallible so that errors raised inside caller code propagate
/// unmodified through `integrate` and `seek`; infallible closures are
/// wrapped by [`Field::new`].
pub type FieldFn<S> = Box<dyn Fn(&S) -> MaatResult<f64> + Send + Sync>;

/// A weighted scalar function over a state.
///
/// Invariant: the closure must be a pure, deterministic function of the
/// state for optimization results to be reproducible. The engine performs
/// no purity validation; this is the caller's contract.
pub struct Field<S> {
    name: String,
    func: FieldFn<S>,
    weight: f64,
}

impl<S: State> Field<S> {
    /// Build a field from an infallible closure.
    ///
    /// The weight scales the raw value inside [`Field::value`]; use `1.0`
    /// for an unscaled term.
    pub fn new(
        name: impl Into<String>, weight: f64, func: impl Fn(&S) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), func: Box::new(move |state| Ok(func(state))), weight }
    }

    /// Build a field from a fallible closure.
    ///
    /// Errors returned by the closure propagate unmodified out of
    /// `integrate`, `seek`, and `Diagnostics::report`.
    pub fn fallible(
        name: impl Into<String>, weight: f64,
        func: impl Fn(&S) -> MaatResult<f64> + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), func: Box::new(func), weight }
    }

    /// Name used in diagnostic reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight applied to the raw value.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Evaluate the underlying closure without weighting.
    ///
    /// # Errors
    /// Propagates whatever the caller's closure raises.
    pub fn raw(&self, state: &S) -> MaatResult<f64> {
        (self.func)(state)
    }

    /// Weighted contribution of this field: `raw(state) * weight`.
    ///
    /// # Errors
    /// Propagates whatever the caller's closure raises.
    pub fn value(&self, state: &S) -> MaatResult<f64> {
        Ok(self.raw(state)? * self.weight)
    }
}

impl<S> fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}
