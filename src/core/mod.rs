//! core — the Field/Constraint data model and the MaatCore engine.
//!
//! Purpose
//! -------
//! Hold everything the framework needs to turn a set of named soft
//! objectives and hard requirements into one explainable scalar objective:
//! the [`State`] contract, the [`Field`] and [`Constraint`] value objects,
//! and the [`MaatCore`] engine with `integrate` and `constraint_report`.
//!
//! Key behaviors
//! -------------
//! - Fields contribute `func(state) * weight` to the objective.
//! - Constraints contribute a quadratic exterior penalty
//!   `safety_lambda * weight * max(0, -margin)^2`, zero while satisfied.
//! - States expose an optional complexity measure consumed by Occam
//!   regularization (`occam_lambda * complexity`).
//!
//! Conventions
//! -----------
//! - Declaration order of fields and constraints is reporting order.
//! - Names exist only for reporting; the engine never dispatches on them.
//! - Caller closures are fallible (`MaatResult<f64>`) so their errors
//!   propagate unmodified; the engine neither retries nor sanitizes.

pub mod constraint;
pub mod engine;
pub mod field;
pub mod state;

pub use self::constraint::{Constraint, ConstraintFn, ConstraintReport, ConstraintStatus};
pub use self::engine::{DEFAULT_OCCAM_LAMBDA, DEFAULT_SAFETY_LAMBDA, MaatCore};
pub use self::field::{Field, FieldFn};
pub use self::state::State;
