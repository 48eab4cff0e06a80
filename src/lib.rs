//! maat_core — constrained-optimization engine with weighted fields and
//! penalty-enforced constraints.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small optimization framework built around
//! three ideas: an objective assembled from named, weighted **fields**; hard
//! requirements expressed as **constraints** whose violations are folded into
//! the objective as quadratic exterior penalties; and a single **seek**
//! dispatcher that minimizes the integrated objective inside box bounds,
//! locally (L-BFGS) or globally (simulated annealing).
//!
//! Key behaviors
//! -------------
//! - `core` owns the data model (`Field`, `Constraint`, `MaatCore`) and the
//!   two scoring operations: `integrate` (fields + Occam term + penalties)
//!   and `constraint_report` (per-constraint margins, statuses, and repair
//!   hints).
//! - `seek` wraps the Argmin solvers behind one entrypoint,
//!   `MaatCore::seek`, resolving the scalar/vector calling convention from
//!   the start point and enforcing bounds in both modes.
//! - `diagnostics` decomposes the objective into per-field contributions
//!   for inspection.
//! - `errors` normalizes configuration issues, caller failures, and backend
//!   solver errors into one enum (`MaatError`) with a common result alias
//!   (`MaatResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Constraint margins follow the `>= 0` satisfied convention; a negative
//!   margin is a violation and contributes
//!   `safety_lambda * weight * margin^2` to the objective.
//! - `integrate` is a pure fold over caller closures and never sanitizes
//!   values; non-finite objectives are rejected only at the solver boundary
//!   inside `seek`.
//! - The engine holds no solver state; callers drive reflection loops by
//!   mutating coefficients between `seek` calls.
//!
//! Conventions
//! -----------
//! - Caller closures return `MaatResult<f64>` (with an infallible
//!   convenience constructor); all fallible public APIs return
//!   `MaatResult<T>`.
//! - Points and gradients use `ndarray` types throughout the seek layer.
//! - Logging is opt-in: the `obs_slog` feature attaches a per-iteration
//!   terminal observer to solver runs when `SeekOptions::verbose` is set.
//!
//! Downstream usage
//! ----------------
//! - Build a `MaatCore`, add fields and constraints, then call `integrate`
//!   or `constraint_report` directly, or hand the engine a state function
//!   and bounds via `seek`.
//! - `use maat_core::prelude::*;` imports the main surface in a single
//!   line.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module and cover the scoring formulas,
//!   convention resolution, option validation, bounds projection, and
//!   adapter behavior.
//! - Integration tests in `tests/` run full seeks end to end: local
//!   convergence, seeded global reproducibility, penalty dominance, and
//!   reflection loops.

pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod seek;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use maat_core::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::core::{
        Constraint, ConstraintReport, ConstraintStatus, Field, MaatCore, State,
    };
    pub use crate::diagnostics::{Diagnostics, FieldReport};
    pub use crate::errors::{MaatError, MaatResult};
    pub use crate::seek::prelude::*;
}
