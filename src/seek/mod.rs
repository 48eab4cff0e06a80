//! seek — bounded optimization over the integrated objective.
//!
//! Purpose
//! -------
//! Provide the optimization layer of the crate: a single dispatcher
//! (`MaatCore::seek`) that minimizes `integrate ∘ state_fn` inside box
//! bounds, delegating to an Argmin-backed L-BFGS solver for local
//! refinement or to seeded simulated annealing for global search. Callers
//! supply a state function, a start point, bounds, and options, and obtain
//! the best point and run diagnostics without touching backend solver
//! details.
//!
//! Key behaviors
//! -------------
//! - Resolve the scalar/vector calling convention **once** from the shape
//!   of the start point; the state function receives a tagged [`Candidate`]
//!   and never guesses how to interpret its argument.
//! - Validate and broadcast bounds (one pair per dimension, or a single
//!   pair broadcast across all) before any solver work.
//! - Enforce bounds in local mode by projecting trial points into the box
//!   and fencing the exterior with a quadratic distance term, and in
//!   global mode through clamped neighbor moves (both in `adapter`).
//! - Differentiate by finite differences with central-first, forward-
//!   fallback semantics and error capture out of the FD closures.
//! - Reject non-finite objective values at the solver boundary with
//!   `MaatError::NonFiniteObjective`; the engine itself never sanitizes.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every candidate handed to the state function lies inside the resolved
//!   box, in both modes; so does the best point in the final outcome.
//! - A seeded global run is fully reproducible: the caller seed pins the
//!   solver's acceptance RNG and, through a fixed salt, the neighbor-move
//!   RNG.
//! - `seek` holds no state across calls; mutating the engine's coefficients
//!   between calls is observed by the next run.
//!
//! Conventions
//! -----------
//! - Points and gradients are `ndarray`-based aliases ([`types::Point`],
//!   [`types::Grad`]); the objective is minimized directly, with no sign
//!   flips anywhere in the stack.
//! - Public entrypoints that can fail return `MaatResult<T>`; callers never
//!   see raw Argmin errors.
//! - Solver construction (`builders`), execution (`run`), and outcome
//!   shaping (`traits::SeekOutcome`) are separate layers so each can be
//!   tested in isolation.
//!
//! Downstream usage
//! ----------------
//! - Most callers need only `MaatCore::seek` plus [`SeekOptions`] and
//!   [`Candidate`]; `use maat_core::seek::prelude::*;` imports the curated
//!   surface in one line.
//! - A reflection loop is the caller's concern: run `seek`, inspect
//!   `constraint_report` at the best point, adjust coefficients or bounds,
//!   and run again.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: convention
//!   resolution and option validation (`traits`), bounds resolution and
//!   the exterior distance (`bounds`), adapter cost/gradient/anneal
//!   behavior (`adapter`), and solver construction (`builders`).
//! - End-to-end convergence, seeded reproducibility, and the penalty
//!   scenarios are exercised in the integration suite.

pub mod adapter;
pub mod api;
pub mod bounds;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

pub use bounds::Bounds;
pub use traits::{
    CallMode, Candidate, LineSearcher, SeekMode, SeekOptions, SeekOutcome, Start, StateFn,
    Tolerances,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use maat_core::seek::prelude::*;
//
// to import the main seek surface in a single line.

pub mod prelude {
    pub use super::bounds::Bounds;
    pub use super::traits::{
        CallMode, Candidate, LineSearcher, SeekMode, SeekOptions, SeekOutcome, Start, StateFn,
        Tolerances,
    };
    pub use super::types::{Cost, Grad, Point};
}
