//! seek::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and solver aliases used by the seek
//! dispatcher. The rest of the seek code imports these instead of spelling
//! out `ndarray` and Argmin generics, so the backend wiring lives in one
//! place.
//!
//! Conventions
//! -----------
//! - Candidate points and gradients are `ndarray` vectors over `f64`.
//! - `Cost` is the integrated objective itself; the dispatcher minimizes it
//!   directly, with no sign flips anywhere.
//! - The L-BFGS aliases assume Argmin's three-parameter line-search forms
//!   `(Param, Gradient, Float)` as of the pinned Argmin version; the
//!   annealing alias pins the solver RNG to `Xoshiro256PlusPlus` so runs
//!   are reproducible from a caller seed.

use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
    simulatedannealing::SimulatedAnnealing,
};
use ndarray::Array1;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::HashMap;

/// Candidate point in solver space.
///
/// Alias for `ndarray::Array1<f64>`. Both modes work on the point itself;
/// local trial points that leave the box are projected back by the
/// adapter's cost function.
pub type Point = Array1<f64>;

/// Gradient vector matching the shape of [`Point`].
pub type Grad = Array1<f64>;

/// Scalar objective value: the integrated score at a candidate state.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps Argmin's counter names (e.g., `"cost_count"`) to counts, passed
/// through to the caller unmodified.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Base initial temperature for global (annealing) seeks; scaled by
/// `1 + exploration` at build time.
pub const BASE_INITIAL_TEMP: f64 = 10.0;

/// Hager–Zhang line search specialized to the seek numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Point, Grad, Cost>;

/// More–Thuente line search specialized to the seek numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Point, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Point, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Point, Grad, Cost>;

/// Seedable simulated-annealing solver used for global seeks.
pub type Annealer = SimulatedAnnealing<f64, Xoshiro256PlusPlus>;
