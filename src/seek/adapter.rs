//! Adapter that exposes `integrate ∘ state_fn` as an `argmin` problem.
//!
//! The integrated objective is minimized directly; no sign flips. The
//! adapter owns the glue that the two solver families need:
//!
//! - `CostFunction::cost` projects the solver's trial point into the box,
//!   shapes it into a [`Candidate`] per the resolved calling convention,
//!   builds a state, and integrates it, then adds a quadratic fence term
//!   `FENCE_WEIGHT * excess` for whatever part of the trial point lies
//!   outside the box. The state function therefore only ever sees in-box
//!   candidates, in both modes, and the cost keeps an informative gradient
//!   everywhere: the fence grows with the squared exterior distance, so a
//!   line search that overshoots the box is steered straight back instead
//!   of stalling on a flat region. Non-finite values are rejected here with
//!   `MaatError::NonFiniteObjective`; this is the one place the crate
//!   refuses NaN/Inf, and it is pinned by tests.
//! - `Gradient::gradient` finite-differences the cost closure: central
//!   differences first, falling back to forward differences when the
//!   central approximation fails validation or an evaluation inside the
//!   closure errored (captured via `closure_err`, since the FD closure must
//!   return a bare `f64`).
//! - `Anneal::anneal` proposes bound-clamped neighbor moves for the global
//!   solver: one random coordinate at a time, stepped by a uniform draw
//!   scaled to that dimension's width, repeated `floor(extent) + 1` times.
//!   Annealing proposals never leave the box, so the fence term is zero
//!   for the whole global run.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use argmin::core::{CostFunction, Error, Gradient};
use argmin::solver::simulatedannealing::Anneal;
use finitediff::FiniteDiff;
use rand::Rng;
use rand::distributions::Uniform;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    core::{engine::MaatCore, state::State},
    errors::MaatError,
    seek::{
        bounds::Bounds,
        traits::{CallMode, Candidate, StateFn},
        types::{Cost, Grad, Point},
        validation::validate_grad,
    },
};

/// Weight on the squared exterior distance added to the cost for trial
/// points outside the box.
///
/// The exact value is uncritical: any positive weight gives the exterior
/// region a gradient pointing back at the box, and the term vanishes
/// identically on the box itself, so the in-box objective is unchanged.
pub const FENCE_WEIGHT: f64 = 1.0;

/// Bridges a `MaatCore` and a caller state function to `argmin`'s
/// `CostFunction`, `Gradient`, and `Anneal` traits.
pub struct SeekProblem<'a, S, SF>
where
    S: State,
    SF: StateFn<State = S>,
{
    core: &'a MaatCore<S>,
    state_fn: &'a SF,
    mode: CallMode,
    bounds: Bounds,
    anneal_rng: Arc<Mutex<Xoshiro256PlusPlus>>,
}

impl<'a, S, SF> SeekProblem<'a, S, SF>
where
    S: State,
    SF: StateFn<State = S>,
{
    /// Construct a new adapter over an engine, a state function, and the
    /// resolved call geometry.
    pub fn new(
        core: &'a MaatCore<S>, state_fn: &'a SF, mode: CallMode, bounds: Bounds,
        anneal_rng: Xoshiro256PlusPlus,
    ) -> Self {
        Self { core, state_fn, mode, bounds, anneal_rng: Arc::new(Mutex::new(anneal_rng)) }
    }

    /// Shape a bounded point into the candidate form the state function
    /// expects under the resolved calling convention.
    fn candidate(&self, x: Point) -> Candidate {
        match self.mode {
            CallMode::Scalar => Candidate::Scalar(x[0]),
            CallMode::Vector => Candidate::Vector(x),
        }
    }
}

impl<'a, S, SF> CostFunction for SeekProblem<'a, S, SF>
where
    S: State,
    SF: StateFn<State = S>,
{
    type Param = Point;
    type Output = Cost;

    /// Evaluate `integrate(state_fn(project(x)))` plus the exterior fence
    /// term at a solver trial point.
    ///
    /// # Errors
    /// - Propagates any `MaatError` from the state function or from field
    ///   and constraint closures via `?`.
    /// - Returns `MaatError::NonFiniteObjective` if the combined value is
    ///   NaN or infinite.
    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        let projected = self.bounds.clamp(param);
        let fence = FENCE_WEIGHT * self.bounds.excess(param);
        let state = self.state_fn.state(&self.candidate(projected))?;
        let value = self.core.integrate(&state)? + fence;
        if !value.is_finite() {
            return Err((MaatError::NonFiniteObjective { value }).into());
        }
        Ok(value)
    }
}

impl<'a, S, SF> Gradient for SeekProblem<'a, S, SF>
where
    S: State,
    SF: StateFn<State = S>,
{
    type Param = Point;
    type Gradient = Grad;

    /// Finite-difference gradient of the cost at a solver trial point.
    ///
    /// Behavior:
    /// - Try central differences first.
    /// - If any cost evaluation inside the FD closure failed (captured via
    ///   `closure_err`), retry with forward differences and surface the
    ///   captured error if it persists.
    /// - Validate the FD gradient; on failure (e.g., non-finite entries),
    ///   retry once with forward differences and validate again.
    ///
    /// The FD closure must return `f64`, so `?` is unavailable inside it;
    /// the first error is parked in `closure_err` and the closure returns
    /// NaN, which the validation pass then catches.
    ///
    /// # Errors
    /// - Propagates any error raised by cost evaluations performed during
    ///   finite differencing.
    /// - Returns validation errors if the gradient has the wrong dimension
    ///   or non-finite entries on both FD paths.
    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = param.len();
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_func = |p: &Point| -> f64 {
            match self.cost(p) {
                Ok(value) => value,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };
        let fd_grad = param.central_diff(&cost_func);
        if closure_err.borrow().is_some() {
            return run_fd_diff(param, &cost_func, &closure_err);
        }
        match validate_grad(&fd_grad, dim) {
            Ok(()) => Ok(fd_grad),
            Err(_) => run_fd_diff(param, &cost_func, &closure_err),
        }
    }
}

impl<'a, S, SF> Anneal for SeekProblem<'a, S, SF>
where
    S: State,
    SF: StateFn<State = S>,
{
    type Param = Point;
    type Output = Point;
    type Float = f64;

    /// Propose a neighbor of `param` for the annealing solver.
    ///
    /// Perturbs one randomly chosen coordinate per move by a uniform step
    /// of up to a tenth of that dimension's width, in a random direction,
    /// clamping to the box. The number of moves grows with the current
    /// temperature (`floor(extent) + 1`), so hot phases roam and cold
    /// phases refine.
    fn anneal(&self, param: &Self::Param, extent: Self::Float) -> Result<Self::Output, Error> {
        let mut next = param.clone();
        let mut rng = self.anneal_rng.lock().unwrap_or_else(|poison| poison.into_inner());
        let coordinates = Uniform::from(0..next.len());
        for _ in 0..(extent.floor() as u64 + 1) {
            let index = rng.sample(coordinates);
            let (lo, hi) = self.bounds.pair(index);
            let step = rng.sample(Uniform::new(0.0, 0.1 * (hi - lo)));
            if rng.sample(Uniform::new(0.0, 1.0)) > 0.5 {
                next[index] += step;
            } else {
                next[index] -= step;
            }
            next[index] = next[index].clamp(lo, hi);
        }
        Ok(next)
    }
}

/// Compute a forward-difference gradient of `func` at `param`, with error
/// capture.
///
/// Clears `closure_err`, performs `forward_diff`, surfaces any captured
/// evaluation error, and validates the resulting gradient.
///
/// # Errors
/// Returns any error captured during evaluation of `func` inside the FD
/// routine or raised by validation of the resulting gradient.
fn run_fd_diff<G: Fn(&Point) -> f64>(
    param: &Point, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = param.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, param.len())?;
    Ok(fd_grad)
}
