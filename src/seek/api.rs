//! High-level entry point: `MaatCore::seek`.
//!
//! This resolves the scalar/vector calling convention from the shape of
//! `x0`, validates and broadcasts the bounds, wraps the engine and the
//! caller's state function in a [`SeekProblem`], and dispatches to the
//! solver selected by `opts.mode`:
//!
//! - **Local**: L-BFGS (Hager–Zhang or More–Thuente line search) over the
//!   projected cost. Trial points outside the box are evaluated at their
//!   projection plus a quadratic fence term, so the line search sees a
//!   bounded landscape with an informative gradient everywhere.
//! - **Global**: seeded simulated annealing with bound-clamped neighbor
//!   moves.
//!
//! Both modes start from `x0` clamped into the box, and the best point is
//! clamped into the box before it is returned. All configuration errors
//! fire here, before any solver is constructed and before the state
//! function is ever invoked.

use crate::{
    core::{engine::MaatCore, state::State},
    errors::MaatResult,
    seek::{
        adapter::SeekProblem,
        bounds::Bounds,
        builders::{
            build_global_annealer, build_local_hager_zhang, build_local_more_thuente,
            neighbor_rng,
        },
        run::{run_global, run_local},
        traits::{LineSearcher, SeekMode, SeekOptions, SeekOutcome, Start, StateFn},
    },
};

impl<S: State> MaatCore<S> {
    /// Search for a low-objective point of `integrate ∘ state_fn` inside
    /// box bounds.
    ///
    /// # Behavior
    /// - Resolves the calling convention once from `x0`: a bare scalar or
    ///   one-element vector runs in scalar mode (the state function
    ///   receives `Candidate::Scalar`); longer vectors run in vector mode.
    /// - Validates bounds: one `(lo, hi)` pair per dimension, or a single
    ///   pair broadcast across all dimensions.
    /// - Dispatches to the solver selected by `opts.mode` and shapes the
    ///   result into a [`SeekOutcome`] whose best point follows the
    ///   resolved calling convention and lies inside the box.
    ///
    /// `seek` is stateless across calls: only the engine's two coefficients
    /// carry over, and a reflection loop mutating them between calls is
    /// observed by the very next run.
    ///
    /// # Errors
    /// - Configuration errors (`EmptyStart`, `NonFiniteStart`,
    ///   `EmptyBounds`, `InvalidBound`, `BoundsLengthMismatch`) before any
    ///   solver work.
    /// - Caller errors from the state function or field/constraint
    ///   closures, propagated unmodified.
    /// - `NonFiniteObjective` if the integrated objective goes NaN or
    ///   infinite during the run.
    /// - Argmin runtime errors through the crate's wrapper variants.
    ///
    /// # Example
    /// ```no_run
    /// use maat_core::core::{Field, MaatCore};
    /// use maat_core::errors::MaatResult;
    /// use maat_core::seek::{Candidate, SeekOptions};
    ///
    /// let core = MaatCore::new(vec![Field::new("Quadratic", 1.0, |x: &f64| {
    ///     (x - 0.5) * (x - 0.5)
    /// })]);
    /// let state_fn = |x: &Candidate| -> MaatResult<f64> { x.as_scalar() };
    ///
    /// let outcome = core.seek(&state_fn, 0.2, &[(0.0, 1.0)], &SeekOptions::default())?;
    /// println!("best = {:?} at {:.6}", outcome.best_point, outcome.objective);
    /// # Ok::<(), maat_core::errors::MaatError>(())
    /// ```
    pub fn seek<SF>(
        &self, state_fn: &SF, x0: impl Into<Start>, bounds: &[(f64, f64)], opts: &SeekOptions,
    ) -> MaatResult<SeekOutcome>
    where
        SF: StateFn<State = S>,
    {
        let (mode, x0) = x0.into().resolve()?;
        let bounds = Bounds::resolve(bounds, x0.len())?;
        let x0 = bounds.clamp(&x0);
        let problem =
            SeekProblem::new(self, state_fn, mode, bounds.clone(), neighbor_rng(opts));

        let run = match opts.mode {
            SeekMode::Local => match opts.line_searcher {
                LineSearcher::MoreThuente => {
                    let solver = build_local_more_thuente(opts)?;
                    run_local(x0, opts, problem, solver)?
                }
                LineSearcher::HagerZhang => {
                    let solver = build_local_hager_zhang(opts)?;
                    run_local(x0, opts, problem, solver)?
                }
            },
            SeekMode::Global => {
                let solver = build_global_annealer(opts)?;
                run_global(x0, opts, problem, solver)?
            }
        };

        // a line search may leave the best point a fence-width outside
        let best_param = run.best_param.map(|p| bounds.clamp(&p));
        SeekOutcome::new(
            best_param,
            run.best_cost,
            run.termination,
            run.iterations,
            run.fn_evals,
            mode,
        )
    }
}
