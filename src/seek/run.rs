//! Execution helpers that run an `argmin` solver on a seek problem and
//! hand back the raw pieces of the solver state.
//!
//! Both runners wire up the adapted problem, the configured solver, the
//! initial parameter vector, the iteration cap, and (behind the `obs_slog`
//! feature) an optional terminal observer, then execute and strip the
//! result down to a [`SolverRun`]. Clamping the best parameter into the
//! box and shaping the final outcome are the dispatch layer's job.

#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, IterState, Solver, State as ArgminState, TerminationStatus};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

use crate::{
    core::state::State,
    errors::MaatResult,
    seek::{
        adapter::SeekProblem,
        traits::{SeekOptions, StateFn},
        types::{Annealer, FnEvalMap, Grad, Point},
    },
};

/// Raw solver state captured after a run, before outcome shaping.
#[derive(Debug, Clone)]
pub(crate) struct SolverRun {
    pub best_param: Option<Point>,
    pub best_cost: f64,
    pub termination: TerminationStatus,
    pub iterations: u64,
    pub fn_evals: FnEvalMap,
}

/// Run a local (L-BFGS) seek.
///
/// This is the shared runner for both line-search variants. `x0` is the
/// start point, already clamped into the box; `opts.tols.max_iter` caps
/// the iterations when present. With the `obs_slog` feature and
/// `opts.verbose`, a terminal observer is attached and a one-time
/// pre-iteration line logs the starting objective and gradient norm.
///
/// # Errors
/// Propagates any `argmin` runtime error (solver errors, observer
/// failures) through the crate's `From` conversion, plus any caller error
/// raised inside cost or gradient evaluations.
pub(crate) fn run_local<'a, S, SF, SV>(
    x0: Point, opts: &SeekOptions, problem: SeekProblem<'a, S, SF>, solver: SV,
) -> MaatResult<SolverRun>
where
    S: State,
    SF: StateFn<State = S>,
    SV: Solver<SeekProblem<'a, S, SF>, IterState<Point, Grad, (), (), (), f64>> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_local_start(&x0, &problem);
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(x0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    Ok(SolverRun {
        iterations: result.get_iter(),
        fn_evals: result.get_func_counts().clone(),
        termination: result.get_termination_status().clone(),
        best_cost: result.get_best_cost(),
        best_param: result.take_best_param(),
    })
}

/// Run a global (simulated-annealing) seek.
///
/// `x0` is the start point in the caller's bounded space; the annealer's
/// neighbor moves keep every candidate inside the box. The iteration cap
/// and optional observer are applied the same way as in [`run_local`].
///
/// # Errors
/// Propagates any `argmin` runtime error through the crate's `From`
/// conversion, plus any caller error raised inside cost evaluations.
pub(crate) fn run_global<'a, S, SF>(
    x0: Point, opts: &SeekOptions, problem: SeekProblem<'a, S, SF>, solver: Annealer,
) -> MaatResult<SolverRun>
where
    S: State,
    SF: StateFn<State = S>,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_global_start(&x0, &problem);
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(x0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    Ok(SolverRun {
        iterations: result.get_iter(),
        fn_evals: result.get_func_counts().clone(),
        termination: result.get_termination_status().clone(),
        best_cost: result.get_best_cost(),
        best_param: result.take_best_param(),
    })
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_local_start<S, SF>(x0: &Point, problem: &SeekProblem<'_, S, SF>)
where
    S: State,
    SF: StateFn<State = S>,
{
    use argmin::core::Gradient;

    let objective = problem.cost(x0).ok();
    let grad_norm = problem.gradient(x0).ok().map(|g| g.l2_norm());
    eprintln!(
        "seek(local): objective(x0) = {}{}",
        objective.map(|v| format!("{v:.6}")).unwrap_or_else(|| "unavailable".to_string()),
        grad_norm.map(|n| format!(", ||grad|| = {n:.6}")).unwrap_or_default()
    );
}

#[cfg(feature = "obs_slog")]
fn log_global_start<S, SF>(x0: &Point, problem: &SeekProblem<'_, S, SF>)
where
    S: State,
    SF: StateFn<State = S>,
{
    let objective = problem.cost(x0).ok();
    eprintln!(
        "seek(global): objective(x0) = {}",
        objective.map(|v| format!("{v:.6}")).unwrap_or_else(|| "unavailable".to_string()),
    );
}
