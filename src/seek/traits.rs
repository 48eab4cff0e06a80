//! Public API surface for the seek dispatcher.
//!
//! - [`StateFn`]: trait callers implement (usually via a closure) to map a
//!   candidate point to a problem state.
//! - [`Start`], [`CallMode`], [`Candidate`]: the scalar/vector dual calling
//!   convention, resolved once at call entry.
//! - [`SeekMode`], [`LineSearcher`], [`Tolerances`], [`SeekOptions`]:
//!   configuration for the dispatcher.
//! - [`SeekOutcome`]: normalized result returned by `seek`.
//!
//! Convention: the dispatcher *minimizes* `integrate(state_fn(x))` directly;
//! there is no cost/likelihood sign flip anywhere in this crate.

use argmin::core::{TerminationReason, TerminationStatus};
use std::str::FromStr;

use crate::{
    core::state::State,
    errors::{MaatError, MaatResult},
    seek::{
        types::{FnEvalMap, Point},
        validation::{validate_best_point, validate_objective, verify_tol_cost, verify_tol_grad},
    },
};

/// Caller-supplied mapping from a candidate point to a problem state.
///
/// Implemented automatically for `Fn(&Candidate) -> MaatResult<S>` closures,
/// which is the normal way to supply one:
///
/// ```
/// use maat_core::errors::MaatResult;
/// use maat_core::seek::Candidate;
///
/// let state_fn = |x: &Candidate| -> MaatResult<f64> { Ok(x.as_scalar()?) };
/// # let _ = state_fn;
/// ```
///
/// The state function is invoked fresh per objective evaluation and must be
/// pure and deterministic for reproducible seeks; the dispatcher performs
/// no purity validation.
pub trait StateFn {
    type State: State;

    fn state(&self, x: &Candidate) -> MaatResult<Self::State>;
}

impl<S, F> StateFn for F
where
    S: State,
    F: Fn(&Candidate) -> MaatResult<S>,
{
    type State = S;

    fn state(&self, x: &Candidate) -> MaatResult<S> {
        self(x)
    }
}

/// Starting point for a seek.
///
/// A bare scalar or a one-element vector selects scalar mode; a longer
/// vector selects vector mode. The choice is resolved once at call entry
/// and fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub enum Start {
    Scalar(f64),
    Vector(Point),
}

impl Start {
    /// Resolve the calling convention and normalize to a solver vector.
    ///
    /// # Errors
    /// - [`MaatError::EmptyStart`] for a zero-length vector.
    /// - [`MaatError::NonFiniteStart`] for any NaN or infinite coordinate.
    pub(crate) fn resolve(self) -> MaatResult<(CallMode, Point)> {
        let point = match self {
            Start::Scalar(value) => Point::from(vec![value]),
            Start::Vector(values) => values,
        };
        if point.is_empty() {
            return Err(MaatError::EmptyStart);
        }
        for (index, &value) in point.iter().enumerate() {
            if !value.is_finite() {
                return Err(MaatError::NonFiniteStart { index, value });
            }
        }
        let mode = if point.len() == 1 { CallMode::Scalar } else { CallMode::Vector };
        Ok((mode, point))
    }
}

impl From<f64> for Start {
    fn from(value: f64) -> Self {
        Start::Scalar(value)
    }
}

impl From<Vec<f64>> for Start {
    fn from(values: Vec<f64>) -> Self {
        Start::Vector(Point::from(values))
    }
}

impl From<&[f64]> for Start {
    fn from(values: &[f64]) -> Self {
        Start::Vector(Point::from(values.to_vec()))
    }
}

impl From<Point> for Start {
    fn from(values: Point) -> Self {
        Start::Vector(values)
    }
}

/// Calling convention of a seek, resolved once from the shape of `x0`.
///
/// In scalar mode the state function receives [`Candidate::Scalar`]; in
/// vector mode it receives [`Candidate::Vector`] with the full point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Scalar,
    Vector,
}

/// Candidate point handed to the state function, shaped per [`CallMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Scalar(f64),
    Vector(Point),
}

impl Candidate {
    /// Unwrap a scalar-mode candidate.
    ///
    /// # Errors
    /// [`MaatError::CandidateMismatch`] when the seek runs in vector mode.
    pub fn as_scalar(&self) -> MaatResult<f64> {
        match self {
            Candidate::Scalar(value) => Ok(*value),
            Candidate::Vector(_) => Err(MaatError::CandidateMismatch { expected: "a scalar" }),
        }
    }

    /// Unwrap a vector-mode candidate.
    ///
    /// # Errors
    /// [`MaatError::CandidateMismatch`] when the seek runs in scalar mode.
    pub fn as_vector(&self) -> MaatResult<&Point> {
        match self {
            Candidate::Vector(values) => Ok(values),
            Candidate::Scalar(_) => Err(MaatError::CandidateMismatch { expected: "a vector" }),
        }
    }
}

/// Which delegated solver a seek dispatches to.
///
/// Variants:
/// - `Local`: L-BFGS with a configurable line search. The solver itself
///   runs unconstrained; bounds are enforced by evaluating trial points at
///   their projection into the box plus a quadratic exterior fence, so
///   overshooting line searches are steered back instead of stalling.
/// - `Global`: seedable simulated annealing with bound-clamped neighbor
///   moves; initial temperature scales with the exploration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekMode {
    Local,
    Global,
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Parsing: implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// [`MaatError::InvalidLineSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = MaatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(MaatError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Numerical tolerances and the iteration cap shared by both modes.
///
/// - `tol_grad`: local mode terminates when the gradient norm falls below
///   this threshold.
/// - `tol_cost`: local mode terminates when the change in objective falls
///   below this threshold.
/// - `max_iter`: hard cap on solver iterations in either mode.
///
/// Any field can be `None` but **at least one** of the three must be
/// provided (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be finite and strictly positive.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`MaatError::NoTolerancesProvided`] if all three are `None`.
    /// - [`MaatError::InvalidTolGrad`] / [`MaatError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`MaatError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> MaatResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(MaatError::NoTolerancesProvided);
        }
        verify_tol_grad(tol_grad)?;
        verify_tol_cost(tol_cost)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(MaatError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Dispatcher-level configuration for a seek.
///
/// Fields:
/// - `mode: SeekMode` — local (L-BFGS) or global (annealing) search.
/// - `tols: Tolerances` — tolerances and the iteration cap.
/// - `line_searcher: LineSearcher` — line search used in local mode.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size; `None` uses the
///   default of 7.
/// - `seed: Option<u64>` — deterministic seed for global mode; `None`
///   seeds from entropy.
/// - `exploration: f64` — global-mode temperature scale `S`; the initial
///   temperature is `10.0 * (1.0 + S)`.
/// - `verbose: bool` — attaches a terminal observer behind the `obs_slog`
///   feature and prints a pre-iteration line.
///
/// Default: local mode, `tol_grad = 1e-6`, `max_iter = 1000`, More–Thuente
/// line search, no seed, `exploration = 0.0`, quiet.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekOptions {
    pub mode: SeekMode,
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub lbfgs_mem: Option<usize>,
    pub seed: Option<u64>,
    pub exploration: f64,
    pub verbose: bool,
}

impl SeekOptions {
    /// Create validated options; seed, exploration, and verbosity start at
    /// their defaults and are adjusted through the `with_*` helpers.
    ///
    /// # Errors
    /// [`MaatError::InvalidLbfgsMem`] if an explicit memory size is zero.
    pub fn new(
        mode: SeekMode, tols: Tolerances, line_searcher: LineSearcher, lbfgs_mem: Option<usize>,
    ) -> MaatResult<Self> {
        if let Some(mem) = lbfgs_mem {
            if mem == 0 {
                return Err(MaatError::InvalidLbfgsMem {
                    mem,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self {
            mode,
            tols,
            line_searcher,
            lbfgs_mem,
            seed: None,
            exploration: 0.0,
            verbose: false,
        })
    }

    /// Fix the global-mode RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the global-mode exploration temperature scale `S`.
    ///
    /// # Errors
    /// [`MaatError::InvalidExploration`] for non-finite or negative values.
    pub fn with_exploration(mut self, exploration: f64) -> MaatResult<Self> {
        if !exploration.is_finite() {
            return Err(MaatError::InvalidExploration {
                value: exploration,
                reason: "Exploration temperature must be finite.",
            });
        }
        if exploration < 0.0 {
            return Err(MaatError::InvalidExploration {
                value: exploration,
                reason: "Exploration temperature must be non-negative.",
            });
        }
        self.exploration = exploration;
        Ok(self)
    }

    /// Toggle the pre-iteration log line and the `obs_slog` observer.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for SeekOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-6), None, Some(1000)).unwrap(),
            mode: SeekMode::Local,
            line_searcher: LineSearcher::MoreThuente,
            lbfgs_mem: None,
            seed: None,
            exploration: 0.0,
            verbose: false,
        }
    }
}

/// Canonical result returned by `seek`.
///
/// - `best_point`: best candidate found, shaped per the resolved
///   [`CallMode`] (scalar ergonomics for single-unknown problems).
/// - `objective`: integrated objective at the best point.
/// - `converged`: `true` only when the solver reported genuine convergence
///   (a tolerance or target-cost stop). Iteration caps, interrupts, and
///   solver exits such as failed line searches leave it `false`; the
///   `status` string carries the details.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of solver iterations performed.
/// - `fn_evals`: function-evaluation counters reported by Argmin, passed
///   through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekOutcome {
    pub best_point: Candidate,
    pub objective: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl SeekOutcome {
    /// Build a validated [`SeekOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - best-point check (present and all finite),
    /// - objective check (finite),
    /// - mapping of `TerminationStatus` into `(converged, status)`,
    /// - shaping of the best point per the resolved calling convention.
    ///
    /// # Errors
    /// Propagates validation errors for the best point or objective.
    pub(crate) fn new(
        best_point_opt: Option<Point>, objective: f64, termination: TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap, mode: CallMode,
    ) -> MaatResult<Self> {
        let best = validate_best_point(best_point_opt)?;
        validate_objective(objective)?;
        let best_point = match mode {
            CallMode::Scalar => Candidate::Scalar(best[0]),
            CallMode::Vector => Candidate::Vector(best),
        };
        let status = match &termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => format!("{reason:?}"),
        };
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        Ok(Self {
            best_point,
            objective,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmin::core::TerminationReason;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Start resolution into (CallMode, Point), including the one-element
    //   vector rule and the empty/non-finite rejections.
    // - Candidate unwrap helpers.
    // - LineSearcher parsing.
    // - Tolerances and SeekOptions validation rules.
    // - SeekOutcome construction from raw solver state.
    // -------------------------------------------------------------------------

    #[test]
    fn bare_scalar_resolves_to_scalar_mode() {
        let (mode, point) = Start::from(0.25).resolve().expect("resolve should succeed");
        assert_eq!(mode, CallMode::Scalar);
        assert_eq!(point, array![0.25]);
    }

    #[test]
    fn one_element_vector_resolves_to_scalar_mode() {
        let (mode, _) = Start::from(vec![0.25]).resolve().expect("resolve should succeed");
        assert_eq!(mode, CallMode::Scalar);
    }

    #[test]
    fn longer_vector_resolves_to_vector_mode() {
        let (mode, point) =
            Start::from(vec![0.1, 0.2, 0.3]).resolve().expect("resolve should succeed");
        assert_eq!(mode, CallMode::Vector);
        assert_eq!(point.len(), 3);
    }

    #[test]
    fn empty_vector_is_rejected() {
        let err = Start::from(Vec::<f64>::new()).resolve().expect_err("resolve should fail");
        assert_eq!(err, MaatError::EmptyStart);
    }

    #[test]
    fn non_finite_coordinate_is_rejected_with_index() {
        let err = Start::from(vec![0.0, f64::NAN]).resolve().expect_err("resolve should fail");
        assert!(matches!(err, MaatError::NonFiniteStart { index: 1, .. }));
    }

    #[test]
    fn candidate_unwrap_helpers_enforce_the_convention() {
        let scalar = Candidate::Scalar(0.5);
        assert_eq!(scalar.as_scalar().expect("scalar unwrap should succeed"), 0.5);
        assert!(scalar.as_vector().is_err());

        let vector = Candidate::Vector(array![1.0, 2.0]);
        assert!(vector.as_scalar().is_err());
        assert_eq!(vector.as_vector().expect("vector unwrap should succeed").len(), 2);
    }

    #[test]
    fn line_searcher_parses_case_insensitively() {
        assert_eq!("morethuente".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert_eq!("HAGERZHANG".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);
        assert!(matches!(
            "newton".parse::<LineSearcher>(),
            Err(MaatError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    fn tolerances_require_at_least_one_stopping_rule() {
        assert_eq!(
            Tolerances::new(None, None, None).expect_err("should fail"),
            MaatError::NoTolerancesProvided
        );
        assert!(Tolerances::new(None, None, Some(10)).is_ok());
    }

    #[test]
    fn tolerances_reject_non_positive_values() {
        assert!(matches!(
            Tolerances::new(Some(0.0), None, None),
            Err(MaatError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), None),
            Err(MaatError::InvalidTolCost { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, None, Some(0)),
            Err(MaatError::InvalidMaxIter { .. })
        ));
    }

    #[test]
    fn options_reject_zero_lbfgs_memory() {
        let tols = Tolerances::new(Some(1e-6), None, Some(100)).expect("tolerances valid");
        let err = SeekOptions::new(SeekMode::Local, tols, LineSearcher::MoreThuente, Some(0))
            .expect_err("zero memory should fail");
        assert!(matches!(err, MaatError::InvalidLbfgsMem { .. }));
    }

    #[test]
    fn options_reject_negative_or_non_finite_exploration() {
        let opts = SeekOptions::default();
        assert!(matches!(
            opts.clone().with_exploration(-1.0),
            Err(MaatError::InvalidExploration { .. })
        ));
        assert!(matches!(
            opts.with_exploration(f64::INFINITY),
            Err(MaatError::InvalidExploration { .. })
        ));
    }

    #[test]
    fn outcome_shapes_best_point_per_call_mode() {
        let outcome = SeekOutcome::new(
            Some(array![0.5]),
            1.25,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            42,
            FnEvalMap::new(),
            CallMode::Scalar,
        )
        .expect("outcome should build");
        assert_eq!(outcome.best_point, Candidate::Scalar(0.5));
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 42);
    }

    #[test]
    fn only_genuine_convergence_sets_the_converged_flag() {
        let build = |termination| {
            SeekOutcome::new(
                Some(array![0.5]),
                1.25,
                termination,
                1,
                FnEvalMap::new(),
                CallMode::Scalar,
            )
            .expect("outcome should build")
        };

        let converged =
            build(TerminationStatus::Terminated(TerminationReason::TargetCostReached));
        assert!(converged.converged);

        // A failed line search terminates the run but is not convergence;
        // the status string keeps the detail for the caller.
        let exited = build(TerminationStatus::Terminated(TerminationReason::SolverExit(
            "line search stalled".to_string(),
        )));
        assert!(!exited.converged);
        assert!(exited.status.contains("line search stalled"));

        let capped = build(TerminationStatus::Terminated(TerminationReason::MaxItersReached));
        assert!(!capped.converged);
        assert!(capped.status.contains("MaxItersReached"));
    }

    #[test]
    fn outcome_rejects_missing_or_non_finite_best_point() {
        let missing = SeekOutcome::new(
            None,
            0.0,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            CallMode::Scalar,
        );
        assert_eq!(missing.expect_err("should fail"), MaatError::MissingBestPoint);

        let bad = SeekOutcome::new(
            Some(array![f64::NAN]),
            0.0,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            CallMode::Scalar,
        );
        assert!(matches!(bad.expect_err("should fail"), MaatError::InvalidBestPoint { .. }));
    }
}
