//! seek::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the two delegated solvers. These
//! helpers hide Argmin's generic wiring and apply dispatcher-level options
//! (tolerances, L-BFGS memory, seeds, temperature) so higher-level code can
//! request a configured solver without touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente line
//!   search, applying optional gradient and cost-change tolerances through
//!   a shared configuration helper.
//! - Construct the simulated-annealing solver with the temperature rule
//!   `10.0 * (1.0 + exploration)` and a deterministic
//!   solver RNG when a seed is supplied.
//! - Derive the neighbor-move RNG from the same seed through a fixed salt,
//!   so one caller seed pins the entire global run.
//! - Leave the initial parameter vector and the iteration cap to the
//!   runner layer, keeping these builders side-effect free.

use argmin::solver::quasinewton::LBFGS;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    errors::MaatResult,
    seek::{
        traits::SeekOptions,
        types::{
            Annealer, BASE_INITIAL_TEMP, Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS,
            LbfgsHagerZhang, LbfgsMoreThuente, MoreThuenteLS, Point,
        },
    },
};

/// Salt applied to the caller seed before seeding the neighbor-move RNG,
/// so the solver's acceptance RNG and the proposal RNG draw from distinct
/// streams of the same seed.
const NEIGHBOR_SEED_SALT: u64 = 0x517c_c1b7_2722_0a95;

/// Construct L-BFGS with the Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires optional tolerances from `opts.tols`. The initial point and
/// iteration cap are applied later by the runner.
///
/// # Errors
/// Propagates Argmin configuration errors from the tolerance setters.
pub fn build_local_hager_zhang(opts: &SeekOptions) -> MaatResult<LbfgsHagerZhang> {
    let line_search = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(line_search, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with the More–Thuente line search.
///
/// Same option handling as [`build_local_hager_zhang`].
///
/// # Errors
/// Propagates Argmin configuration errors from the tolerance setters.
pub fn build_local_more_thuente(opts: &SeekOptions) -> MaatResult<LbfgsMoreThuente> {
    let line_search = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(line_search, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver, regardless of line
/// search. When a tolerance is `None` the corresponding setter is not
/// called and Argmin's default remains in effect.
///
/// # Errors
/// Propagates Argmin configuration errors from the tolerance setters.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Point, Grad, Cost>, opts: &SeekOptions,
) -> MaatResult<LBFGS<L, Point, Grad, Cost>> {
    if let Some(tol_grad) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(tol_grad)?;
    }
    if let Some(tol_cost) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(tol_cost)?;
    }
    Ok(solver)
}

/// Construct the seedable simulated-annealing solver for global seeks.
///
/// The initial temperature is `10.0 * (1.0 + opts.exploration)`;
/// `opts.seed` pins the solver's acceptance RNG, otherwise it is seeded
/// from entropy.
///
/// # Errors
/// Propagates Argmin configuration errors (e.g., a non-positive
/// temperature, which validated options cannot produce).
pub fn build_global_annealer(opts: &SeekOptions) -> MaatResult<Annealer> {
    let initial_temp = BASE_INITIAL_TEMP * (1.0 + opts.exploration);
    let rng = match opts.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    Ok(Annealer::new_with_rng(initial_temp, rng)?)
}

/// RNG for the adapter's neighbor moves, derived from the caller seed
/// through [`NEIGHBOR_SEED_SALT`] so global runs are fully reproducible
/// from a single seed.
pub fn neighbor_rng(opts: &SeekOptions) -> Xoshiro256PlusPlus {
    match opts.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed ^ NEIGHBOR_SEED_SALT),
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seek::traits::{LineSearcher, SeekMode, Tolerances};
    use rand::RngCore;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic construction of both L-BFGS variants with and without an
    //   explicit memory size.
    // - Tolerance application via configure_lbfgs.
    // - Seed handling for the annealer and the neighbor RNG.
    //
    // They intentionally DO NOT cover:
    // - End-to-end executor behavior, which is tested in the runner layer
    //   and the integration suite.
    // -------------------------------------------------------------------------

    fn local_opts(mem: Option<usize>) -> SeekOptions {
        let tols = Tolerances::new(Some(1e-6), Some(1e-9), Some(200)).expect("tolerances valid");
        SeekOptions::new(SeekMode::Local, tols, LineSearcher::MoreThuente, mem)
            .expect("options valid")
    }

    #[test]
    fn lbfgs_builders_succeed_with_default_memory() {
        assert!(build_local_hager_zhang(&local_opts(None)).is_ok());
        assert!(build_local_more_thuente(&local_opts(None)).is_ok());
    }

    #[test]
    fn lbfgs_builders_accept_explicit_memory() {
        assert!(build_local_hager_zhang(&local_opts(Some(11))).is_ok());
        assert!(build_local_more_thuente(&local_opts(Some(3))).is_ok());
    }

    #[test]
    fn configure_lbfgs_tolerates_absent_tolerances() {
        let tols = Tolerances::new(None, None, Some(50)).expect("tolerances valid");
        let opts = SeekOptions::new(SeekMode::Local, tols, LineSearcher::HagerZhang, None)
            .expect("options valid");
        let raw = LbfgsHagerZhang::new(HagerZhangLS::new(), DEFAULT_LBFGS_MEM);
        assert!(configure_lbfgs(raw, &opts).is_ok());
    }

    #[test]
    fn annealer_builds_with_seed_and_exploration() {
        let tols = Tolerances::new(None, None, Some(500)).expect("tolerances valid");
        let opts = SeekOptions::new(SeekMode::Global, tols, LineSearcher::MoreThuente, None)
            .expect("options valid")
            .with_seed(42)
            .with_exploration(1.5)
            .expect("exploration valid");
        assert!(build_global_annealer(&opts).is_ok());
    }

    #[test]
    fn neighbor_rng_is_deterministic_per_seed_and_distinct_from_solver_stream() {
        let tols = Tolerances::new(None, None, Some(10)).expect("tolerances valid");
        let opts = SeekOptions::new(SeekMode::Global, tols, LineSearcher::MoreThuente, None)
            .expect("options valid")
            .with_seed(42);
        let mut a = neighbor_rng(&opts);
        let mut b = neighbor_rng(&opts);
        assert_eq!(a.next_u64(), b.next_u64());

        let mut raw = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut salted = neighbor_rng(&opts);
        assert_ne!(raw.next_u64(), salted.next_u64());
    }
}
