mod memoized;
mod tabulated;

use crate::entities::{RodInstance, RodSolution};
use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[doc(inline)]
pub use memoized::MemoizedSolver;

#[doc(inline)]
pub use tabulated::TabulatedSolver;

/// Common interface of the rod cutting solvers.
/// A solver is bound to a single instance, any internal caches or tables are dropped with it.
pub trait RodCutSolver {
    fn kind(&self) -> SolverKind;

    /// Computes the maximum profit and one cut sequence achieving it.
    fn solve(&mut self) -> RodSolution;
}

/// The available solving strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Top-down recursion with a cache keyed by remaining rod length
    Memoized,
    /// Bottom-up profit table with first-cut reconstruction
    Tabulated,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Memoized, SolverKind::Tabulated];
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::Memoized => write!(f, "memoized"),
            SolverKind::Tabulated => write!(f, "tabulated"),
        }
    }
}

/// Solves `instance` with a freshly created solver of the given kind.
pub fn solve(instance: &RodInstance, kind: SolverKind) -> RodSolution {
    match kind {
        SolverKind::Memoized => MemoizedSolver::new(instance).solve(),
        SolverKind::Tabulated => TabulatedSolver::new(instance).solve(),
    }
}

/// Validates the input and solves it top-down with memoization.
pub fn solve_memoized(length: i64, prices: &[i64]) -> Result<RodSolution, InvalidInput> {
    let instance = crate::io::validate(length, prices)?;
    Ok(MemoizedSolver::new(&instance).solve())
}

/// Validates the input and solves it bottom-up with tabulation.
pub fn solve_tabulated(length: i64, prices: &[i64]) -> Result<RodSolution, InvalidInput> {
    let instance = crate::io::validate(length, prices)?;
    Ok(TabulatedSolver::new(&instance).solve())
}
