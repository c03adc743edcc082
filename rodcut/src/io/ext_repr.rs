use crate::solvers::SolverKind;
use serde::{Deserialize, Serialize};

/// External representation of a [`RodInstance`](crate::entities::RodInstance).
/// Values are signed so that invalid instances can be represented and rejected on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtRodInstance {
    /// Length of the rod in abstract units
    pub length: i64,
    /// `prices[i]` is the market price of a single piece of length `i + 1`
    pub prices: Vec<i64>,
}

/// External representation of a [`RodSolution`](crate::entities::RodSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtRodSolution {
    /// The solver which produced the solution
    pub solver: SolverKind,
    /// Optimal total revenue
    pub max_profit: u64,
    /// Lengths of the resulting pieces
    pub cuts: Vec<usize>,
    /// Number of cut operations needed to produce the pieces
    pub number_of_cuts: usize,
    /// Milliseconds elapsed between the epoch and the creation of the solution
    pub run_time_ms: u64,
}
