use crate::solvers::SolverKind;
use std::time::Instant;

/// An optimal way to cut a [`RodInstance`](crate::entities::RodInstance), as produced by one of the solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodSolution {
    /// The solver which produced this solution
    pub solver: SolverKind,
    /// Optimal total revenue
    pub max_profit: u64,
    /// Lengths of the resulting pieces, in the order the solver reconstructed them.
    /// An uncut rod is a single piece of its full length.
    pub cuts: Vec<usize>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl RodSolution {
    /// Number of cut operations needed to produce the pieces. A single piece needs none.
    pub fn number_of_cuts(&self) -> usize {
        self.cuts.len().saturating_sub(1)
    }

    pub fn number_of_pieces(&self) -> usize {
        self.cuts.len()
    }
}
