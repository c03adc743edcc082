//! Rod cutting optimizer.
//!
//! Computes the maximum profit obtainable by cutting a rod of integer length into pieces,
//! given a price for every piece length, together with one optimal sequence of cuts.
//! Two independent solvers are provided, a top-down [`MemoizedSolver`](solvers::MemoizedSolver)
//! and a bottom-up [`TabulatedSolver`](solvers::TabulatedSolver), which always agree on the optimal profit.

/// Entities to model the rod cutting problem
pub mod entities;

/// Error types raised while validating input
pub mod error;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Solvers for the rod cutting problem
pub mod solvers;

/// Greedy grouping of print jobs into batches under printer capacity constraints
pub mod batching;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::InvalidInput;

#[doc(inline)]
pub use solvers::solve_memoized;

#[doc(inline)]
pub use solvers::solve_tabulated;
