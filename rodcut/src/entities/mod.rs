mod instance;
mod solution;

#[doc(inline)]
pub use instance::RodInstance;

#[doc(inline)]
pub use solution::RodSolution;
