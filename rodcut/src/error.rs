use thiserror::Error;

/// Reasons a rod cutting instance is rejected before any computation takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("rod length must be greater than 0, got {0}")]
    NonPositiveLength(i64),

    #[error("price table must not be empty")]
    EmptyPrices,

    #[error("price table has {n_prices} entries, expected exactly one per unit of rod length ({length})")]
    LengthMismatch { length: i64, n_prices: usize },

    #[error("price of a piece of length {piece_length} must be greater than 0, got {price}")]
    NonPositivePrice { piece_length: usize, price: i64 },

    /// Filling the whole rod at the price per unit of the densest piece does not fit in a `u64`.
    /// This bounds every profit the solvers compute, but can exceed the actual optimum
    /// when the densest piece length does not divide the rod length.
    #[error(
        "profit of a rod of length {length} may overflow: pieces of length {piece_length} sell for {price}"
    )]
    ProfitOverflow {
        length: usize,
        piece_length: usize,
        price: u64,
    },
}
