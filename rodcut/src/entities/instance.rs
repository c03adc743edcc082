use crate::util::assertions;

/// Instance of the rod cutting problem: a rod of `length` units and the price of a single piece of every length.
///
/// Only obtainable through [`import`](crate::io::import) or [`validate`](crate::io::validate),
/// so every instance a solver receives is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodInstance {
    length: usize,
    /// `prices[i]` is the price of a piece of length `i + 1`
    prices: Vec<u64>,
}

impl RodInstance {
    pub(crate) fn new(length: usize, prices: Vec<u64>) -> Self {
        assert!(
            assertions::instance_is_valid(length, &prices),
            "a rod instance requires a positive length and one positive price per unit of length"
        );
        Self { length, prices }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn prices(&self) -> &[u64] {
        &self.prices
    }

    /// Price of a single piece of `piece_length` units.
    pub fn price(&self, piece_length: usize) -> u64 {
        debug_assert!((1..=self.length).contains(&piece_length));
        self.prices[piece_length - 1]
    }

    /// Total revenue of selling the pieces in `cuts`.
    pub fn profit_of(&self, cuts: &[usize]) -> u64 {
        cuts.iter().map(|&c| self.price(c)).sum()
    }
}
