use crate::entities::{RodInstance, RodSolution};
use crate::solvers::{RodCutSolver, SolverKind};
use crate::util::assertions;
use log::{debug, trace};
use std::time::Instant;

/// Bottom-up solver: fills a profit table for every rod length from 1 up to the full length,
/// recording the first cut that reaches each optimum, then walks the first cuts back from the full length.
///
/// Among first cuts with equal profit, the smallest one is kept.
pub struct TabulatedSolver<'a> {
    instance: &'a RodInstance,
}

impl<'a> TabulatedSolver<'a> {
    pub fn new(instance: &'a RodInstance) -> Self {
        Self { instance }
    }

    /// Returns `(profit, first_cut)`, both indexed by rod length.
    /// `profit[n]` is the optimal profit of a rod of length `n`,
    /// `first_cut[n]` the smallest piece length which achieves it (0 for the empty rod).
    pub fn tabulate(&self) -> (Vec<u64>, Vec<usize>) {
        let length = self.instance.length();
        let mut profit = vec![0; length + 1];
        let mut first_cut = vec![0; length + 1];

        for i in 1..=length {
            let mut best_cut = 1;
            let mut best_profit = self.instance.price(1) + profit[i - 1];
            for cut in 2..=i {
                let candidate = self.instance.price(cut) + profit[i - cut];
                if candidate > best_profit {
                    best_cut = cut;
                    best_profit = candidate;
                }
            }
            profit[i] = best_profit;
            first_cut[i] = best_cut;
            trace!("[TAB] profit[{i}] = {best_profit}, first cut {best_cut}");
        }

        (profit, first_cut)
    }
}

/// Walks the first-cut table back from `length` to 0 and returns the pieces in reverse discovery order.
pub fn reconstruct_cuts(first_cut: &[usize], length: usize) -> Vec<usize> {
    let mut cuts = vec![];
    let mut remaining = length;
    while remaining > 0 {
        let cut = first_cut[remaining];
        assert!(
            (1..=remaining).contains(&cut),
            "invalid first cut {cut} for a rod of length {remaining}"
        );
        cuts.push(cut);
        remaining -= cut;
    }
    cuts.reverse();
    cuts
}

impl RodCutSolver for TabulatedSolver<'_> {
    fn kind(&self) -> SolverKind {
        SolverKind::Tabulated
    }

    fn solve(&mut self) -> RodSolution {
        let start = Instant::now();
        let length = self.instance.length();
        let (profit, first_cut) = self.tabulate();
        let cuts = reconstruct_cuts(&first_cut, length);

        let solution = RodSolution {
            solver: self.kind(),
            max_profit: profit[length],
            cuts,
            time_stamp: Instant::now(),
        };
        debug_assert!(assertions::solution_is_consistent(self.instance, &solution));

        debug!(
            "[TAB] rod of length {} solved in {:.3}ms: profit {}, {} pieces",
            length,
            start.elapsed().as_secs_f64() * 1000.0,
            solution.max_profit,
            solution.number_of_pieces()
        );

        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::validate;
    use test_case::test_case;

    #[test_case(5, &[2, 5, 7, 8, 10], 12, &[2, 2, 1]; "base case")]
    #[test_case(3, &[1, 3, 8], 8, &[3]; "optimal to not cut")]
    #[test_case(4, &[3, 5, 6, 7], 12, &[1, 1, 1, 1]; "unit pieces")]
    #[test_case(1, &[7], 7, &[1]; "single unit rod")]
    #[test_case(4, &[1, 5, 6, 10], 10, &[2, 2]; "first cut reaching the optimum wins")]
    fn solves_with_smallest_first_cut(length: i64, prices: &[i64], profit: u64, cuts: &[usize]) {
        let instance = validate(length, prices).unwrap();
        let solution = TabulatedSolver::new(&instance).solve();
        assert_eq!(solution.max_profit, profit);
        assert_eq!(solution.cuts, cuts);
        assert_eq!(solution.solver, SolverKind::Tabulated);
    }

    #[test]
    fn tables_hold_every_subproblem() {
        let instance = validate(5, &[2, 5, 7, 8, 10]).unwrap();
        let (profit, first_cut) = TabulatedSolver::new(&instance).tabulate();
        assert_eq!(profit, vec![0, 2, 5, 7, 10, 12]);
        assert_eq!(first_cut, vec![0, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn reconstruction_is_reversed() {
        // first cuts: 5 -> 1, 4 -> 2, 2 -> 2
        let first_cut = [0, 1, 2, 1, 2, 1];
        assert_eq!(reconstruct_cuts(&first_cut, 5), vec![2, 2, 1]);
        assert_eq!(reconstruct_cuts(&first_cut, 3), vec![2, 1]);
    }
}
