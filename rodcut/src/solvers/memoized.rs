use crate::entities::{RodInstance, RodSolution};
use crate::solvers::{RodCutSolver, SolverKind};
use crate::util::assertions;
use log::{debug, trace};
use std::cmp::Ordering;
use std::iter;
use std::time::Instant;

/// Optimal profit of a rod of a given length and the cuts achieving it
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubSolution {
    profit: u64,
    cuts: Vec<usize>,
}

/// Top-down solver: recursively tries every length for the first piece and caches
/// the optimum of every remaining rod length, so each length is evaluated at most once.
///
/// [`solve`](RodCutSolver::solve) requests the shorter lengths first, so every evaluation finds
/// its subproblems already cached and the recursion never grows deeper than one level.
///
/// Among sequences with equal profit, the lexicographically smallest one is kept.
pub struct MemoizedSolver<'a> {
    instance: &'a RodInstance,
    /// `cache[n]` holds the optimum for a rod of length `n` once evaluated
    cache: Vec<Option<SubSolution>>,
    n_evaluated: usize,
    n_cache_hits: usize,
}

impl<'a> MemoizedSolver<'a> {
    pub fn new(instance: &'a RodInstance) -> Self {
        let mut cache = vec![None; instance.length() + 1];
        cache[0] = Some(SubSolution {
            profit: 0,
            cuts: vec![],
        });
        Self {
            instance,
            cache,
            n_evaluated: 0,
            n_cache_hits: 0,
        }
    }

    /// Number of distinct rod lengths evaluated so far
    pub fn n_evaluated(&self) -> usize {
        self.n_evaluated
    }

    /// Number of times an already evaluated rod length was requested again
    pub fn n_cache_hits(&self) -> usize {
        self.n_cache_hits
    }

    fn best(&mut self, n: usize) -> &SubSolution {
        if self.cache[n].is_some() {
            self.n_cache_hits += 1;
        } else {
            let sub_solution = self.evaluate(n);
            self.cache[n] = Some(sub_solution);
        }
        self.cached(n)
    }

    fn evaluate(&mut self, n: usize) -> SubSolution {
        debug_assert!(n > 0 && self.cache[n].is_none());

        let mut best_cut = 1;
        let mut best_profit = self.instance.price(1) + self.best(n - 1).profit;

        for cut in 2..=n {
            let profit = self.instance.price(cut) + self.best(n - cut).profit;
            let improves = match profit.cmp(&best_profit) {
                Ordering::Greater => true,
                Ordering::Equal => self.candidate(cut, n).lt(self.candidate(best_cut, n)),
                Ordering::Less => false,
            };
            if improves {
                best_cut = cut;
                best_profit = profit;
            }
        }

        let cuts = self.candidate(best_cut, n).collect::<Vec<usize>>();
        self.n_evaluated += 1;
        trace!("[MEMO] best({n}) = {best_profit} with cuts {cuts:?}");

        SubSolution {
            profit: best_profit,
            cuts,
        }
    }

    /// The cut sequence obtained by taking `first_cut` off a rod of length `n` and cutting the remainder optimally.
    fn candidate(&self, first_cut: usize, n: usize) -> impl Iterator<Item = usize> + '_ {
        iter::once(first_cut).chain(self.cached(n - first_cut).cuts.iter().copied())
    }

    fn cached(&self, n: usize) -> &SubSolution {
        self.cache[n]
            .as_ref()
            .unwrap_or_else(|| panic!("rod length {n} requested before it was evaluated"))
    }
}

impl RodCutSolver for MemoizedSolver<'_> {
    fn kind(&self) -> SolverKind {
        SolverKind::Memoized
    }

    fn solve(&mut self) -> RodSolution {
        let start = Instant::now();
        let length = self.instance.length();
        for n in 1..length {
            self.best(n);
        }
        let SubSolution { profit, cuts } = self.best(length).clone();

        let solution = RodSolution {
            solver: self.kind(),
            max_profit: profit,
            cuts,
            time_stamp: Instant::now(),
        };
        debug_assert!(assertions::solution_is_consistent(self.instance, &solution));

        debug!(
            "[MEMO] rod of length {} solved in {:.3}ms: profit {}, {} pieces ({} subproblems evaluated, {} cache hits)",
            length,
            start.elapsed().as_secs_f64() * 1000.0,
            solution.max_profit,
            solution.number_of_pieces(),
            self.n_evaluated,
            self.n_cache_hits
        );

        solution
    }
}
