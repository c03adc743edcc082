use crate::entities::{RodInstance, RodSolution};
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_is_valid(length: usize, prices: &[u64]) -> bool {
    length > 0 && prices.len() == length && prices.iter().all(|&p| p > 0)
}

/// The pieces add up to the full rod
pub fn cuts_sum_to_length(instance: &RodInstance, cuts: &[usize]) -> bool {
    cuts.iter().all(|&c| c >= 1 && c <= instance.length())
        && cuts.iter().sum::<usize>() == instance.length()
}

/// Selling the pieces earns exactly the reported profit
pub fn cuts_match_profit(instance: &RodInstance, cuts: &[usize], profit: u64) -> bool {
    instance.profit_of(cuts) == profit
}

pub fn solution_is_consistent(instance: &RodInstance, solution: &RodSolution) -> bool {
    if !cuts_sum_to_length(instance, &solution.cuts) {
        error!(
            "[{}] cuts {:?} do not add up to the rod length {}",
            solution.solver,
            solution.cuts,
            instance.length()
        );
        return false;
    }
    if !cuts_match_profit(instance, &solution.cuts, solution.max_profit) {
        error!(
            "[{}] cuts {:?} earn {}, but a profit of {} was reported",
            solution.solver,
            solution.cuts,
            instance.profit_of(&solution.cuts),
            solution.max_profit
        );
        return false;
    }
    true
}
