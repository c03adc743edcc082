use crate::config::RodCutConfig;
use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::info;
use rodcut::entities::{RodInstance, RodSolution};
use rodcut::solvers;
use thousands::Separable;

/// Runs every configured solver on the instance, cross-validating the results if enabled.
pub fn solve_rod(instance: &RodInstance, config: &RodCutConfig) -> Result<Vec<RodSolution>> {
    ensure!(!config.solvers.is_empty(), "no solvers configured");

    let solutions = config
        .solvers
        .iter()
        .map(|&kind| {
            let solution = solvers::solve(instance, kind);
            info!(
                "[SOLVE] {} solver: max profit {}, cuts {:?} ({} cuts)",
                kind,
                solution.max_profit.separate_with_commas(),
                solution.cuts,
                solution.number_of_cuts()
            );
            solution
        })
        .collect_vec();

    if config.cross_validate {
        cross_validate(&solutions)?;
    }

    Ok(solutions)
}

/// Fails if any two solutions report a different maximum profit.
/// Cut sequences are allowed to differ, several sequences can share the optimum.
pub fn cross_validate(solutions: &[RodSolution]) -> Result<()> {
    if let Some((a, b)) = solutions
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.max_profit != b.max_profit)
    {
        bail!(
            "profit mismatch between solvers: {} found {}, {} found {}",
            a.solver,
            a.max_profit,
            b.solver,
            b.max_profit
        );
    }
    if solutions.len() > 1 {
        info!(
            "[SOLVE] {} solvers agree on a max profit of {}",
            solutions.len(),
            solutions[0].max_profit.separate_with_commas()
        );
    }
    Ok(())
}
