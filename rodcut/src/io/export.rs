use crate::entities::RodSolution;
use crate::io::ext_repr::ExtRodSolution;
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(solution: &RodSolution, epoch: Instant) -> ExtRodSolution {
    let run_time = solution.time_stamp.saturating_duration_since(epoch);
    ExtRodSolution {
        solver: solution.solver,
        max_profit: solution.max_profit,
        cuts: solution.cuts.clone(),
        number_of_cuts: solution.number_of_cuts(),
        run_time_ms: u64::try_from(run_time.as_millis()).unwrap_or(u64::MAX),
    }
}
