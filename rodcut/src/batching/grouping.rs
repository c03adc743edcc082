use crate::batching::{InvalidConstraints, PrintJob, PrintPlan, PrinterConstraints};
use itertools::Itertools;
use log::debug;

/// A group of jobs printed together. Lasts as long as its slowest job.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    pub jobs: Vec<&'a PrintJob>,
    pub volume: f64,
}

impl Batch<'_> {
    pub fn print_time(&self) -> u64 {
        self.jobs.iter().map(|j| j.print_time).max().unwrap_or(0)
    }
}

/// Greedily groups the jobs into batches, in order of priority.
///
/// Jobs are sorted by priority (stable, so equal priorities keep their input order).
/// Every job not yet assigned opens a new batch, which is then filled with all later unassigned jobs
/// that still fit within both the item and the volume limit. Jobs which do not fit are skipped, not waited for.
/// The opening job is always accepted, even if it exceeds the volume limit on its own.
pub fn group_jobs<'a>(
    jobs: &'a [PrintJob],
    constraints: &PrinterConstraints,
) -> Result<Vec<Batch<'a>>, InvalidConstraints> {
    validate(jobs, constraints)?;

    let sorted = jobs.iter().sorted_by_key(|j| j.priority).collect_vec();
    // tracked by position, jobs sharing an id are still distinct jobs
    let mut assigned = vec![false; sorted.len()];
    let mut batches = vec![];

    for (i, job) in sorted.iter().enumerate() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        let mut batch = Batch {
            jobs: vec![*job],
            volume: job.volume,
        };

        for (j, next) in sorted.iter().enumerate().skip(i + 1) {
            if assigned[j]
                || batch.jobs.len() + 1 > constraints.max_items
                || batch.volume + next.volume > constraints.max_volume
            {
                continue;
            }
            assigned[j] = true;
            batch.jobs.push(*next);
            batch.volume += next.volume;
        }

        debug!(
            "[BATCH] batch {}: jobs [{}], volume {:.1}, time {}",
            batches.len(),
            batch.jobs.iter().map(|j| j.id.as_str()).join(", "),
            batch.volume,
            batch.print_time()
        );
        batches.push(batch);
    }

    Ok(batches)
}

/// Groups the jobs into batches (see [`group_jobs`]) and returns the resulting print order and total print time.
pub fn optimize_printing(
    jobs: &[PrintJob],
    constraints: &PrinterConstraints,
) -> Result<PrintPlan, InvalidConstraints> {
    let batches = group_jobs(jobs, constraints)?;

    Ok(PrintPlan {
        print_order: batches
            .iter()
            .flat_map(|b| b.jobs.iter().map(|j| j.id.clone()))
            .collect(),
        total_time: batches.iter().map(Batch::print_time).sum(),
    })
}

fn validate(jobs: &[PrintJob], constraints: &PrinterConstraints) -> Result<(), InvalidConstraints> {
    if constraints.max_items == 0 {
        return Err(InvalidConstraints::ZeroMaxItems);
    }
    if !constraints.max_volume.is_finite() || constraints.max_volume <= 0.0 {
        return Err(InvalidConstraints::InvalidMaxVolume(constraints.max_volume));
    }
    if let Some(job) = jobs
        .iter()
        .find(|j| !j.volume.is_finite() || j.volume < 0.0)
    {
        return Err(InvalidConstraints::InvalidJobVolume {
            id: job.id.clone(),
            volume: job.volume,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, volume: f64, priority: i64, print_time: u64) -> PrintJob {
        PrintJob {
            id: id.to_string(),
            volume,
            priority,
            print_time,
        }
    }

    const CONSTRAINTS: PrinterConstraints = PrinterConstraints {
        max_volume: 300.0,
        max_items: 2,
    };

    #[test]
    fn same_priority() {
        let jobs = [
            job("M1", 100.0, 1, 120),
            job("M2", 150.0, 1, 90),
            job("M3", 120.0, 1, 150),
        ];
        let plan = optimize_printing(&jobs, &CONSTRAINTS).unwrap();
        assert_eq!(plan.print_order, ["M1", "M2", "M3"]);
        assert_eq!(plan.total_time, 270);
    }

    #[test]
    fn different_priorities() {
        let jobs = [
            job("M1", 100.0, 2, 120),
            job("M2", 150.0, 1, 90),
            job("M3", 120.0, 3, 150),
        ];
        let plan = optimize_printing(&jobs, &CONSTRAINTS).unwrap();
        assert_eq!(plan.print_order, ["M2", "M1", "M3"]);
        assert_eq!(plan.total_time, 270);
    }

    #[test]
    fn exceeding_volume() {
        let jobs = [
            job("M1", 250.0, 1, 180),
            job("M2", 200.0, 1, 150),
            job("M3", 180.0, 2, 120),
        ];
        let plan = optimize_printing(&jobs, &CONSTRAINTS).unwrap();
        assert_eq!(plan.print_order, ["M1", "M2", "M3"]);
        assert_eq!(plan.total_time, 450);
    }

    #[test]
    fn skips_jobs_that_do_not_fit() {
        let jobs = [
            job("A", 200.0, 1, 10),
            job("B", 150.0, 1, 20),
            job("C", 50.0, 1, 30),
        ];
        let batches = group_jobs(&jobs, &CONSTRAINTS).unwrap();
        let ids = batches
            .iter()
            .map(|b| b.jobs.iter().map(|j| j.id.as_str()).collect_vec())
            .collect_vec();
        assert_eq!(ids, vec![vec!["A", "C"], vec!["B"]]);
        assert_eq!(batches[0].print_time(), 30);
    }

    #[test]
    fn oversized_job_prints_alone() {
        let jobs = [job("big", 500.0, 1, 60), job("small", 10.0, 1, 5)];
        let plan = optimize_printing(&jobs, &CONSTRAINTS).unwrap();
        assert_eq!(plan.print_order, ["big", "small"]);
        assert_eq!(plan.total_time, 65);
    }

    #[test]
    fn duplicate_ids_are_distinct_jobs() {
        let jobs = [job("X", 10.0, 1, 5), job("X", 10.0, 1, 7)];
        let plan = optimize_printing(&jobs, &CONSTRAINTS).unwrap();
        assert_eq!(plan.print_order, ["X", "X"]);
        assert_eq!(plan.total_time, 7);
    }

    #[test]
    fn no_jobs() {
        let plan = optimize_printing(&[], &CONSTRAINTS).unwrap();
        assert_eq!(plan, PrintPlan::default());
    }

    #[test]
    fn rejects_invalid_constraints() {
        let jobs = [job("M1", 10.0, 1, 5)];
        let zero_items = PrinterConstraints {
            max_items: 0,
            ..CONSTRAINTS
        };
        assert_eq!(
            optimize_printing(&jobs, &zero_items),
            Err(InvalidConstraints::ZeroMaxItems)
        );
        let nan_volume = PrinterConstraints {
            max_volume: f64::NAN,
            ..CONSTRAINTS
        };
        assert!(matches!(
            optimize_printing(&jobs, &nan_volume),
            Err(InvalidConstraints::InvalidMaxVolume(_))
        ));
        let negative_job = [job("M1", -1.0, 1, 5)];
        assert!(matches!(
            optimize_printing(&negative_job, &CONSTRAINTS),
            Err(InvalidConstraints::InvalidJobVolume { .. })
        ));
    }
}
