use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job waiting to be printed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PrintJob {
    pub id: String,
    /// Volume of material the job occupies on the printer
    pub volume: f64,
    /// Lower values are printed first
    pub priority: i64,
    /// Time needed to print the job
    pub print_time: u64,
}

/// Capacity of a single print batch.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PrinterConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

/// Order in which the jobs are printed and the total time of all batches.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PrintPlan {
    pub print_order: Vec<String>,
    pub total_time: u64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConstraints {
    #[error("a batch must be allowed to hold at least one item")]
    ZeroMaxItems,

    #[error("maximum batch volume must be a finite positive number, got {0}")]
    InvalidMaxVolume(f64),

    #[error("job {id} has an invalid volume: {volume}")]
    InvalidJobVolume { id: String, volume: f64 },
}
