mod grouping;
mod job;

#[doc(inline)]
pub use grouping::{Batch, group_jobs, optimize_printing};

#[doc(inline)]
pub use job::{InvalidConstraints, PrintJob, PrintPlan, PrinterConstraints};
