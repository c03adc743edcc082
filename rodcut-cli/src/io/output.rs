use crate::config::RodCutConfig;
use rodcut::batching::{PrintJob, PrintPlan, PrinterConstraints};
use rodcut::io::ext_repr::{ExtRodInstance, ExtRodSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct RodCutOutput {
    #[serde(flatten)]
    pub instance: ExtRodInstance,
    pub solutions: Vec<ExtRodSolution>,
    pub config: RodCutConfig,
}

/// A set of print jobs and the printer they are batched for
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrintBatchingInstance {
    pub jobs: Vec<PrintJob>,
    pub constraints: PrinterConstraints,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PrintBatchingOutput {
    #[serde(flatten)]
    pub instance: PrintBatchingInstance,
    pub plan: PrintPlan,
}
