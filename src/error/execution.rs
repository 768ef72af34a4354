use thiserror::Error;

use crate::workload::WorkloadResult;

/// Advisory failure of a single workload.
///
/// The measured [`WorkloadResult`] stays valid and is carried along so the
/// caller can still aggregate it.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Workload '{workload}' (id {id}): {failed} request(s) failed.")]
    RequestsFailed {
        workload: String,
        id: u32,
        failed: u64,
        result: WorkloadResult,
    },
    #[error("Workload '{workload}' (id {id}): {failed_workers} worker(s) aborted, {failed} request(s) failed.")]
    WorkersAborted {
        workload: String,
        id: u32,
        failed_workers: u64,
        failed: u64,
        result: WorkloadResult,
    },
}

impl ExecutionError {
    #[must_use]
    pub const fn result(&self) -> &WorkloadResult {
        match self {
            Self::RequestsFailed { result, .. } | Self::WorkersAborted { result, .. } => result,
        }
    }
}
