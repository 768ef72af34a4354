//! Workload descriptions, per-worker statistics, and the executor that drives
//! one workload's concurrent workers.
mod executor;
mod spec;
mod stats;


pub use executor::{CompletedExecutor, Executor, IN_FLIGHT_GRACE, RunningExecutor};
pub use spec::{Bucket, Operation, RunContext, Target, WorkloadSpec};
pub use stats::{WorkerStats, WorkloadResult};
