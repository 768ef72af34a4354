//! Run orchestration: building executors from config, driving them to
//! completion, and summarizing the outcome.
mod profile;
mod runner;
mod summary;


pub use profile::{dump_heap_profile, warn_cpu_profile_unavailable};
pub use runner::{PreparedRun, RunOutcome, RunStatus, prepare_run, run_workloads};
pub use summary::log_summary;
