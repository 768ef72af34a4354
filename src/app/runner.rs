use futures_util::future::join_all;
use tokio::time::Instant;
use tracing::info;

use crate::config::{build_workload_specs, resolve_global, types::ConfigFile};
use crate::error::{AppResult, ExecutionError};
use crate::http::{ClientSettings, PayloadBuffer, build_client};
use crate::report::{AggregateReport, ReportBuilder};
use crate::workload::{CompletedExecutor, Executor, RunContext};

/// Exit status of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    WorkloadErrors,
}

impl RunStatus {
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::WorkloadErrors => 2,
        }
    }
}

/// Executors ready to start, plus the context they were built from.
#[derive(Debug)]
pub struct PreparedRun {
    pub context: RunContext,
    pub executors: Vec<Executor>,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub report: AggregateReport,
    pub errors: Vec<ExecutionError>,
    pub executors: Vec<CompletedExecutor>,
}

impl RunOutcome {
    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.errors.is_empty() {
            RunStatus::Success
        } else {
            RunStatus::WorkloadErrors
        }
    }
}

/// Validates the config and builds one executor per workload, sharing a
/// single payload buffer and HTTP client.
///
/// # Errors
///
/// Returns an error when the config is invalid or the client cannot be built.
pub fn prepare_run(config: &ConfigFile) -> AppResult<PreparedRun> {
    let global = resolve_global(config)?;
    let mut context = RunContext::new(PayloadBuffer::random(global.block_size));
    let specs = build_workload_specs(config, &global, &mut context)?;

    let total_workers = specs
        .iter()
        .map(|spec| spec.concurrency().get())
        .fold(0usize, usize::saturating_add);
    let client = build_client(&ClientSettings {
        request_timeout: Some(global.request_timeout),
        insecure: global.insecure,
        max_idle_per_host: total_workers,
    })?;

    let mut executors = Vec::with_capacity(specs.len());
    for spec in specs {
        executors.push(Executor::new(spec, client.clone(), &context)?);
    }
    Ok(PreparedRun { context, executors })
}

/// Starts every executor, waits until all of them have completed, and
/// aggregates their results.
pub async fn run_workloads(executors: Vec<Executor>) -> RunOutcome {
    let run_start = Instant::now();
    let mut running = Vec::with_capacity(executors.len());
    for executor in executors {
        running.push(executor.start());
    }

    info!("Wait for executors to finish");
    let completed = join_all(running.into_iter().map(|executor| executor.wait())).await;
    let duration = run_start.elapsed();

    let mut builder = ReportBuilder::new();
    for executor in &completed {
        builder.add_executor(executor);
    }
    let (report, errors) = builder.build(duration);

    RunOutcome {
        report,
        errors,
        executors: completed,
    }
}
