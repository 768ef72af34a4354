use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::{ExecutionError, HttpError};
use crate::http::{PayloadBuffer, send_request, target_url};
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

use super::spec::{Operation, RunContext, WorkloadSpec};
use super::stats::{WorkerStats, WorkloadResult};

/// How long a request still in flight at the deadline may run on before the
/// worker gives up on it.
pub const IN_FLIGHT_GRACE: Duration = Duration::from_secs(1);

/// Idle executor for one workload. [`Executor::start`] consumes it, so a
/// workload can only ever be run once.
#[derive(Debug)]
pub struct Executor {
    spec: WorkloadSpec,
    client: Client,
    url: Url,
    payload: PayloadBuffer,
    shutdown_tx: ShutdownSender,
}

struct WorkerContext {
    client: Client,
    url: Url,
    operation: Operation,
    payload: PayloadBuffer,
    deadline: Instant,
    cutoff: Instant,
    // Held so the shutdown channel stays open while workers run.
    _shutdown_tx: ShutdownSender,
}

impl Executor {
    /// Prepares an executor bound to the run's payload and shutdown channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the workload target does not form a valid URL.
    pub fn new(spec: WorkloadSpec, client: Client, context: &RunContext) -> Result<Self, HttpError> {
        let url = target_url(spec.target())?;
        Ok(Self {
            spec,
            client,
            url,
            payload: context.payload().clone(),
            shutdown_tx: context.shutdown_sender().clone(),
        })
    }

    /// Spawns `concurrency` workers and returns without waiting for them.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(self) -> RunningExecutor {
        let started = Instant::now();
        let deadline = started.checked_add(self.spec.duration()).unwrap_or_else(|| {
            warn!(
                "Duration of workload '{}' overflows the clock; running zero iterations.",
                self.spec.name()
            );
            started
        });
        let cutoff = deadline.checked_add(IN_FLIGHT_GRACE).unwrap_or(deadline);
        let concurrency = self.spec.concurrency().get();

        info!(
            "Starting workload '{}' (id {}): {} x{} for {:?} against {}",
            self.spec.name(),
            self.spec.id(),
            self.spec.operation(),
            concurrency,
            self.spec.duration(),
            self.url
        );

        let worker = Arc::new(WorkerContext {
            client: self.client,
            url: self.url,
            operation: self.spec.operation(),
            payload: self.payload,
            deadline,
            cutoff,
            _shutdown_tx: self.shutdown_tx.clone(),
        });

        let mut workers = Vec::with_capacity(concurrency);
        for _ in 0..concurrency {
            // Subscribe before spawning so a stop sent right after start is seen.
            let shutdown_rx = self.shutdown_tx.subscribe();
            workers.push(tokio::spawn(run_worker(Arc::clone(&worker), shutdown_rx)));
        }

        RunningExecutor {
            spec: self.spec,
            started,
            workers,
        }
    }
}

async fn run_worker(worker: Arc<WorkerContext>, mut shutdown_rx: ShutdownReceiver) -> WorkerStats {
    let mut stats = WorkerStats::default();
    while Instant::now() < worker.deadline {
        let request_start = Instant::now();
        let outcome = tokio::select! {
            _ = shutdown_rx.recv() => break,
            () = tokio::time::sleep_until(worker.cutoff) => {
                debug!(
                    "{} {} still pending past the deadline; counted as failed",
                    worker.operation,
                    worker.url
                );
                stats.record_failure();
                break;
            }
            outcome = send_request(&worker.client, worker.operation, &worker.url, &worker.payload) => outcome,
        };
        match outcome {
            Ok(()) => stats.record_success(request_start.elapsed()),
            Err(err) => {
                debug!(
                    timed_out = err.is_timeout(),
                    "{} {} failed: {}",
                    worker.operation,
                    worker.url,
                    err
                );
                stats.record_failure();
            }
        }
    }
    stats
}

/// Executor whose workers are generating load.
#[derive(Debug)]
pub struct RunningExecutor {
    spec: WorkloadSpec,
    started: Instant,
    workers: Vec<JoinHandle<WorkerStats>>,
}

impl RunningExecutor {
    #[cfg(test)]
    pub(crate) fn abort_worker(&self, index: usize) -> bool {
        self.workers.get(index).map(JoinHandle::abort).is_some()
    }

    /// Completion barrier: resolves once every worker has exited, merging
    /// their local statistics.
    pub async fn wait(self) -> CompletedExecutor {
        let mut stats = WorkerStats::default();
        let mut failed_workers = 0u64;
        for handle in self.workers {
            match handle.await {
                Ok(worker_stats) => stats.merge(&worker_stats),
                Err(err) => {
                    error!(
                        "Worker of workload '{}' aborted: {}",
                        self.spec.name(),
                        err
                    );
                    failed_workers = failed_workers.saturating_add(1);
                }
            }
        }
        let elapsed = self.started.elapsed();
        debug!(
            "Workload '{}' finished after {:?}: {} ok, {} failed",
            self.spec.name(),
            elapsed,
            stats.successes(),
            stats.failures()
        );

        CompletedExecutor {
            spec: self.spec,
            stats,
            failed_workers,
            elapsed,
        }
    }
}

/// Executor whose workers have all stopped; its statistics are final.
#[derive(Debug, Clone)]
pub struct CompletedExecutor {
    spec: WorkloadSpec,
    stats: WorkerStats,
    failed_workers: u64,
    elapsed: Duration,
}

impl CompletedExecutor {
    #[must_use]
    pub const fn spec(&self) -> &WorkloadSpec {
        &self.spec
    }

    #[must_use]
    pub const fn stats(&self) -> &WorkerStats {
        &self.stats
    }

    /// Wall-clock time from start until the last worker exited.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn error_count(&self) -> u64 {
        self.stats.failures()
    }

    /// Result of the workload, with iops taken over the configured duration.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] when any request failed or any worker
    /// aborted. The error still carries the computed result.
    pub fn report(&self) -> Result<WorkloadResult, ExecutionError> {
        let result = self.stats.result_over(self.spec.duration());
        let failed = self.stats.failures();
        if self.failed_workers > 0 {
            return Err(ExecutionError::WorkersAborted {
                workload: self.spec.name().to_owned(),
                id: self.spec.id(),
                failed_workers: self.failed_workers,
                failed,
                result,
            });
        }
        if failed > 0 {
            return Err(ExecutionError::RequestsFailed {
                workload: self.spec.name().to_owned(),
                id: self.spec.id(),
                failed,
                result,
            });
        }
        Ok(result)
    }
}
