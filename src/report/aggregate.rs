use std::time::Duration;

use tracing::warn;

use crate::error::ExecutionError;
use crate::workload::{Bucket, CompletedExecutor, Operation, WorkloadResult};

/// Merged statistics of every workload in one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketReport {
    pub requests: u64,
    pub iops: f64,
    pub avg_latency: Duration,
    pub min_latency: Duration,
    pub max_latency: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
struct BucketAccumulator {
    requests: u64,
    iops: f64,
    weighted_latency_ns: u128,
    min_latency: Option<Duration>,
    max_latency: Option<Duration>,
}

impl BucketAccumulator {
    fn add(&mut self, result: &WorkloadResult) {
        self.requests = self.requests.saturating_add(result.total);
        self.iops += result.iops;
        if result.total == 0 {
            // No samples, so its zeroed extremes must not win the merge.
            return;
        }
        self.weighted_latency_ns = self.weighted_latency_ns.saturating_add(
            result
                .avg_latency
                .as_nanos()
                .saturating_mul(u128::from(result.total)),
        );
        self.min_latency = Some(
            self.min_latency
                .map_or(result.min_latency, |min| min.min(result.min_latency)),
        );
        self.max_latency = Some(
            self.max_latency
                .map_or(result.max_latency, |max| max.max(result.max_latency)),
        );
    }

    fn finish(self) -> BucketReport {
        let avg_ns = if self.requests > 0 {
            self.weighted_latency_ns
                .checked_div(u128::from(self.requests))
                .unwrap_or(0)
        } else {
            0
        };
        BucketReport {
            requests: self.requests,
            iops: self.iops,
            avg_latency: Duration::from_nanos(u64::try_from(avg_ns).unwrap_or(u64::MAX)),
            min_latency: self.min_latency.unwrap_or_default(),
            max_latency: self.max_latency.unwrap_or_default(),
        }
    }
}

/// Final read/write report of a run. Built once after every executor has
/// completed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateReport {
    pub duration: Duration,
    pub read: BucketReport,
    pub write: BucketReport,
}

impl AggregateReport {
    #[must_use]
    pub const fn overall_requests(&self) -> u64 {
        self.read.requests.saturating_add(self.write.requests)
    }

    #[must_use]
    pub fn overall_iops(&self) -> f64 {
        self.read.iops + self.write.iops
    }

    #[must_use]
    pub const fn bucket(&self, bucket: Bucket) -> &BucketReport {
        match bucket {
            Bucket::Read => &self.read,
            Bucket::Write => &self.write,
        }
    }
}

/// Collects per-workload results and executor errors, then folds them into
/// an [`AggregateReport`]. Errors never stop the collection.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    read: BucketAccumulator,
    write: BucketAccumulator,
    errors: Vec<ExecutionError>,
}

impl ReportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, operation: Operation, result: &WorkloadResult) {
        match operation.bucket() {
            Bucket::Read => self.read.add(result),
            Bucket::Write => self.write.add(result),
        }
    }

    /// Adds an executor's result, keeping its advisory error if it has one.
    pub fn add_executor(&mut self, executor: &CompletedExecutor) {
        let operation = executor.spec().operation();
        match executor.report() {
            Ok(result) => self.add_result(operation, &result),
            Err(err) => {
                warn!("{}", err);
                let result = *err.result();
                self.add_result(operation, &result);
                self.errors.push(err);
            }
        }
    }

    #[must_use]
    pub fn build(self, duration: Duration) -> (AggregateReport, Vec<ExecutionError>) {
        let report = AggregateReport {
            duration,
            read: self.read.finish(),
            write: self.write.finish(),
        };
        (report, self.errors)
    }
}
