use std::time::Duration;

/// Measurements taken by one worker. Workers never share these; the executor
/// merges them once every worker has exited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    successes: u64,
    failures: u64,
    latency_sum_ns: u128,
    min_latency: Option<Duration>,
    max_latency: Option<Duration>,
}

impl WorkerStats {
    pub fn record_success(&mut self, latency: Duration) {
        self.successes = self.successes.saturating_add(1);
        self.latency_sum_ns = self.latency_sum_ns.saturating_add(latency.as_nanos());
        self.min_latency = Some(self.min_latency.map_or(latency, |min| min.min(latency)));
        self.max_latency = Some(self.max_latency.map_or(latency, |max| max.max(latency)));
    }

    pub const fn record_failure(&mut self) {
        self.failures = self.failures.saturating_add(1);
    }

    pub fn merge(&mut self, other: &Self) {
        self.successes = self.successes.saturating_add(other.successes);
        self.failures = self.failures.saturating_add(other.failures);
        self.latency_sum_ns = self.latency_sum_ns.saturating_add(other.latency_sum_ns);
        self.min_latency = merge_extreme(self.min_latency, other.min_latency, Duration::min);
        self.max_latency = merge_extreme(self.max_latency, other.max_latency, Duration::max);
    }

    #[must_use]
    pub const fn successes(&self) -> u64 {
        self.successes
    }

    #[must_use]
    pub const fn failures(&self) -> u64 {
        self.failures
    }

    #[must_use]
    pub const fn min_latency(&self) -> Option<Duration> {
        self.min_latency
    }

    #[must_use]
    pub const fn max_latency(&self) -> Option<Duration> {
        self.max_latency
    }

    /// Converts the merged measurements into a result over `duration`.
    #[must_use]
    pub fn result_over(&self, duration: Duration) -> WorkloadResult {
        if self.successes == 0 {
            return WorkloadResult::default();
        }
        let avg_ns = self
            .latency_sum_ns
            .checked_div(u128::from(self.successes))
            .unwrap_or(0);
        WorkloadResult {
            total: self.successes,
            iops: rate_per_second(self.successes, duration),
            avg_latency: Duration::from_nanos(u64::try_from(avg_ns).unwrap_or(u64::MAX)),
            min_latency: self.min_latency.unwrap_or_default(),
            max_latency: self.max_latency.unwrap_or_default(),
        }
    }
}

fn merge_extreme(
    left: Option<Duration>,
    right: Option<Duration>,
    pick: fn(Duration, Duration) -> Duration,
) -> Option<Duration> {
    match (left, right) {
        (Some(left), Some(right)) => Some(pick(left, right)),
        (Some(value), None) | (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

fn rate_per_second(count: u64, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}

/// Measured outcome of one workload. Every field is zero when no request
/// succeeded; otherwise `min_latency <= avg_latency <= max_latency`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkloadResult {
    pub total: u64,
    pub iops: f64,
    pub avg_latency: Duration,
    pub min_latency: Duration,
    pub max_latency: Duration,
}
