use tracing::info;

use crate::report::{AggregateReport, BucketReport};
use crate::workload::Bucket;

/// Logs the aggregate results in human-readable form.
pub fn log_summary(report: &AggregateReport) {
    info!("Duration: {:?}", report.duration);
    info!("Overall Results:");
    info!("Overall Requests: {}", report.overall_requests());
    log_bucket("GET", report.bucket(Bucket::Read));
    log_bucket("PUT", report.bucket(Bucket::Write));
    info!("Overall IOPS: {}", report.overall_iops());
    info!("Overall GET IOPS: {}", report.bucket(Bucket::Read).iops);
    info!("Overall PUT IOPS: {}", report.bucket(Bucket::Write).iops);
}

fn log_bucket(label: &str, bucket: &BucketReport) {
    info!("Overall {} Requests: {}", label, bucket.requests);
    info!("Overall {} Min Latency: {:?}", label, bucket.min_latency);
    info!("Overall {} Max Latency: {:?}", label, bucket.max_latency);
    info!("Overall {} Avg Latency: {:?}", label, bucket.avg_latency);
}
