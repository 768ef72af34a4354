use std::fmt::Write as _;

use crate::error::ReportError;
use crate::workload::Bucket;

use super::{AggregateReport, BucketReport};

fn write_line(output: &mut String, line: &str) -> Result<(), ReportError> {
    writeln!(output, "{}", line).map_err(|err| ReportError::FormatLine { source: err })
}

/// Renders the key=value results file. Latencies are whole microseconds.
///
/// # Errors
///
/// Returns an error if a line cannot be formatted.
pub fn render_report(report: &AggregateReport) -> Result<String, ReportError> {
    let mut output = String::new();
    write_line(&mut output, "[global]")?;
    write_line(
        &mut output,
        &format!("overall_requests={}", report.overall_requests()),
    )?;
    write_line(&mut output, &format!("overall_iops={}", report.overall_iops()))?;
    write_line(&mut output, "")?;
    write_bucket(&mut output, "get", report.bucket(Bucket::Read))?;
    write_line(&mut output, "")?;
    write_bucket(&mut output, "put", report.bucket(Bucket::Write))?;
    Ok(output)
}

fn write_bucket(output: &mut String, section: &str, bucket: &BucketReport) -> Result<(), ReportError> {
    write_line(output, &format!("[{}]", section))?;
    write_line(output, &format!("overall_requests={}", bucket.requests))?;
    write_line(output, &format!("overall_iops={}", bucket.iops))?;
    write_line(
        output,
        &format!("overall_lat_min={}usec", bucket.min_latency.as_micros()),
    )?;
    write_line(
        output,
        &format!("overall_lat_max={}usec", bucket.max_latency.as_micros()),
    )?;
    write_line(
        output,
        &format!("overall_lat_avg={}usec", bucket.avg_latency.as_micros()),
    )?;
    Ok(())
}
