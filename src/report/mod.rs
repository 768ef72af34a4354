//! Merging per-workload results into the read/write report and persisting it.
mod aggregate;
mod render;
mod writer;


pub use aggregate::{AggregateReport, BucketReport, ReportBuilder};
pub use render::render_report;
pub use writer::{ReportFile, write_report};
