//! Core library for the `http-blaster` CLI.
//!
//! A run builds one [`workload::Executor`] per configured workload, drives
//! each executor's workers against the target until its deadline, and folds
//! the per-workload results into a read/write [`report::AggregateReport`].
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod report;
pub mod shutdown;
pub mod workload;

#[cfg(test)]
pub(crate) mod test_support;
