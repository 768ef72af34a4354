mod app;
mod config;
mod execution;
mod http;
mod profile;
mod report;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use execution::ExecutionError;
pub use http::{HttpError, RequestError};
pub use profile::ProfileError;
pub use report::ReportError;
