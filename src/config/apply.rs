use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::info;

use crate::args::DEFAULT_REQUEST_TIMEOUT;
use crate::error::ConfigError;
use crate::workload::{RunContext, Target, WorkloadSpec};

use super::types::{ConfigFile, DurationValue};

/// Validated `[global]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    pub target: Target,
    pub block_size: usize,
    pub duration: Duration,
    /// Per-request timeout; also bounds how long a run can overshoot its
    /// duration on a stalled target.
    pub request_timeout: Duration,
    pub insecure: bool,
}

/// Validates the `[global]` section.
///
/// # Errors
///
/// Returns an error when a required field is missing or malformed.
pub fn resolve_global(config: &ConfigFile) -> Result<GlobalSettings, ConfigError> {
    let global = config.global.as_ref().ok_or(ConfigError::MissingGlobal)?;

    let server = global
        .server
        .as_deref()
        .map(str::trim)
        .ok_or(ConfigError::MissingGlobalField { field: "server" })?;
    if server.is_empty() {
        return Err(ConfigError::EmptyServer);
    }
    let port = global
        .port
        .as_ref()
        .ok_or(ConfigError::MissingGlobalField { field: "port" })?
        .to_port()?;
    let duration = global
        .duration
        .as_ref()
        .ok_or(ConfigError::MissingGlobalField { field: "duration" })
        .and_then(|value| resolve_duration(value, "global.duration"))?;
    let request_timeout = global
        .request_timeout
        .as_ref()
        .map(|value| resolve_duration(value, "global.request_timeout"))
        .transpose()?
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

    let settings = GlobalSettings {
        target: Target::new(server, port, global.tls_mode.unwrap_or(false)),
        block_size: global.block_size.unwrap_or(0),
        duration,
        request_timeout,
        insecure: global.insecure.unwrap_or(false),
    };
    info!(
        "Running test on {}:{}, tls mode={}, block size={}, test timeout {:?}",
        settings.target.host,
        settings.target.port,
        settings.target.tls,
        settings.block_size,
        settings.duration
    );
    Ok(settings)
}

/// Turns every `[workloads.<name>]` entry into a spec, in name order, with
/// ids drawn from `context`.
///
/// # Errors
///
/// Returns an error when no workload is defined or an entry is invalid.
pub fn build_workload_specs(
    config: &ConfigFile,
    global: &GlobalSettings,
    context: &mut RunContext,
) -> Result<Vec<WorkloadSpec>, ConfigError> {
    if config.workloads.is_empty() {
        return Err(ConfigError::NoWorkloads);
    }

    let mut specs = Vec::with_capacity(config.workloads.len());
    for (name, workload) in &config.workloads {
        let operation = workload
            .operation
            .ok_or_else(|| ConfigError::MissingOperation { name: name.clone() })?;
        let concurrency = workload
            .workers
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| ConfigError::ZeroConcurrency { name: name.clone() })?;
        let duration = match workload.duration.as_ref() {
            Some(value) => resolve_duration(value, &format!("workloads.{}.duration", name))?,
            None => global.duration,
        };
        let target = match workload.target.as_deref() {
            Some(path) => global.target.clone().with_path(path),
            None => global.target.clone(),
        };

        info!("Adding executor for {}", name);
        specs.push(context.workload(name.as_str(), operation, concurrency, duration, target));
    }
    Ok(specs)
}

fn resolve_duration(value: &DurationValue, context: &str) -> Result<Duration, ConfigError> {
    value
        .to_duration()
        .map_err(|err| ConfigError::InvalidDuration {
            context: context.to_owned(),
            source: Box::new(err),
        })
}
