use std::time::Duration;

use reqwest::{Client, Url};
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;
use crate::workload::Target;

#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub request_timeout: Option<Duration>,
    pub insecure: bool,
    /// Total worker count across every workload of the run.
    pub max_idle_per_host: usize,
}

/// Builds the HTTP client shared by all workers of a run.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(settings: &ClientSettings) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(settings.max_idle_per_host.max(1));

    if let Some(timeout) = settings.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }

    if settings.insecure {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        HttpError::BuildClientFailed { source: err }
    })
}

/// Resolves the URL every request of a workload is sent to.
///
/// # Errors
///
/// Returns an error when host, port, and path do not form a valid URL.
pub fn target_url(target: &Target) -> Result<Url, HttpError> {
    let url = target.to_string();
    Url::parse(&url).map_err(|err| HttpError::InvalidUrl { url, source: err })
}
