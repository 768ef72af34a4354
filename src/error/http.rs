use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Failure of one request; absorbed by the worker and counted.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status {status}.")]
    UnexpectedStatus { status: u16 },
    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
}

impl RequestError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } | Self::Body { source } => source.is_timeout(),
            Self::UnexpectedStatus { .. } => false,
        }
    }
}
