use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

use crate::http::PayloadBuffer;
use crate::shutdown::{ShutdownSender, shutdown_channel};

/// Request kind issued by every worker of a workload.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
pub enum Operation {
    #[serde(rename = "GET", alias = "get", alias = "Get")]
    Get,
    #[serde(rename = "PUT", alias = "put", alias = "Put")]
    Put,
    #[serde(rename = "POST", alias = "post", alias = "Post")]
    Post,
}

/// Aggregation group a workload's results are merged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Read,
    Write,
}

impl Operation {
    #[must_use]
    pub const fn bucket(self) -> Bucket {
        match self {
            Self::Get => Bucket::Read,
            Self::Put | Self::Post => Bucket::Write,
        }
    }

    #[must_use]
    pub const fn sends_payload(self) -> bool {
        matches!(self, Self::Put | Self::Post)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub path: String,
}

impl Target {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, tls: bool) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
            path: "/".to_owned(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }

    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.tls { "https" } else { "http" }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}:{}{}",
            self.scheme(),
            self.host,
            self.port,
            self.path
        )
    }
}

/// Immutable description of one workload. Only a [`RunContext`] hands these
/// out, so ids are unique within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    id: u32,
    name: String,
    operation: Operation,
    concurrency: NonZeroUsize,
    duration: Duration,
    target: Target,
    block_size: usize,
}

impl WorkloadSpec {
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub const fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Per-run state owned by the orchestrator: the workload id counter, the
/// shared payload, and the shutdown channel handed to every worker.
#[derive(Debug)]
pub struct RunContext {
    next_workload_id: u32,
    payload: PayloadBuffer,
    shutdown_tx: ShutdownSender,
}

impl RunContext {
    #[must_use]
    pub fn new(payload: PayloadBuffer) -> Self {
        Self {
            next_workload_id: 0,
            payload,
            shutdown_tx: shutdown_channel(),
        }
    }

    #[must_use]
    pub fn workload(
        &mut self,
        name: impl Into<String>,
        operation: Operation,
        concurrency: NonZeroUsize,
        duration: Duration,
        target: Target,
    ) -> WorkloadSpec {
        let id = self.next_workload_id;
        self.next_workload_id = self.next_workload_id.saturating_add(1);
        WorkloadSpec {
            id,
            name: name.into(),
            operation,
            concurrency,
            duration,
            target,
            block_size: self.payload.len(),
        }
    }

    #[must_use]
    pub const fn payload(&self) -> &PayloadBuffer {
        &self.payload
    }

    #[must_use]
    pub const fn shutdown_sender(&self) -> &ShutdownSender {
        &self.shutdown_tx
    }

    /// Signals every running worker of this run to stop after its in-flight
    /// request is dropped.
    pub fn shutdown(&self) {
        drop(self.shutdown_tx.send(()));
    }
}
