use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::workload::Operation;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "Global")]
    pub global: Option<GlobalConfig>,
    #[serde(default, alias = "Workloads")]
    pub workloads: BTreeMap<String, WorkloadConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobalConfig {
    #[serde(alias = "Server")]
    pub server: Option<String>,
    #[serde(alias = "Port")]
    pub port: Option<PortValue>,
    #[serde(alias = "TLSMode", alias = "tls")]
    pub tls_mode: Option<bool>,
    #[serde(alias = "Block_size")]
    pub block_size: Option<usize>,
    #[serde(alias = "Duration")]
    pub duration: Option<DurationValue>,
    #[serde(alias = "timeout")]
    pub request_timeout: Option<DurationValue>,
    pub insecure: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkloadConfig {
    #[serde(rename = "type", alias = "Type", alias = "operation")]
    pub operation: Option<Operation>,
    #[serde(alias = "Workers", alias = "concurrency")]
    pub workers: Option<usize>,
    #[serde(alias = "Duration")]
    pub duration: Option<DurationValue>,
    #[serde(alias = "Target", alias = "path")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ConfigError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ConfigError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PortValue {
    Number(u16),
    Text(String),
}

impl PortValue {
    pub(crate) fn to_port(&self) -> Result<u16, ConfigError> {
        let port = match self {
            PortValue::Number(port) => *port,
            PortValue::Text(text) => {
                text.trim()
                    .parse::<u16>()
                    .map_err(|err| ConfigError::InvalidPort {
                        value: text.clone(),
                        source: err,
                    })?
            }
        };
        if port == 0 {
            return Err(ConfigError::PortZero);
        }
        Ok(port)
    }
}
