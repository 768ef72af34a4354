use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Config is missing the [global] section.")]
    MissingGlobal,
    #[error("Config 'global.{field}' is required.")]
    MissingGlobalField { field: &'static str },
    #[error("Config 'global.server' must not be empty.")]
    EmptyServer,
    #[error("Invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Port must be > 0.")]
    PortZero,
    #[error("Config must define at least one workload.")]
    NoWorkloads,
    #[error("Workload '{name}' must set 'type' (GET, PUT or POST).")]
    MissingOperation { name: String },
    #[error("Workload '{name}' must set 'workers' >= 1.")]
    ZeroConcurrency { name: String },
    #[error("Invalid duration for '{context}': {source}")]
    InvalidDuration {
        context: String,
        #[source]
        source: Box<ConfigError>,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
}
