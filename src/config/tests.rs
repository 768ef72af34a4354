use std::path::Path;
use std::time::Duration;

use tempfile::tempdir;

use crate::args::DEFAULT_REQUEST_TIMEOUT;
use crate::error::ConfigError;
use crate::http::PayloadBuffer;
use crate::workload::{Operation, RunContext};

use super::types::{ConfigFile, DurationValue, PortValue};
use super::{build_workload_specs, load_config_file, parse_duration_value, resolve_global};

const SAMPLE_TOML: &str = r#"
[global]
server = "127.0.0.1"
port = "8081"
tls_mode = true
block_size = 1024
duration = "10s"

[workloads.writes]
type = "PUT"
workers = 4
target = "bucket/object"

[workloads.reads]
type = "get"
workers = 8
duration = 5
"#;

fn write_config(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf, String> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    Ok(path)
}

fn parse_toml(content: &str) -> Result<ConfigFile, String> {
    toml::from_str(content).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn parse_toml_config_with_workloads() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(dir.path(), "blaster.toml", SAMPLE_TOML)?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let global = config
        .global
        .as_ref()
        .ok_or_else(|| "Expected global".to_owned())?;
    if global.port != Some(PortValue::Text("8081".to_owned())) {
        return Err(format!("Unexpected port: {:?}", global.port));
    }
    let reads = config
        .workloads
        .get("reads")
        .ok_or_else(|| "Expected reads workload".to_owned())?;
    if reads.operation != Some(Operation::Get) {
        return Err(format!("Unexpected operation: {:?}", reads.operation));
    }
    if reads.duration != Some(DurationValue::Seconds(5)) {
        return Err(format!("Unexpected duration: {:?}", reads.duration));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_aliases() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let content = r#"{
  "global": { "server": "localhost", "port": 9000, "duration": "250ms" },
  "workloads": {
    "ingest": { "operation": "POST", "concurrency": 2 }
  }
}"#;
    let path = write_config(dir.path(), "blaster.json", content)?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let ingest = config
        .workloads
        .get("ingest")
        .ok_or_else(|| "Expected ingest workload".to_owned())?;
    if ingest.operation != Some(Operation::Post) || ingest.workers != Some(2) {
        return Err(format!("Unexpected workload: {:?}", ingest));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(dir.path(), "blaster.yaml", "global: {}")?;
    match load_config_file(&path) {
        Err(ConfigError::UnsupportedExtension { ext }) if ext == "yaml" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_config| ()))),
    }
}

#[test]
fn missing_file_is_a_read_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    match load_config_file(&dir.path().join("absent.toml")) {
        Err(ConfigError::ReadConfig { .. }) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_config| ()))),
    }
}

#[test]
fn specs_follow_name_order_and_inherit_defaults() -> Result<(), String> {
    let config = parse_toml(SAMPLE_TOML)?;
    let global = resolve_global(&config).map_err(|err| err.to_string())?;
    if !global.target.tls || global.target.port != 8081 || global.block_size != 1024 {
        return Err(format!("Unexpected global: {:?}", global));
    }
    if global.request_timeout != DEFAULT_REQUEST_TIMEOUT {
        return Err(format!("Expected default timeout: {:?}", global.request_timeout));
    }

    let mut context = RunContext::new(PayloadBuffer::seeded(global.block_size, 1));
    let specs =
        build_workload_specs(&config, &global, &mut context).map_err(|err| err.to_string())?;
    let [reads, writes] = specs.as_slice() else {
        return Err(format!("Expected two specs, got {}", specs.len()));
    };

    if reads.name() != "reads" || reads.id() != 0 || writes.id() != 1 {
        return Err("Specs must be ordered by name with sequential ids".to_owned());
    }
    if reads.duration() != Duration::from_secs(5) {
        return Err(format!("Unexpected override: {:?}", reads.duration()));
    }
    if writes.duration() != Duration::from_secs(10) {
        return Err(format!("Unexpected inherited: {:?}", writes.duration()));
    }
    if writes.concurrency().get() != 4 || writes.block_size() != 1024 {
        return Err(format!("Unexpected writes spec: {:?}", writes));
    }
    if writes.target().to_string() != "https://127.0.0.1:8081/bucket/object" {
        return Err(format!("Unexpected target: {}", writes.target()));
    }
    Ok(())
}

#[test]
fn missing_global_fields_are_rejected() -> Result<(), String> {
    let config = parse_toml(
        r#"
[global]
server = "localhost"
duration = 1

[workloads.reads]
type = "GET"
workers = 1
"#,
    )?;
    match resolve_global(&config) {
        Err(ConfigError::MissingGlobalField { field: "port" }) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn empty_workload_set_is_rejected() -> Result<(), String> {
    let config = parse_toml(
        r#"
[global]
server = "localhost"
port = 80
duration = "1s"
"#,
    )?;
    let global = resolve_global(&config).map_err(|err| err.to_string())?;
    let mut context = RunContext::new(PayloadBuffer::empty());
    match build_workload_specs(&config, &global, &mut context) {
        Err(ConfigError::NoWorkloads) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn zero_workers_are_rejected() -> Result<(), String> {
    let config = parse_toml(
        r#"
[global]
server = "localhost"
port = 80
duration = "1s"

[workloads.idle]
type = "GET"
workers = 0
"#,
    )?;
    let global = resolve_global(&config).map_err(|err| err.to_string())?;
    let mut context = RunContext::new(PayloadBuffer::empty());
    match build_workload_specs(&config, &global, &mut context) {
        Err(ConfigError::ZeroConcurrency { name }) if name == "idle" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn unknown_operation_fails_to_parse() -> Result<(), String> {
    let parsed: Result<ConfigFile, _> = toml::from_str(
        r#"
[workloads.purge]
type = "DELETE"
workers = 1
"#,
    );
    if parsed.is_ok() {
        return Err("Expected DELETE to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn invalid_port_text_is_rejected() -> Result<(), String> {
    match PortValue::Text("http".to_owned()).to_port() {
        Err(ConfigError::InvalidPort { value, .. }) if value == "http" => {}
        other => return Err(format!("Unexpected result: {:?}", other)),
    }
    match PortValue::Number(0).to_port() {
        Err(ConfigError::PortZero) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn parse_duration_units() -> Result<(), String> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("7", Duration::from_secs(7)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input).map_err(|err| err.to_string())?;
        if parsed != expected {
            return Err(format!("{} parsed as {:?}", input, parsed));
        }
    }
    for bad in ["", "fast", "5d", "0s"] {
        if parse_duration_value(bad).is_ok() {
            return Err(format!("Expected '{}' to be rejected", bad));
        }
    }
    Ok(())
}

#[test]
fn explicit_request_timeout_overrides_default() -> Result<(), String> {
    let config = parse_toml(
        r#"
[global]
server = "localhost"
port = 80
duration = "1s"
request_timeout = "250ms"
"#,
    )?;
    let global = resolve_global(&config).map_err(|err| err.to_string())?;
    if global.request_timeout != Duration::from_millis(250) {
        return Err(format!("Unexpected timeout: {:?}", global.request_timeout));
    }
    Ok(())
}
