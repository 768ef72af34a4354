use clap::{ArgAction, Parser};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CONFIG_FILE, DEFAULT_RESULTS_FILE};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    disable_version_flag = true,
    about = "Async HTTP load generator - runs GET/PUT/POST workloads for a fixed duration and reports throughput and latency."
)]
pub struct BlasterArgs {
    /// Workload config file (.toml or .json)
    #[arg(long = "conf", short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Results file path
    #[arg(long = "output", short = 'o', default_value = DEFAULT_RESULTS_FILE)]
    pub results_file: PathBuf,

    /// Mirror log output into <timestamp>-loader.log
    #[arg(long = "log-file", short = 'd')]
    pub log_to_file: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Write a CPU profile (not available in this build; a warning is logged)
    #[arg(short = 'p', long = "cpu-profile")]
    pub cpu_profile: bool,

    /// Dump a heap profile to mem_profile after the run (requires alloc-profiler feature)
    #[arg(short = 'm', long = "mem-profile")]
    pub mem_profile: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
