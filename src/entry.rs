use std::path::Path;

use clap::Parser;
use tracing::{error, info, warn};

use crate::app::{self, RunStatus};
use crate::args::{BlasterArgs, DEFAULT_HEAP_PROFILE_FILE};
use crate::config::{load_config_file, types::ConfigFile};
use crate::error::{AppError, AppResult};
use crate::logger;
use crate::report::{ReportFile, write_report};

/// Parses the command line and performs a full run.
///
/// # Errors
///
/// Returns an error for fatal failures: unreadable or invalid config, an
/// output file that cannot be created or written, or runtime setup failure.
pub fn run() -> AppResult<RunStatus> {
    let args = BlasterArgs::parse();

    let log_file = if args.log_to_file {
        let (_path, file) = logger::create_log_file(Path::new("."))?;
        Some(file)
    } else {
        None
    };
    logger::init_logging(args.verbose, log_file);
    if args.cpu_profile {
        app::warn_cpu_profile_unavailable();
    }

    let config = load_config_file(&args.config).map_err(|err| {
        error!("Failed to parse config file: {}", err);
        AppError::from(err)
    })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args, &config))
}

async fn run_async(args: &BlasterArgs, config: &ConfigFile) -> AppResult<RunStatus> {
    let prepared = app::prepare_run(config)?;
    let report_file = ReportFile::create(&args.results_file).await?;

    let outcome = app::run_workloads(prepared.executors).await;
    app::log_summary(&outcome.report);
    write_report(report_file, &outcome.report).await?;
    if args.mem_profile
        && let Err(err) = app::dump_heap_profile(Path::new(DEFAULT_HEAP_PROFILE_FILE))
    {
        warn!("Heap profile not written: {}", err);
    }

    let status = outcome.status();
    if status == RunStatus::Success {
        info!("Test completed successfully");
    } else {
        for err in &outcome.errors {
            error!("{}", err);
        }
        error!("Test failed with {} workload error(s)", outcome.errors.len());
    }
    Ok(status)
}
