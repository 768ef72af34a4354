use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. With `log_file`, every line is written to
/// stdout and mirrored into the file.
pub fn init_logging(verbose: bool, log_file: Option<File>) {
    let filter = std::env::var("BLASTER_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let builder = FmtSubscriber::builder().with_env_filter(filter);
    let result = match log_file {
        Some(file) => {
            let subscriber = builder
                .with_ansi(false)
                .with_writer(std::io::stdout.and(Arc::new(file)))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        None => tracing::subscriber::set_global_default(builder.finish()),
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Creates `<YYYY-MM-DD-HH-MM-SS>-loader.log` inside `dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn create_log_file(dir: &Path) -> std::io::Result<(PathBuf, File)> {
    let name = format!(
        "{}-loader.log",
        chrono::Local::now().format("%Y-%m-%d-%H-%M-%S")
    );
    let path = dir.join(name);
    let file = File::create(&path)?;
    Ok((path, file))
}
