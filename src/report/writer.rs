use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::ReportError;

use super::{AggregateReport, render_report};

/// Results file created before the run starts, so an unwritable path fails
/// before any load is generated.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
    file: File,
}

impl ReportFile {
    /// Creates (or truncates) the results file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub async fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)
            .await
            .map_err(|err| ReportError::Create {
                path: path.to_path_buf(),
                source: err,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders `report` into the results file and flushes it to disk.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn write_report(mut target: ReportFile, report: &AggregateReport) -> Result<(), ReportError> {
    let rendered = render_report(report)?;
    let write_err = |err| ReportError::Write {
        path: target.path.clone(),
        source: err,
    };
    target
        .file
        .write_all(rendered.as_bytes())
        .await
        .map_err(write_err)?;
    target.file.flush().await.map_err(write_err)?;
    target.file.sync_all().await.map_err(write_err)?;
    Ok(())
}
