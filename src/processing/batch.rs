use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::config::AnnotatorConfig;
use crate::processing::file::process_file;
use crate::utils::validation::{has_workbook_extension, validate_folder_path, ValidationError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to list folder {}: {source}", .folder.display())]
    List {
        folder: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Aggregate outcome of a folder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub folder: PathBuf,
    /// `.xlsx` files found in the folder
    pub found: usize,
    /// Files whose result sheet was written
    pub succeeded: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.found - self.succeeded
    }

    /// Mean wall time per file; `None` when no files were found
    #[must_use]
    pub fn average_per_file(&self) -> Option<Duration> {
        u32::try_from(self.found)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| self.elapsed / n)
    }
}

/// Regular files directly inside `folder` whose names end in `.xlsx`, sorted by path.
///
/// # Errors
///
/// Returns the I/O error if the folder cannot be read.
pub fn list_workbooks(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_workbook_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Annotate every `.xlsx` file in `folder` against MyVariant.info.
///
/// # Errors
///
/// See [`process_folder_with`].
pub fn process_folder(folder: &Path, config: &AnnotatorConfig) -> Result<BatchSummary, BatchError> {
    process_folder_with(folder, |path| process_file(path, config))
}

/// Run `process` on every `.xlsx` file in `folder`, one at a time, counting successes.
///
/// A failed file never stops the batch.
///
/// # Errors
///
/// Returns `BatchError::Validation` if `folder` is not a directory, or
/// `BatchError::List` if it cannot be read.
pub fn process_folder_with<F>(folder: &Path, mut process: F) -> Result<BatchSummary, BatchError>
where
    F: FnMut(&Path) -> bool,
{
    validate_folder_path(folder)?;
    info!("--- Starting folder annotation for: {} ---", folder.display());

    let start = Instant::now();
    let files = list_workbooks(folder).map_err(|source| BatchError::List {
        folder: folder.to_path_buf(),
        source,
    })?;

    let found = files.len();
    let mut succeeded = 0;

    if found == 0 {
        info!("No .xlsx files found in the specified folder.");
    } else {
        info!("Found {} .xlsx file(s) to process.", found);
        for (i, path) in files.iter().enumerate() {
            info!(
                "Processing file {} of {}: {}",
                i + 1,
                found,
                path.file_name().unwrap_or_default().to_string_lossy()
            );
            if process(path) {
                succeeded += 1;
            }
        }
    }

    Ok(BatchSummary {
        folder: folder.to_path_buf(),
        found,
        succeeded,
        elapsed: start.elapsed(),
    })
}
