use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::annotation::client::MyVariantClient;
use crate::annotation::{AnnotationSource, FetchError, Fetcher};
use crate::config::AnnotatorConfig;
use crate::core::table::{OutputRow, ResultTable};
use crate::output::sheet::write_result_sheet;
use crate::parsing::variant::split_variant;
use crate::parsing::workbook::{read_identifier_column, WorkbookError};
use crate::utils::validation::{validate_workbook_path, ValidationError};

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error reading Excel file {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: WorkbookError,
    },

    #[error("Column '{column}' not found in {file}")]
    MissingColumn { file: String, column: String },

    #[error("Could not create annotation client for {file}: {source}")]
    Client {
        file: String,
        #[source]
        source: FetchError,
    },

    #[error("No variants with annotation data found or processed successfully in {0}")]
    NoAnnotations(String),

    #[error("No unique annotated variants to write for {0} after deduplication")]
    NoUniqueRows(String),

    #[error("Error writing to Excel file {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: WorkbookError,
    },
}

/// What happened while annotating one workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub file: PathBuf,
    /// Data rows in the input sheet
    pub rows_read: usize,
    /// Rows skipped for a blank or non-text identifier
    pub rows_skipped: usize,
    /// Identifiers sent to the annotation service
    pub lookups: usize,
    /// Lookups that failed after retries
    pub lookup_failures: usize,
    /// Lookups without annotation data
    pub not_found: usize,
    /// Rows written to the output sheet, after deduplication
    pub rows_written: usize,
}

/// Display name of a path for log messages
fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// Annotate one workbook with an already-constructed annotation source.
///
/// # Errors
///
/// See [`annotate_file_with`].
pub fn annotate_file<S: AnnotationSource>(
    path: &Path,
    config: &AnnotatorConfig,
    source: S,
) -> Result<FileReport, AnnotateError> {
    annotate_file_with(path, config, move |_| Ok(source))
}

/// Annotate one workbook, connecting to the annotation service with `connect`.
///
/// Steps, each of which can end the run for this file:
///
/// 1. `path` must exist and end in `.xlsx`
/// 2. `connect` builds the source used for every lookup in this file
/// 3. the first worksheet must be readable and contain the identifier column
/// 4. every text identifier is parsed and looked up; failures skip only that row
/// 5. at least one annotated row must remain after deduplication
/// 6. the rows are written as the result sheet of the same workbook
///
/// # Errors
///
/// Returns the [`AnnotateError`] for the step that stopped processing.
pub fn annotate_file_with<S, F>(
    path: &Path,
    config: &AnnotatorConfig,
    connect: F,
) -> Result<FileReport, AnnotateError>
where
    S: AnnotationSource,
    F: FnOnce(&AnnotatorConfig) -> Result<S, FetchError>,
{
    validate_workbook_path(path)?;

    let file = file_label(path);
    info!("Processing file: {} ...", file);

    let source = connect(config).map_err(|source| AnnotateError::Client {
        file: file.clone(),
        source,
    })?;
    let fetcher = Fetcher::new(source, config.retry);

    let cells = read_identifier_column(path, &config.identifier_column).map_err(|e| match e {
        WorkbookError::MissingColumn(column) => AnnotateError::MissingColumn {
            file: file.clone(),
            column,
        },
        source => AnnotateError::Read {
            file: file.clone(),
            source,
        },
    })?;

    let mut report = FileReport {
        file: path.to_path_buf(),
        rows_read: cells.len(),
        ..FileReport::default()
    };
    let mut rows = Vec::new();

    for cell in &cells {
        let Some(variant) = cell.as_text() else {
            report.rows_skipped += 1;
            continue;
        };

        let parsed = split_variant(variant);
        report.lookups += 1;

        match fetcher.fetch_with_retry(variant) {
            Ok(Some(payload)) => {
                let base = OutputRow::for_variant(variant, &parsed);
                rows.extend(
                    payload
                        .into_records()
                        .iter()
                        .map(|record| base.with_record(record)),
                );
            }
            Ok(None) => report.not_found += 1,
            Err(e) => {
                report.lookup_failures += 1;
                warn!(
                    "Error processing variant {} from {}: {}. Skipping variant.",
                    variant, file, e
                );
            }
        }
    }

    if rows.is_empty() {
        return Err(AnnotateError::NoAnnotations(file));
    }

    let mut table = ResultTable::from_rows(&rows);
    table.dedup();
    if table.is_empty() {
        return Err(AnnotateError::NoUniqueRows(file));
    }

    write_result_sheet(path, &config.sheet_name, &table).map_err(|source| {
        AnnotateError::Write {
            file: file.clone(),
            source,
        }
    })?;
    report.rows_written = table.len();

    info!(
        "Annotated variants written to '{}' sheet in {} ({} rows).",
        config.sheet_name, file, report.rows_written
    );

    Ok(report)
}

/// Annotate one workbook against MyVariant.info, logging the outcome.
///
/// Returns `true` if the result sheet was written.
#[must_use]
pub fn process_file(path: &Path, config: &AnnotatorConfig) -> bool {
    process_file_with(path, config, MyVariantClient::new)
}

/// [`process_file`] with a caller-supplied connector.
#[must_use]
pub fn process_file_with<S, F>(path: &Path, config: &AnnotatorConfig, connect: F) -> bool
where
    S: AnnotationSource,
    F: FnOnce(&AnnotatorConfig) -> Result<S, FetchError>,
{
    let start = Instant::now();
    let result = annotate_file_with(path, config, connect);
    let file = file_label(path);

    match result {
        Ok(report) => {
            info!(
                "Time taken for {}: {}.",
                file,
                format_seconds(start.elapsed())
            );
            debug!(
                "{}: {} rows read, {} skipped, {} looked up, {} not found, {} failed",
                file,
                report.rows_read,
                report.rows_skipped,
                report.lookups,
                report.not_found,
                report.lookup_failures
            );
            true
        }
        Err(e @ AnnotateError::Validation(_)) => {
            error!("Error: {e}");
            false
        }
        Err(e) => {
            error!("{e}");
            info!(
                "Time taken for {}: {} (no data written).",
                file,
                format_seconds(start.elapsed())
            );
            false
        }
    }
}

/// `1.23 seconds`
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2} seconds", duration.as_secs_f64())
}
