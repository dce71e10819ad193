use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::config::AnnotatorConfig;
use crate::processing::batch::{process_folder, BatchSummary};
use crate::processing::file::{format_seconds, process_file};

impl Cli {
    /// Run configuration from the command-line options
    #[must_use]
    pub fn config(&self) -> AnnotatorConfig {
        AnnotatorConfig::default()
            .with_api_url(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

/// Execute the annotation run selected on the command line.
///
/// Per-file and per-folder failures are reported on the console, not returned.
///
/// # Errors
///
/// Returns an error only if the JSON summary cannot be serialized.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = cli.config();

    if let Some(path) = &cli.file {
        run_file(path, &config, cli.format)?;
    } else if let Some(folder) = &cli.folder {
        run_folder(folder, &config, cli.format)?;
    }

    if matches!(cli.format, OutputFormat::Text) {
        println!(
            "\n--- Total Script Execution Time: {} ---",
            format_seconds(start.elapsed())
        );
    }

    Ok(())
}

fn run_file(path: &Path, config: &AnnotatorConfig, format: OutputFormat) -> anyhow::Result<()> {
    if matches!(format, OutputFormat::Text) {
        println!("--- Starting single file annotation ---");
    }

    let success = process_file(path, config);

    if matches!(format, OutputFormat::Json) {
        let output = serde_json::json!({
            "file": path.display().to_string(),
            "success": success,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn run_folder(folder: &Path, config: &AnnotatorConfig, format: OutputFormat) -> anyhow::Result<()> {
    match process_folder(folder, config) {
        Ok(summary) => match format {
            OutputFormat::Text => print_text_summary(&summary),
            OutputFormat::Json => print_json_summary(&summary)?,
        },
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}

fn print_text_summary(summary: &BatchSummary) {
    println!(
        "\n--- Folder Annotation Summary for '{}' ---",
        summary.folder.display()
    );
    println!("Total .xlsx files found: {}", summary.found);
    println!(
        "Files successfully processed/annotated: {}",
        summary.succeeded
    );
    println!(
        "Total time taken for folder processing: {}.",
        format_seconds(summary.elapsed)
    );
    if let Some(avg) = summary.average_per_file() {
        println!(
            "Average time per file (overall for folder): {}.",
            format_seconds(avg)
        );
    }
}

/// JSON form of a folder summary
#[derive(Serialize)]
struct JsonSummary {
    folder: String,
    found: usize,
    succeeded: usize,
    failed: usize,
    elapsed_seconds: f64,
    average_seconds_per_file: Option<f64>,
}

impl From<&BatchSummary> for JsonSummary {
    fn from(summary: &BatchSummary) -> Self {
        Self {
            folder: summary.folder.display().to_string(),
            found: summary.found,
            succeeded: summary.succeeded,
            failed: summary.failed(),
            elapsed_seconds: summary.elapsed.as_secs_f64(),
            average_seconds_per_file: summary.average_per_file().map(|d| d.as_secs_f64()),
        }
    }
}

fn print_json_summary(summary: &BatchSummary) -> anyhow::Result<()> {
    let output = JsonSummary::from(summary);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
