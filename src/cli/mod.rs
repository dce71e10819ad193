//! Command-line interface for cgi-annotator.
//!
//! Exactly one of `--file` or `--folder` is required.
//!
//! ## Usage
//!
//! ```text
//! # Annotate one workbook in place
//! cgi-annotator --file cohort.xlsx
//!
//! # Annotate every .xlsx file in a folder (not recursive)
//! cgi-annotator --folder results/
//!
//! # Machine-readable summary
//! cgi-annotator --folder results/ --format json
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::DEFAULT_API_URL;

pub mod annotate;

#[derive(Parser)]
#[command(name = "cgi-annotator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(
    about = "Annotate Excel files (.xlsx) with CGI data from MyVariant.info. Provide either a single file using --file or a folder using --folder."
)]
#[command(
    long_about = "cgi-annotator reads the 'Genomic Alteration' column of each workbook, looks every variant up on MyVariant.info, and writes the Cancer Genome Interpreter annotations back into the same workbook as a 'CGI_Annotated' sheet.\n\nLookups that fail are retried, then skipped; files that fail are reported and skipped."
)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "folder"])))]
pub struct Cli {
    /// Path to a single input Excel file (.xlsx)
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to a folder containing .xlsx files to be processed
    #[arg(long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// MyVariant.info API root
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout: u64,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
