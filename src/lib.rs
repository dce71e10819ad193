//! # cgi-annotator
//!
//! Annotates genomic alterations listed in `.xlsx` workbooks with Cancer Genome
//! Interpreter (CGI) data from [MyVariant.info](https://myvariant.info).
//!
//! Each workbook's first sheet must have a `Genomic Alteration` column holding
//! genomic HGVS-like identifiers such as `chr1:g.243777040G>T`. Every identifier is
//! split into chromosome, position and alleles, looked up remotely, and joined with
//! each returned annotation record. The deduplicated rows are written back into the
//! same workbook as a `CGI_Annotated` sheet; other sheets are left alone.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cgi_annotator::{process_file, AnnotatorConfig};
//! use std::path::Path;
//!
//! let config = AnnotatorConfig::default();
//! if process_file(Path::new("cohort.xlsx"), &config) {
//!     println!("annotated");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`parsing`]: Variant identifier parser and workbook reader
//! - [`annotation`]: MyVariant.info client and retry policy
//! - [`core`]: Output rows and the deduplicated result table
//! - [`output`]: Result sheet writer
//! - [`processing`]: File processor and folder batch runner
//! - [`cli`]: Command-line interface implementation

pub mod annotation;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod parsing;
pub mod processing;
pub mod utils;

// Re-export commonly used types for convenience
pub use annotation::{AnnotationPayload, AnnotationSource, FetchError};
pub use config::AnnotatorConfig;
pub use core::table::{OutputRow, ResultTable};
pub use parsing::variant::{split_variant, ParsedVariant};
pub use processing::{process_file, process_folder, BatchSummary};
