//! Core data types for annotation output.
//!
//! - [`table::OutputRow`]: one input variant joined with one annotation record
//! - [`table::ResultTable`]: rows aligned on a shared column set, deduplicated before writing
//!
//! ## Output columns
//!
//! | Column | Content |
//! |--------|---------|
//! | `input_variant` | Identifier as read from the input sheet |
//! | `chrom` | Chromosome, e.g. `chr1` |
//! | `Pos` | Position or range, `g.` prefix removed |
//! | `ref` | Reference allele, or `CNA` for copy-number ranges |
//! | `alt` | Alternate allele, or `del`/`dup` |
//! | ... | Annotation fields, nested keys joined with `.` |

pub mod table;
