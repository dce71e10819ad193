//! Parsers for the tool's two inputs.
//!
//! - **Variant identifiers**: genomic HGVS-like strings such as `chr1:g.243777040G>T`
//! - **Workbooks**: the identifier column of the first worksheet of an `.xlsx` file
//!
//! ## Example
//!
//! ```rust
//! use cgi_annotator::parsing::variant::split_variant;
//!
//! let parsed = split_variant("chr7:g.140453136_140453136del");
//! assert_eq!(parsed.chrom_pos, "chr7:g.140453136_140453136");
//! assert_eq!(parsed.reference, "");
//! assert_eq!(parsed.alternate, "del");
//!
//! let locus = parsed.locus();
//! assert_eq!(locus.chrom, "chr7");
//! assert_eq!(locus.pos, "140453136_140453136");
//! ```

pub mod variant;
pub mod workbook;
