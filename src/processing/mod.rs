//! Per-file annotation and the folder batch runner.
//!
//! Row failures never abort a file and file failures never abort a folder:
//!
//! | Scope | Failure | Effect |
//! |-------|---------|--------|
//! | Row | blank or non-text identifier | row skipped |
//! | Row | lookup failed after retries | row skipped, warning logged |
//! | Row | no annotation data | row skipped |
//! | File | missing, not `.xlsx`, unreadable, no identifier column | file fails, nothing written |
//! | File | no annotated rows | file fails, nothing written |
//! | File | result sheet cannot be written | file fails |
//! | Folder | no `.xlsx` files | empty summary |

pub mod batch;
pub mod file;

pub use batch::{process_folder, process_folder_with, BatchError, BatchSummary};
pub use file::{annotate_file, annotate_file_with, process_file, AnnotateError, FileReport};
