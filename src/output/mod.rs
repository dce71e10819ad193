//! Writing annotation results back into the source workbook.

pub mod sheet;
