use std::path::Path;

use calamine::{open_workbook, DataType, Reader, Xlsx};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("failed to open workbook: {0}")]
    Open(#[from] calamine::XlsxError),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("worksheet has no header row")]
    NoHeader,

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("failed to write workbook: {0}")]
    Write(String),
}

/// One cell of the identifier column, classified the way the row loop needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierCell {
    /// A non-empty text cell
    Text(String),
    /// An empty cell
    Blank,
    /// A number, boolean, date or error cell
    Other,
}

impl IdentifierCell {
    /// The identifier, if the cell holds one
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Blank | Self::Other => None,
        }
    }
}

impl From<&DataType> for IdentifierCell {
    fn from(cell: &DataType) -> Self {
        match cell {
            DataType::String(s) if s.is_empty() => Self::Blank,
            DataType::String(s) => Self::Text(s.clone()),
            DataType::Empty => Self::Blank,
            _ => Self::Other,
        }
    }
}

fn header_name(cell: &DataType) -> Option<&str> {
    match cell {
        DataType::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Read every data row's value from `column` on the first worksheet of an `.xlsx` file.
///
/// The first row of the sheet is the header. Rows shorter than the header yield
/// [`IdentifierCell::Blank`].
///
/// # Errors
///
/// Returns `WorkbookError::Open` if the file is not a readable workbook,
/// `WorkbookError::NoWorksheet`/`NoHeader` for empty workbooks, or
/// `WorkbookError::MissingColumn` when no header cell equals `column`.
pub fn read_identifier_column(
    path: &Path,
    column: &str,
) -> Result<Vec<IdentifierCell>, WorkbookError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(WorkbookError::NoWorksheet)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(WorkbookError::NoHeader)?;
    let index = header
        .iter()
        .position(|cell| header_name(cell) == Some(column))
        .ok_or_else(|| WorkbookError::MissingColumn(column.to_string()))?;

    let cells: Vec<IdentifierCell> = rows
        .map(|row| row.get(index).map_or(IdentifierCell::Blank, IdentifierCell::from))
        .collect();

    debug!(
        "Read {} rows from column '{}' of {}",
        cells.len(),
        column,
        path.display()
    );

    Ok(cells)
}
