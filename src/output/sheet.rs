use std::path::Path;

use serde_json::Value;
use tracing::debug;
use umya_spreadsheet::{Cell, Worksheet};

use crate::core::table::ResultTable;
use crate::parsing::workbook::WorkbookError;

/// Write `table` into the workbook at `path` as sheet `sheet_name`.
///
/// An existing sheet with that name is replaced; all other sheets are kept.
/// The workbook is saved back to `path`.
///
/// # Errors
///
/// Returns `WorkbookError::Write` if the workbook cannot be opened, modified or saved.
pub fn write_result_sheet(
    path: &Path,
    sheet_name: &str,
    table: &ResultTable,
) -> Result<(), WorkbookError> {
    let mut book = umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| WorkbookError::Write(format!("cannot open {}: {e}", path.display())))?;

    if book.get_sheet_by_name(sheet_name).is_some() {
        debug!("Replacing existing sheet '{}'", sheet_name);
        book.remove_sheet_by_name(sheet_name)
            .map_err(|e| WorkbookError::Write(e.to_string()))?;
    }

    let sheet = book
        .new_sheet(sheet_name)
        .map_err(|e| WorkbookError::Write(e.to_string()))?;
    fill_sheet(sheet, table)?;

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| WorkbookError::Write(format!("cannot save {}: {e}", path.display())))
}

/// Header in row 1, data from row 2; coordinates are 1-based (column, row)
fn fill_sheet(sheet: &mut Worksheet, table: &ResultTable) -> Result<(), WorkbookError> {
    for (col, name) in table.columns.iter().enumerate() {
        sheet
            .get_cell_mut((coordinate(col)?, 1))
            .set_value_string(name.as_str());
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = coordinate(row_idx + 1)?;
        for (col, value) in row.iter().enumerate() {
            if value.is_null() {
                continue;
            }
            write_value(sheet.get_cell_mut((coordinate(col)?, row_num)), value);
        }
    }

    Ok(())
}

fn coordinate(index: usize) -> Result<u32, WorkbookError> {
    u32::try_from(index + 1)
        .map_err(|_| WorkbookError::Write(format!("sheet position {index} out of range")))
}

fn write_value(cell: &mut Cell, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            cell.set_value_bool(*b);
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                cell.set_value_number(f);
            }
            None => {
                cell.set_value_string(n.to_string());
            }
        },
        Value::String(s) => {
            cell.set_value_string(s.as_str());
        }
        Value::Array(_) | Value::Object(_) => {
            cell.set_value_string(value.to_string());
        }
    }
}
