//! XLSX workbook writer.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use tracing::debug;

use masterfile_model::Table;

use crate::error::{OutputError, Result};

/// File name given to the filled masterfile.
pub const OUTPUT_FILE_NAME: &str = "final_masterfile_real.xlsx";

/// MIME type of the filled masterfile.
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single worksheet in the output workbook.
pub const SHEET_NAME: &str = "Sheet1";

/// Excel's hard worksheet limits (header row included).
const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// Serializes a table to `.xlsx` bytes.
///
/// The worksheet has a bold header row with the column names, then one row
/// per table row. Empty cells are left blank.
pub fn write_workbook(table: &Table) -> Result<Vec<u8>> {
    if table.row_count() + 1 > MAX_ROWS || table.column_count() > MAX_COLUMNS {
        return Err(OutputError::TooLarge {
            rows: table.row_count(),
            columns: table.column_count(),
        });
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    let header_format = Format::new().set_bold();

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = col_idx as ColNum;
        worksheet.write_string_with_format(0, col, column.name(), &header_format)?;
        for (row_idx, value) in column.values().iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string((row_idx + 1) as RowNum, col, value)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        bytes = bytes.len(),
        "serialized workbook"
    );
    Ok(bytes)
}

/// Serializes a table and writes it to `path`, creating parent directories.
pub fn write_workbook_file(table: &Table, path: &Path) -> Result<()> {
    let bytes = write_workbook(table)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
