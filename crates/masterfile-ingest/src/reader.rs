//! Worksheet reading.

use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::time::Instant;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use tracing::debug;

use masterfile_model::Table;

use crate::cell::cell_to_text;
use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

/// Label used in errors for workbooks read from memory.
const MEMORY_ORIGIN: &str = "<memory>";

/// Which worksheet of a workbook to read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelector {
    /// The first worksheet in workbook order.
    #[default]
    First,
    /// The worksheet with this exact name.
    Named(String),
}

/// Options for reading a worksheet.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub sheet: SheetSelector,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }
}

/// Reads a worksheet into a text-only table.
///
/// The first row of the used range is the header; every later row is data.
/// Trailing empty rows are dropped.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    let start = Instant::now();
    let origin = path.display().to_string();
    let range = open_path(path, options)?;
    let table = range_to_table(&range, &origin)?;
    debug!(
        path = %origin,
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "read worksheet"
    );
    Ok(table)
}

/// Reads a worksheet from an in-memory workbook.
pub fn read_table_from_bytes(bytes: Vec<u8>, options: &IngestOptions) -> Result<Table> {
    let range = open_bytes(bytes, options)?;
    range_to_table(&range, MEMORY_ORIGIN)
}

/// Reads only the header names of a worksheet, in order.
pub fn read_target_schema(path: &Path, options: &IngestOptions) -> Result<Vec<String>> {
    let range = open_path(path, options)?;
    let headers = header_of(&range);
    debug!(
        path = %path.display(),
        columns = headers.len(),
        "read target schema"
    );
    Ok(headers)
}

/// Reads only the header names of an in-memory workbook.
pub fn read_target_schema_from_bytes(
    bytes: Vec<u8>,
    options: &IngestOptions,
) -> Result<Vec<String>> {
    let range = open_bytes(bytes, options)?;
    Ok(header_of(&range))
}

fn open_path(path: &Path, options: &IngestOptions) -> Result<Range<Data>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let origin = path.display().to_string();
    let workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
        origin: origin.clone(),
        source,
    })?;
    select_sheet(workbook, &options.sheet, &origin)
}

fn open_bytes(bytes: Vec<u8>, options: &IngestOptions) -> Result<Range<Data>> {
    let workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| IngestError::Open {
            origin: MEMORY_ORIGIN.to_string(),
            source,
        })?;
    select_sheet(workbook, &options.sheet, MEMORY_ORIGIN)
}

fn select_sheet<RS>(
    mut workbook: Sheets<RS>,
    selector: &SheetSelector,
    origin: &str,
) -> Result<Range<Data>>
where
    RS: Read + Seek,
{
    let range = match selector {
        SheetSelector::First => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngestError::NoWorksheet {
                origin: origin.to_string(),
            })?,
        SheetSelector::Named(name) => {
            let available = workbook.sheet_names();
            if !available.iter().any(|sheet| sheet == name) {
                return Err(IngestError::SheetNotFound {
                    origin: origin.to_string(),
                    sheet: name.clone(),
                    available,
                });
            }
            workbook.worksheet_range(name)
        }
    };
    range.map_err(|source| IngestError::SheetRead {
        origin: origin.to_string(),
        source,
    })
}

/// Header positions count from the first column of the used range, not column A.
fn header_of(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .next()
        .map(|row| normalize_headers(row.iter().map(cell_to_text)))
        .unwrap_or_default()
}

fn range_to_table(range: &Range<Data>, origin: &str) -> Result<Table> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Table::empty());
    };
    let headers = normalize_headers(header_row.iter().map(cell_to_text));
    let mut body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();
    while body
        .last()
        .is_some_and(|row| row.iter().all(String::is_empty))
    {
        body.pop();
    }
    Table::from_rows(headers, body).map_err(|source| IngestError::Table {
        origin: origin.to_string(),
        source,
    })
}
