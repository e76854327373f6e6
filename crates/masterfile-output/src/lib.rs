//! Output generation for the masterfile builder.
//!
//! Serializes a filled [`Table`](masterfile_model::Table) to an `.xlsx`
//! workbook, either in memory or on disk.

mod error;
mod xlsx;

pub use error::{OutputError, Result};
pub use xlsx::{
    OUTPUT_FILE_NAME, SHEET_NAME, XLSX_MIME_TYPE, write_workbook, write_workbook_file,
};
