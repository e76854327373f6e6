//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

use masterfile_model::TableError;

/// Errors that can occur while reading a spreadsheet into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Spreadsheet file not found.
    #[error("spreadsheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File could not be opened as a workbook.
    #[error("failed to open spreadsheet {origin}: {source}")]
    Open {
        origin: String,
        #[source]
        source: calamine::Error,
    },

    /// Workbook has no worksheets.
    #[error("spreadsheet {origin} has no worksheets")]
    NoWorksheet { origin: String },

    /// Requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {origin} (available: {})", available.join(", "))]
    SheetNotFound {
        origin: String,
        sheet: String,
        available: Vec<String>,
    },

    /// Worksheet cells could not be read.
    #[error("failed to read worksheet in {origin}: {source}")]
    SheetRead {
        origin: String,
        #[source]
        source: calamine::Error,
    },

    /// Cells could not be assembled into a table.
    #[error("invalid table in {origin}: {source}")]
    Table {
        origin: String,
        #[source]
        source: TableError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
