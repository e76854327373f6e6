use std::path::PathBuf;

use thiserror::Error;

/// Errors from serializing or writing a workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("table has {rows} rows and {columns} columns, beyond the worksheet limits")]
    TooLarge { rows: usize, columns: usize },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
