//! Spreadsheet ingestion for the masterfile builder.
//!
//! Reads one worksheet of an Excel or OpenDocument workbook into a
//! text-only [`Table`](masterfile_model::Table).
//!
//! # Features
//!
//! - **Formats**: `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods` (via `calamine`)
//! - **Text cells**: numbers, booleans and dates are rendered as strings;
//!   empty cells become `""`
//! - **Headers**: first row of the used range; blanks become `Unnamed: N`,
//!   repeats become `Name.1`, `Name.2`, ...
//! - **Target schema**: header names of a template, ignoring its data
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use masterfile_ingest::{IngestOptions, read_table, read_target_schema};
//!
//! let options = IngestOptions::default();
//! let onboarding = read_table(Path::new("onboarding_real1.xlsx"), &options)?;
//! let schema = read_target_schema(Path::new("masterfile_real1.xlsx"), &options)?;
//! ```

mod cell;
mod error;
mod header;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Worksheet Reading ===
pub use reader::{
    IngestOptions, SheetSelector, read_table, read_table_from_bytes, read_target_schema,
    read_target_schema_from_bytes,
};

// === Cell and Header Normalization ===
pub use cell::{cell_to_text, format_datetime, format_number};
pub use header::{UNNAMED_PREFIX, normalize_headers};
