//! Data model for the masterfile builder.
//!
//! - [`Table`]: ordered, named, equal-length text columns
//! - [`Mapping`]: target column name to source column name

pub mod error;
pub mod mapping;
pub mod table;

pub use error::{Result, TableError};
pub use mapping::Mapping;
pub use table::{Column, Table};
