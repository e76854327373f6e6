//! Column mapping for the masterfile builder.
//!
//! [`map_columns`] fills every target column from the source column the
//! [`Mapping`](masterfile_model::Mapping) names, or leaves it blank. It never
//! fails: an unmapped target or a missing source column yields an
//! empty-string column with the source's row count.
//!
//! [`plan_columns`] exposes the same per-column resolution for reporting,
//! and [`load_mapping`] / [`parse_mapping`] read mapping files.

mod error;
mod file;
mod plan;

pub use error::{MappingFileError, Result};
pub use file::{load_mapping, parse_mapping};
pub use plan::{ColumnPlan, ColumnSource, MappingPlan, map_columns, plan_columns};
