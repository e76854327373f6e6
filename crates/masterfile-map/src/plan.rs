//! Target column resolution and the column mapper.

use std::collections::BTreeSet;

use tracing::debug;

use masterfile_model::{Mapping, Table};

/// Where a target column takes its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Copied from the named source column.
    Mapped(String),
    /// No mapping entry, or an empty source name. Filled with blanks.
    Unmapped,
    /// Mapping names a column the source table does not have. Filled with blanks.
    MissingSource(String),
}

impl ColumnSource {
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }

    /// Source column name, when one is mapped.
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::Mapped(name) => Some(name.as_str()),
            Self::Unmapped | Self::MissingSource(_) => None,
        }
    }
}

/// Resolution of one target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    pub target: String,
    pub source: ColumnSource,
}

/// Per-target resolution for a whole target schema, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPlan {
    columns: Vec<ColumnPlan>,
    unused_keys: Vec<String>,
}

impl MappingPlan {
    pub fn columns(&self) -> &[ColumnPlan] {
        &self.columns
    }

    /// Mapping keys that name no target column, in key order.
    pub fn unused_keys(&self) -> &[String] {
        &self.unused_keys
    }

    pub fn mapped_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|plan| plan.source.is_mapped())
            .count()
    }

    /// Target columns that will be left blank.
    pub fn blank_count(&self) -> usize {
        self.columns.len() - self.mapped_count()
    }

    /// Builds the output table from `source`.
    ///
    /// The result has one column per planned target, in order, and exactly
    /// `source.row_count()` rows.
    pub fn apply(&self, source: &Table) -> Table {
        for plan in &self.columns {
            match &plan.source {
                ColumnSource::Mapped(name) => {
                    debug!(target_column = %plan.target, source_column = %name, "mapped column");
                }
                ColumnSource::Unmapped => {
                    debug!(target_column = %plan.target, "unmapped column left blank");
                }
                ColumnSource::MissingSource(name) => {
                    debug!(
                        target_column = %plan.target,
                        source_column = %name,
                        "source column not found, left blank"
                    );
                }
            }
        }
        source.reshape(
            self.columns
                .iter()
                .map(|plan| (plan.target.clone(), plan.source.source_name())),
        )
    }
}

/// Resolves every target column against the mapping and the source columns.
pub fn plan_columns(source: &Table, target_schema: &[String], mapping: &Mapping) -> MappingPlan {
    let columns = target_schema
        .iter()
        .map(|target| {
            let source_column = match mapping.get(target) {
                Some(name) if name.is_empty() => ColumnSource::Unmapped,
                Some(name) if source.contains_column(name) => {
                    ColumnSource::Mapped(name.to_string())
                }
                Some(name) => ColumnSource::MissingSource(name.to_string()),
                None => ColumnSource::Unmapped,
            };
            ColumnPlan {
                target: target.clone(),
                source: source_column,
            }
        })
        .collect();
    let targets: BTreeSet<&str> = target_schema.iter().map(String::as_str).collect();
    let unused_keys = mapping
        .targets()
        .filter(|key| !targets.contains(key))
        .map(str::to_string)
        .collect();
    MappingPlan {
        columns,
        unused_keys,
    }
}

/// Fills the target schema from `source` using `mapping`.
///
/// For each target name, in order, the output column is a copy of the
/// source column the mapping names, or a column of empty strings when the
/// target is unmapped, mapped to an empty name, or mapped to a column the
/// source lacks. The output always has `target_schema.len()` columns and
/// `source.row_count()` rows. Duplicate target names are kept positionally
/// and each is filled independently.
pub fn map_columns(source: &Table, target_schema: &[String], mapping: &Mapping) -> Table {
    plan_columns(source, target_schema, mapping).apply(source)
}
