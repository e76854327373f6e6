//! Text-only tables.
//!
//! Every cell is a `String`; a missing cell is the empty string. All columns
//! of a table share the table's row count, which is stored explicitly so a
//! table without columns still knows how many rows it has.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A named column of text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A column of `len` empty strings.
    pub fn blank(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, vec![String::new(); len])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy of this column under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.values.clone())
    }

    /// True when every cell is the empty string.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

/// An ordered collection of named, equal-length text columns.
///
/// Column names need not be unique; lookups by name resolve to the first
/// matching column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates a table with no columns and `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            row_count,
        }
    }

    /// Creates a table with no columns and no rows.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Builds a table from columns, taking the row count from the first one.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnLength`] if the columns differ in length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        let mut table = Self::new(row_count);
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Builds a table from a header and row-major cells.
    ///
    /// Rows shorter than the header are padded with empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowTooWide`] if a row has more cells than the
    /// header has names.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let row_count = rows.len();
        let mut values: Vec<Vec<String>> = (0..width)
            .map(|_| Vec::with_capacity(row_count))
            .collect();
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(TableError::RowTooWide {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            let filled = row.len();
            for (col_idx, cell) in row.into_iter().enumerate() {
                values[col_idx].push(cell);
            }
            for column in values.iter_mut().skip(filled) {
                column.push(String::new());
            }
        }
        let columns = headers
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect();
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// First column named `name`.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnLength`] if the column length differs from
    /// the table's row count.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if column.len() != self.row_count {
            return Err(TableError::ColumnLength {
                column: column.name,
                expected: self.row_count,
                actual: column.values.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builds a table with this table's row count from `(name, source)` pairs.
    ///
    /// Each pair yields one output column, in order: a copy of the first
    /// column named `source`, or a blank column when `source` is `None` or
    /// names no column of `self`.
    pub fn reshape<'a, I>(&self, layout: I) -> Table
    where
        I: IntoIterator<Item = (String, Option<&'a str>)>,
    {
        let columns = layout
            .into_iter()
            .map(|(name, source)| match source.and_then(|s| self.column(s)) {
                Some(column) => column.renamed(name),
                None => Column::blank(name, self.row_count),
            })
            .collect();
        Table {
            columns,
            row_count: self.row_count,
        }
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| column.values[index].as_str())
                .collect(),
        )
    }

    /// Iterates rows in order, each as cells in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count).filter_map(|index| self.row(index))
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}
