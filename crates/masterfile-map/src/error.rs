//! Error types for mapping files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or parsing a mapping file.
#[derive(Debug, Error)]
pub enum MappingFileError {
    /// Mapping file could not be read.
    #[error("failed to read mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not valid JSON.
    #[error("invalid mapping JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object.
    #[error("mapping must be a JSON object of target to source column names, found {found}")]
    NotAnObject { found: &'static str },

    /// A mapping value is neither a string nor null.
    #[error("mapping for '{key}' must be a column name string, found {found}")]
    InvalidValue { key: String, found: &'static str },
}

/// Result type for mapping file operations.
pub type Result<T> = std::result::Result<T, MappingFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingFileError::InvalidValue {
            key: "Phone".to_string(),
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "mapping for 'Phone' must be a column name string, found number"
        );
    }
}
