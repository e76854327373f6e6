//! Mapping file loading.
//!
//! A mapping file is a flat JSON object: `{"<target column>": "<source column>"}`.
//! `null` values mark a target as deliberately unmapped and are dropped.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use masterfile_model::Mapping;

use crate::error::{MappingFileError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads and parses a mapping file.
pub fn load_mapping(path: &Path) -> Result<Mapping> {
    let bytes = fs::read(path).map_err(|source| MappingFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping = parse_mapping(&bytes)?;
    debug!(
        path = %path.display(),
        entries = mapping.len(),
        "loaded mapping"
    );
    Ok(mapping)
}

/// Parses mapping JSON from raw bytes.
///
/// When a key repeats, the last occurrence wins.
pub fn parse_mapping(bytes: &[u8]) -> Result<Mapping> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value = serde_json::from_slice(bytes)?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(MappingFileError::NotAnObject {
                found: value_kind(&other),
            });
        }
    };
    let mut mapping = Mapping::new();
    for (key, value) in object {
        match value {
            Value::String(source) => {
                mapping.insert(key, source);
            }
            Value::Null => {}
            other => {
                return Err(MappingFileError::InvalidValue {
                    key,
                    found: value_kind(&other),
                });
            }
        }
    }
    Ok(mapping)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
