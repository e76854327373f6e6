//! Target-to-source column name mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maps a target column name to the source column that feeds it.
///
/// Keys are unique. A target without an entry, or whose source names no
/// existing column, is left blank by the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source column name for `target`, if one is mapped.
    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries.get(target).map(String::as_str)
    }

    /// Inserts an entry, returning the previous source for `target`.
    pub fn insert(
        &mut self,
        target: impl Into<String>,
        source: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(target.into(), source.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by target name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(target, source)| (target.as_str(), source.as_str()))
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(target, source)| (target.into(), source.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Mapping {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}
