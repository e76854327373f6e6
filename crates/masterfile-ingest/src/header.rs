//! Header row normalization.

use std::collections::{HashMap, HashSet};

/// Prefix given to header cells that are empty.
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

/// Normalizes raw header cells into addressable column names.
///
/// Names are trimmed. An empty cell at position `i` becomes `Unnamed: i`.
/// A repeated name gets a numeric suffix (`Email`, `Email.1`, `Email.2`),
/// skipping suffixes already taken by another header.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let trimmed = value.as_ref().trim();
            if trimmed.is_empty() {
                format!("{UNNAMED_PREFIX}{idx}")
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(names.len());
    for name in names {
        if used.insert(name.clone()) {
            headers.push(name);
            continue;
        }
        let counter = next_suffix.entry(name.clone()).or_insert(1);
        let mut candidate = format!("{name}.{counter}");
        while used.contains(&candidate) {
            *counter += 1;
            candidate = format!("{name}.{counter}");
        }
        *counter += 1;
        used.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}
