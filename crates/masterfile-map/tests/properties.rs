//! Property tests for the column mapper invariants.

use proptest::collection::vec;
use proptest::prelude::*;

use masterfile_map::map_columns;
use masterfile_model::{Column, Mapping, Table};

const NAMES: &[&str] = &["Name", "Email", "Phone", "City", "Zip", "Notes"];

fn column_name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z0-9@. ]{1,12}"]
}

/// Tables with 0..6 columns (names may repeat) and 0..8 rows.
fn table() -> impl Strategy<Value = Table> {
    (0usize..8, vec(column_name(), 0..6)).prop_flat_map(|(rows, names)| {
        let width = names.len();
        vec(vec(cell(), rows), width).prop_map(move |columns| {
            let built: Vec<Column> = names
                .iter()
                .zip(columns)
                .map(|(name, values)| Column::new(name.clone(), values))
                .collect();
            let mut table = Table::new(rows);
            for column in built {
                table.push_column(column).expect("generated columns share a length");
            }
            table
        })
    })
}

fn schema() -> impl Strategy<Value = Vec<String>> {
    vec("[A-Z][a-z]{0,6}( [A-Z][a-z]{0,6})?", 0..6)
}

fn mapping() -> impl Strategy<Value = Mapping> {
    vec(
        ("[A-Z][a-z]{0,6}( [A-Z][a-z]{0,6})?", column_name()),
        0..6,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn empty_mapping_yields_blank_columns(source in table(), targets in schema()) {
        let out = map_columns(&source, &targets, &Mapping::new());
        prop_assert_eq!(out.column_count(), targets.len());
        prop_assert_eq!(out.row_count(), source.row_count());
        for column in out.columns() {
            prop_assert_eq!(column.len(), source.row_count());
            prop_assert!(column.is_blank());
        }
    }

    #[test]
    fn row_count_matches_source(source in table(), targets in schema(), mapping in mapping()) {
        let out = map_columns(&source, &targets, &mapping);
        prop_assert_eq!(out.row_count(), source.row_count());
        prop_assert_eq!(out.column_count(), targets.len());
        let names: Vec<&str> = out.column_names().collect();
        let expected: Vec<&str> = targets.iter().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
        for column in out.columns() {
            prop_assert_eq!(column.len(), source.row_count());
        }
    }

    #[test]
    fn fully_mapped_columns_copy_source(source in table(), targets in schema()) {
        prop_assume!(source.column_count() > 0);
        let sources: Vec<String> = source.column_names().map(str::to_string).collect();
        let mapping: Mapping = targets
            .iter()
            .enumerate()
            .map(|(idx, target)| (target.clone(), sources[idx % sources.len()].clone()))
            .collect();
        let out = map_columns(&source, &targets, &mapping);
        for (idx, column) in out.columns().iter().enumerate() {
            let mapped = mapping.get(&targets[idx]).expect("every target is mapped");
            let expected = source.column(mapped).expect("mapped to an existing column");
            prop_assert_eq!(column.values(), expected.values());
        }
    }

    #[test]
    fn mapping_is_deterministic(source in table(), targets in schema(), mapping in mapping()) {
        let first = map_columns(&source, &targets, &mapping);
        let second = map_columns(&source, &targets, &mapping);
        prop_assert_eq!(first, second);
    }
}
