//! End-to-end tests for the build pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use masterfile_cli::pipeline::{
    BuildRequest, DEFAULT_MAPPING, DEFAULT_ONBOARDING, DEFAULT_TEMPLATE, InputFiles, ParseFailure,
    PipelineError, run_build,
};
use masterfile_ingest::{IngestError, IngestOptions, read_table};
use masterfile_map::{ColumnSource, MappingFileError};
use masterfile_model::Table;
use masterfile_output::{OUTPUT_FILE_NAME, write_workbook_file};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn write_sheet(path: &Path, headers: &[&str], rows: &[&[&str]]) -> Result<()> {
    let table = Table::from_rows(
        strings(headers),
        rows.iter().map(|row| strings(row)).collect(),
    )?;
    write_workbook_file(&table, path)?;
    Ok(())
}

/// Writes the three fixed-name inputs into `dir`.
fn write_local_inputs(dir: &Path, mapping: &str) -> Result<()> {
    write_sheet(
        &dir.join(DEFAULT_ONBOARDING),
        &["Name", "Email"],
        &[&["Ann", "a@x.com"], &["Bo", "b@x.com"]],
    )?;
    write_sheet(
        &dir.join(DEFAULT_TEMPLATE),
        &["Full Name", "Contact", "Phone"],
        &[],
    )?;
    fs::write(dir.join(DEFAULT_MAPPING), mapping)?;
    Ok(())
}

fn column<'a>(table: &'a Table, name: &str) -> &'a [String] {
    table.column(name).expect("column present").values()
}

#[test]
fn local_mode_writes_filled_masterfile() -> Result<()> {
    let dir = TempDir::new()?;
    write_local_inputs(
        dir.path(),
        r#"{"Full Name": "Name", "Contact": "Email", "Fax": "Fax"}"#,
    )?;

    let inputs = InputFiles::local(dir.path())?;
    let outcome = run_build(&BuildRequest::new(inputs, dir.path()))?;

    let output = dir.path().join(OUTPUT_FILE_NAME);
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
    assert_eq!(outcome.plan.mapped_count(), 2);
    assert_eq!(outcome.plan.blank_count(), 1);
    assert_eq!(outcome.plan.unused_keys(), strings(&["Fax"]));

    let written = read_table(&output, &IngestOptions::default())?;
    assert_eq!(
        written.column_names().collect::<Vec<_>>(),
        vec!["Full Name", "Contact", "Phone"]
    );
    assert_eq!(column(&written, "Full Name"), strings(&["Ann", "Bo"]));
    assert_eq!(column(&written, "Contact"), strings(&["a@x.com", "b@x.com"]));
    assert_eq!(column(&written, "Phone"), strings(&["", ""]));
    Ok(())
}

#[test]
fn missing_local_files_are_listed() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(DEFAULT_MAPPING), "{}")?;

    let err = InputFiles::local(dir.path()).unwrap_err();
    match err {
        PipelineError::MissingFile { dir: reported, missing } => {
            assert_eq!(reported, dir.path());
            assert_eq!(missing, strings(&[DEFAULT_ONBOARDING, DEFAULT_TEMPLATE]));
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn explicit_mode_requires_all_inputs() {
    let err = InputFiles::explicit(None, Some(PathBuf::from("t.xlsx")), None).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::UploadIncomplete { ref missing } if *missing == strings(&["onboarding", "mapping"])
    ));
}

#[test]
fn malformed_mapping_is_parse_failure() -> Result<()> {
    let dir = TempDir::new()?;
    write_local_inputs(dir.path(), "{not json")?;

    let inputs = InputFiles::local(dir.path())?;
    let err = run_build(&BuildRequest::new(inputs, dir.path())).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::ParseFailure(ParseFailure::Mapping(MappingFileError::Json(_)))
    ));
    assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
    Ok(())
}

#[test]
fn non_spreadsheet_source_is_parse_failure() -> Result<()> {
    let dir = TempDir::new()?;
    write_local_inputs(dir.path(), "{}")?;
    fs::write(dir.path().join(DEFAULT_ONBOARDING), "plain text")?;

    let inputs = InputFiles::local(dir.path())?;
    let err = run_build(&BuildRequest::new(inputs, dir.path())).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::ParseFailure(ParseFailure::Spreadsheet(IngestError::Open { .. }))
    ));
    Ok(())
}

#[test]
fn explicit_mode_with_custom_output_and_missing_source_column() -> Result<()> {
    let dir = TempDir::new()?;
    let onboarding = dir.path().join("people.xlsx");
    let template = dir.path().join("template.xlsx");
    let mapping = dir.path().join("map.json");
    write_sheet(&onboarding, &["Name"], &[&["Ann"]])?;
    write_sheet(&template, &["Full Name", "Contact"], &[])?;
    fs::write(&mapping, r#"{"Full Name": "Name", "Contact": "DoesNotExist"}"#)?;

    let inputs = InputFiles::explicit(Some(onboarding), Some(template), Some(mapping))?;
    let mut request = BuildRequest::new(inputs, dir.path());
    request.output = dir.path().join("nested").join("out.xlsx");
    let outcome = run_build(&request)?;

    assert_eq!(
        outcome.plan.columns()[1].source,
        ColumnSource::MissingSource("DoesNotExist".to_string())
    );
    let written = read_table(&request.output, &IngestOptions::default())?;
    assert_eq!(column(&written, "Full Name"), strings(&["Ann"]));
    assert_eq!(column(&written, "Contact"), strings(&[""]));
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    write_local_inputs(dir.path(), r#"{"Full Name": "Name"}"#)?;

    let inputs = InputFiles::local(dir.path())?;
    let mut request = BuildRequest::new(inputs, dir.path());
    request.dry_run = true;
    let outcome = run_build(&request)?;

    assert!(outcome.output.is_none());
    assert_eq!(outcome.table.row_count(), 2);
    assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
    Ok(())
}
