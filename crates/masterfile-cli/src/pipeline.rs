//! Build pipeline: resolve inputs, load them, map columns, write the workbook.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span, trace, warn};

use masterfile_ingest::{IngestError, IngestOptions, read_table, read_target_schema};
use masterfile_map::{ColumnSource, MappingFileError, MappingPlan, load_mapping, plan_columns};
use masterfile_model::{Mapping, Table};
use masterfile_output::{OUTPUT_FILE_NAME, OutputError, write_workbook_file};

use crate::logging::redact_value;

/// Onboarding spreadsheet looked up by `local` mode.
pub const DEFAULT_ONBOARDING: &str = "onboarding_real1.xlsx";
/// Masterfile template looked up by `local` mode.
pub const DEFAULT_TEMPLATE: &str = "masterfile_real1.xlsx";
/// Mapping file looked up by `local` mode.
pub const DEFAULT_MAPPING: &str = "mapping_real.json";

/// Why a build was abandoned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input files not found in {dir}: {}", missing.join(", "))]
    MissingFile { dir: PathBuf, missing: Vec<String> },

    #[error("all three inputs are required, missing: {}", missing.join(", "))]
    UploadIncomplete { missing: Vec<String> },

    #[error("failed to read inputs: {0}")]
    ParseFailure(#[from] ParseFailure),

    #[error("something went wrong: {0}")]
    Unexpected(#[from] OutputError),
}

/// An input that could not be read as a spreadsheet or a mapping.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Spreadsheet(#[from] IngestError),

    #[error(transparent)]
    Mapping(#[from] MappingFileError),
}

impl From<IngestError> for PipelineError {
    fn from(error: IngestError) -> Self {
        Self::ParseFailure(ParseFailure::Spreadsheet(error))
    }
}

impl From<MappingFileError> for PipelineError {
    fn from(error: MappingFileError) -> Self {
        Self::ParseFailure(ParseFailure::Mapping(error))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Paths of the three build inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    pub onboarding: PathBuf,
    pub template: PathBuf,
    pub mapping: PathBuf,
}

impl InputFiles {
    /// Locates the fixed-name inputs in `dir`.
    ///
    /// Fails with [`PipelineError::MissingFile`] listing every absent name.
    pub fn local(dir: &Path) -> Result<Self> {
        let missing: Vec<String> = [DEFAULT_ONBOARDING, DEFAULT_TEMPLATE, DEFAULT_MAPPING]
            .into_iter()
            .filter(|name| !dir.join(name).is_file())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::MissingFile {
                dir: dir.to_path_buf(),
                missing,
            });
        }
        Ok(Self {
            onboarding: dir.join(DEFAULT_ONBOARDING),
            template: dir.join(DEFAULT_TEMPLATE),
            mapping: dir.join(DEFAULT_MAPPING),
        })
    }

    /// Accepts explicitly supplied inputs; all three are required.
    pub fn explicit(
        onboarding: Option<PathBuf>,
        template: Option<PathBuf>,
        mapping: Option<PathBuf>,
    ) -> Result<Self> {
        match (onboarding, template, mapping) {
            (Some(onboarding), Some(template), Some(mapping)) => Ok(Self {
                onboarding,
                template,
                mapping,
            }),
            (onboarding, template, mapping) => {
                let missing = [
                    ("onboarding", onboarding.is_none()),
                    ("template", template.is_none()),
                    ("mapping", mapping.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then(|| name.to_string()))
                .collect();
                Err(PipelineError::UploadIncomplete { missing })
            }
        }
    }
}

/// A fully resolved build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub inputs: InputFiles,
    pub output: PathBuf,
    pub ingest: IngestOptions,
    pub dry_run: bool,
}

impl BuildRequest {
    /// Request writing `OUTPUT_FILE_NAME` into `output_dir`.
    pub fn new(inputs: InputFiles, output_dir: &Path) -> Self {
        Self {
            inputs,
            output: output_dir.join(OUTPUT_FILE_NAME),
            ingest: IngestOptions::default(),
            dry_run: false,
        }
    }
}

/// What a successful build produced.
#[derive(Debug)]
pub struct BuildOutcome {
    pub table: Table,
    pub plan: MappingPlan,
    /// Where the workbook was written; `None` for a dry run.
    pub output: Option<PathBuf>,
}

struct LoadedInputs {
    source: Table,
    target_schema: Vec<String>,
    mapping: Mapping,
}

/// Runs the load, map and write stages for `request`.
pub fn run_build(request: &BuildRequest) -> Result<BuildOutcome> {
    let loaded = info_span!("load").in_scope(|| load_inputs(request))?;

    let (plan, table) = info_span!("map").in_scope(|| {
        let start = Instant::now();
        let plan = plan_columns(&loaded.source, &loaded.target_schema, &loaded.mapping);
        for column in plan.columns() {
            if let ColumnSource::MissingSource(name) = &column.source {
                warn!(
                    target_column = %column.target,
                    source_column = %name,
                    "mapped source column not found, left blank"
                );
            }
        }
        for key in plan.unused_keys() {
            debug!(mapping_key = %key, "mapping key matches no template column");
        }
        let table = plan.apply(&loaded.source);
        trace_samples(&table, &plan);
        info!(
            columns = table.column_count(),
            rows = table.row_count(),
            mapped = plan.mapped_count(),
            blank = plan.blank_count(),
            duration_ms = start.elapsed().as_millis(),
            "mapped columns"
        );
        (plan, table)
    });

    let output = if request.dry_run {
        info!("dry run, skipping workbook output");
        None
    } else {
        info_span!("write", path = %request.output.display()).in_scope(|| -> Result<()> {
            let start = Instant::now();
            write_workbook_file(&table, &request.output)?;
            info!(
                rows = table.row_count(),
                duration_ms = start.elapsed().as_millis(),
                "wrote workbook"
            );
            Ok(())
        })?;
        Some(request.output.clone())
    };

    Ok(BuildOutcome {
        table,
        plan,
        output,
    })
}

fn load_inputs(request: &BuildRequest) -> Result<LoadedInputs> {
    let start = Instant::now();
    let inputs = &request.inputs;
    let source = read_table(&inputs.onboarding, &request.ingest)?;
    let target_schema = read_target_schema(&inputs.template, &request.ingest)?;
    let mapping = load_mapping(&inputs.mapping)?;
    info!(
        source_rows = source.row_count(),
        source_columns = source.column_count(),
        target_columns = target_schema.len(),
        mapping_entries = mapping.len(),
        duration_ms = start.elapsed().as_millis(),
        "loaded inputs"
    );
    Ok(LoadedInputs {
        source,
        target_schema,
        mapping,
    })
}

/// Logs the first value of every mapped column.
fn trace_samples(table: &Table, plan: &MappingPlan) {
    if table.row_count() == 0 {
        return;
    }
    for (column, column_plan) in table.columns().iter().zip(plan.columns()) {
        if let Some(source_name) = column_plan.source.source_name()
            && let Some(value) = column.values().first()
        {
            trace!(
                target_column = %column.name(),
                source_column = %source_name,
                sample = %redact_value(value),
                "first mapped value"
            );
        }
    }
}
