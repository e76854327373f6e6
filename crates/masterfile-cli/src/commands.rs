use std::path::Path;

use tracing::{info, info_span};

use masterfile_cli::pipeline::{BuildOutcome, BuildRequest, InputFiles, Result, run_build};
use masterfile_ingest::{IngestOptions, SheetSelector};

use crate::cli::{BuildArgs, CommonArgs, LocalArgs};

pub fn run_local(args: &LocalArgs) -> Result<BuildOutcome> {
    let span = info_span!("local", dir = %args.dir.display());
    let _guard = span.enter();
    let inputs = InputFiles::local(&args.dir)?;
    info!(
        onboarding = %inputs.onboarding.display(),
        template = %inputs.template.display(),
        mapping = %inputs.mapping.display(),
        "found local input files"
    );
    run_build(&build_request(inputs, &args.dir, &args.common))
}

pub fn run_explicit(args: &BuildArgs) -> Result<BuildOutcome> {
    let span = info_span!("build");
    let _guard = span.enter();
    let inputs = InputFiles::explicit(
        args.onboarding.clone(),
        args.template.clone(),
        args.mapping.clone(),
    )?;
    run_build(&build_request(inputs, Path::new("."), &args.common))
}

fn build_request(inputs: InputFiles, output_dir: &Path, common: &CommonArgs) -> BuildRequest {
    let mut request = BuildRequest::new(inputs, output_dir);
    if let Some(output) = &common.output {
        request.output = output.clone();
    }
    if let Some(sheet) = &common.sheet {
        request.ingest = IngestOptions::new().with_sheet(SheetSelector::Named(sheet.clone()));
    }
    request.dry_run = common.dry_run;
    request
}
