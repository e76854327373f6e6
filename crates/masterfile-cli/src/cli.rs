//! CLI argument definitions for the masterfile builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "masterfile",
    version,
    about = "Masterfile builder - fill a template spreadsheet from onboarding data",
    long_about = "Fill a masterfile template with onboarding data.\n\n\
                  Each template column is copied from the onboarding column named in a\n\
                  JSON mapping file; unmapped columns are left blank."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in trace logs.
    ///
    /// Onboarding sheets usually hold personal data, so values are
    /// replaced with [REDACTED] unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build from the fixed-name input files in a directory.
    Local(LocalArgs),

    /// Build from explicitly supplied input files.
    Build(BuildArgs),
}

#[derive(Parser)]
pub struct LocalArgs {
    /// Directory holding onboarding_real1.xlsx, masterfile_real1.xlsx and mapping_real.json.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Onboarding spreadsheet (source data).
    #[arg(long = "onboarding", value_name = "PATH")]
    pub onboarding: Option<PathBuf>,

    /// Masterfile template spreadsheet (target columns).
    #[arg(long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// JSON mapping of template column to onboarding column.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct CommonArgs {
    /// Output workbook path (default: final_masterfile_real.xlsx in the input directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Worksheet to read from both spreadsheets (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Build and report without writing the output workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
