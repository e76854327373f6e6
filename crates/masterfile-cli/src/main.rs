//! Masterfile builder CLI.

use clap::{ColorChoice, Parser};
use masterfile_cli::logging::{LogConfig, LogFormat, init_logging};
use masterfile_cli::pipeline::{BuildOutcome, PipelineError};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_explicit, run_local};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Local(args) => run_local(args),
        Command::Build(args) => run_explicit(args),
    };
    std::process::exit(report(result));
}

fn report(result: Result<BuildOutcome, PipelineError>) -> i32 {
    match result {
        Ok(outcome) => {
            print_summary(&outcome);
            0
        }
        Err(err) => {
            error!(error = %err, "build failed");
            eprintln!("error: {err}");
            if matches!(err, PipelineError::MissingFile { .. }) {
                eprintln!(
                    "hint: place the files in that directory, or pass them explicitly with \
                     `masterfile build --onboarding <PATH> --template <PATH> --mapping <PATH>`"
                );
            }
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
