//! Flightpath - shortest flight routes between airports
//!
//! Loads a DOT-style flight dataset into a weighted graph and answers
//! statistics and cheapest-route queries, one-shot or from an interactive
//! menu.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use flightpath_core::error::{ExitCode as RouteExitCode, RouteError};
use flightpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--format` may not be parsed yet, so argv decides the error shape
        Err(err) if json_requested(env::args().skip(1)) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            return report(&parse_error(&err), OutputFormat::Json);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => report(&e, cli.format),
    }
}

/// Print an error on stderr in the requested format and map it to an exit code
fn report(error: &RouteError, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human => eprintln!("error: {}", error),
    }
    ExitCode::from(error.exit_code() as u8)
}

fn parse_error(err: &clap::Error) -> RouteError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => RouteError::UsageError(err.to_string()),
        _ => RouteError::Other(err.to_string()),
    }
}

/// Whether `--format json` or `--format=json` appears in `args`
fn json_requested(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
