//! Graphwalk - graph traversal, ancestry and social-network queries
//!
//! A command-line front end for the graphwalk-core algorithms: breadth- and
//! depth-first traversal and search, the earliest-ancestor query, and
//! shortest friendship paths in a randomly populated social graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GraphExitCode::Success),
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
                OutputFormat::Human => {}
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Argument errors happen before `Cli` exists, so `--format json` is read
/// straight from argv to pick the JSON envelope over clap's own report.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    };

    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
