//! Bookbits - Apple Books highlight exporter
//!
//! Finds the books in the local Apple Books library that have highlights
//! and exports the highlights and notes of one of them to CSV or Markdown.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use bookbits_core::error::BookbitsError;
use bookbits_core::logging;
use cli::{errors, Cli};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() && errors::requests_json(env::args().skip(1)) => {
            let error = errors::from_clap(&err);
            eprintln!("{}", error.to_json());
            return exit_code(&error);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            errors::report(cli.format, cli.quiet, &e);
            exit_code(&e)
        }
    }
}

fn exit_code(err: &BookbitsError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}
