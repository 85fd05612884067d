//! Reporting failures to the user
//!
//! Errors go to stderr: a JSON envelope when `--format json` was asked for,
//! otherwise a one-line message plus the store access hint where it applies.

use clap::error::ErrorKind;

use bookbits_core::error::{BookbitsError, STORE_ACCESS_HINT};

use super::OutputFormat;

/// True if the raw arguments ask for JSON output.
///
/// Checked on argv directly because clap may reject the command line before
/// `--format` is available.
pub fn requests_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format=json" => return true,
            "--format" => {
                if args.next().is_some_and(|v| v.as_ref() == "json") {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Classify a clap parse failure
pub fn from_clap(err: &clap::Error) -> BookbitsError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => BookbitsError::UsageError(err.to_string()),
        _ => BookbitsError::Other(err.to_string()),
    }
}

/// Print a command failure in the requested output format
pub fn report(format: OutputFormat, quiet: bool, err: &BookbitsError) {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
        return;
    }
    if quiet {
        return;
    }

    eprintln!("error: {}", err);
    if err.is_store_error() {
        eprintln!("{}", STORE_ACCESS_HINT);
    }
}
