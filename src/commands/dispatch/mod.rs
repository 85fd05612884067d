//! Command dispatch logic for bookbits

use std::time::Instant;

use crate::cli::paths::resolve_out_dir;
use crate::cli::Cli;
use bookbits_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let out_dir = resolve_out_dir(cli.out_dir.clone());

    debug!(elapsed = ?start.elapsed(), out_dir = %out_dir.display(), "resolve_out_dir");

    let ctx = CommandContext::new(cli, &out_dir, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
