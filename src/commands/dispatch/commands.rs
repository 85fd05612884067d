//! Command implementations for all bookbits commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{books, export, menu, stores};
use bookbits_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Menu => menu::execute(ctx),
            Commands::Books => books::execute(ctx),
            Commands::Export {
                book,
                export_format,
            } => export::execute(ctx, book, export_format.as_deref()),
            Commands::Stores => stores::execute(ctx),
        }
    }
}
