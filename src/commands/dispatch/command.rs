//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use bookbits_core::config::Config;
use bookbits_core::error::Result;
use bookbits_core::library::{Library, StorePatterns};
use tracing::debug;

use crate::cli::Cli;
use crate::commands::{menu, picker};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub out_dir: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, out_dir: &'a Path, start: Instant) -> Self {
        Self {
            cli,
            out_dir,
            start,
        }
    }

    pub fn config(&self) -> Result<Config> {
        Config::load()
    }

    /// Store patterns from the config file, overridden by CLI flags
    pub fn store_patterns(&self, config: &Config) -> StorePatterns {
        let mut patterns = StorePatterns::from_config(config);
        if let Some(library) = &self.cli.library_db {
            patterns.library = library.clone();
        }
        if let Some(annotations) = &self.cli.annotation_db {
            patterns.annotations = annotations.clone();
        }
        patterns
    }

    pub fn open_library(&self, config: &Config) -> Result<Library> {
        let library = Library::open(&self.store_patterns(config))?;
        debug!(elapsed = ?self.start.elapsed(), "open_library");
        Ok(library)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: open the menu on a terminal, print a banner otherwise
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if picker::is_interactive() {
            return menu::execute(ctx);
        }

        println!("bookbits {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Export Apple Books highlights and notes to CSV or Markdown.");
        println!();
        println!("Run `bookbits --help` for usage information.");
        Ok(())
    }
}
