//! CLI argument parsing for bookbits
//!
//! Supports global flags: --format, --quiet, --verbose, --library-db,
//! --annotation-db, --out-dir

pub mod errors;
pub mod output;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Bookbits - export Apple Books highlights and notes
#[derive(Parser, Debug)]
#[command(name = "bookbits")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Library catalog database (path or glob pattern)
    #[arg(long, global = true, env = "BOOKBITS_LIBRARY_DB")]
    pub library_db: Option<String>,

    /// Annotation database (path or glob pattern)
    #[arg(long, global = true, env = "BOOKBITS_ANNOTATION_DB")]
    pub annotation_db: Option<String>,

    /// Directory to write export files into (default: current directory)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Output format for listings
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a book and format from interactive menus, then export
    Menu,

    /// List books that have highlights
    Books,

    /// Export the highlights and notes of one book
    Export {
        /// Asset id of the book (see `bookbits books`)
        book: String,

        /// Export format: csv or md (default from config, else md)
        #[arg(long = "as", value_name = "FORMAT")]
        export_format: Option<String>,
    },

    /// Show which database files are in use
    Stores,
}
