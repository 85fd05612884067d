//! `bookbits export` command - export one book without menus

use std::path::Path;

use bookbits_core::error::Result;
use bookbits_core::export::ExportFormat;

use crate::cli::output::escape_quotes;
use crate::cli::parse::parse_export_format;
use crate::cli::paths::path_relative_to_cwd;
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, book: &str, export_format: Option<&str>) -> Result<()> {
    let config = ctx.config()?;
    let format = parse_export_format(export_format, config.default_format())?;

    let library = ctx.open_library(&config)?;
    let path = library.export(book, format, ctx.out_dir)?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "export");
    report(ctx.cli, &path, format);
    Ok(())
}

/// Tell the user where the export landed
pub fn report(cli: &Cli, path: &Path, format: ExportFormat) {
    let shown = path_relative_to_cwd(path);
    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Annotations exported to {}", shown);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": shown,
                "format": format,
            });
            println!("{}", json);
        }
        OutputFormat::Records => {
            println!(
                "E file=\"{}\" format={}",
                escape_quotes(&shown),
                format
            );
        }
    }
}
