//! `bookbits books` command - list books that have highlights

use bookbits_core::catalog::BookRecord;
use bookbits_core::error::Result;

use crate::cli::output::escape_quotes;
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let library = ctx.open_library(&config)?;
    let books = library.books();

    tracing::debug!(
        catalog = library.catalog().len(),
        books = books.len(),
        "list_books"
    );

    output(ctx.cli, &books)
}

fn output(cli: &Cli, books: &[&BookRecord]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => output_human(cli, books),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(books)?),
        OutputFormat::Records => output_records(books),
    }
    Ok(())
}

fn output_human(cli: &Cli, books: &[&BookRecord]) {
    if books.is_empty() {
        if !cli.quiet {
            println!("No books with highlights found");
        }
        return;
    }

    for book in books {
        println!("{}  {}", book.id, book.label());
    }
}

fn output_records(books: &[&BookRecord]) {
    println!("H bookbits=1 records=1 mode=books books={}", books.len());
    for book in books {
        println!(
            "B id=\"{}\" title=\"{}\" author=\"{}\"",
            escape_quotes(&book.id),
            escape_quotes(&book.title),
            escape_quotes(&book.author)
        );
    }
}
