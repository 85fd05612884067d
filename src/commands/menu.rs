//! `bookbits menu` - the interactive exporter
//!
//! Main menu: select book, select format, export, quit. Each pass through
//! the loop takes the current [`Selection`] and yields the next one.

use std::path::Path;

use bookbits_core::error::{BookbitsError, Result};
use bookbits_core::export::ExportFormat;
use bookbits_core::library::Library;
use bookbits_core::selection::Selection;
use tracing::error;

use crate::cli::paths::path_relative_to_cwd;
use crate::commands::dispatch::CommandContext;
use crate::commands::picker;

const MAIN_MENU_TITLE: &str = "BookBits - Apple Books Highlight Exporter";

/// A main-menu choice, with any sub-menu pick already made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Index into [`Library::books`], or None if the sub-menu was cancelled
    SelectBook(Option<usize>),
    /// Index into [`ExportFormat::ALL`], or None if cancelled
    SelectFormat(Option<usize>),
    Export,
    Quit,
}

/// Outcome of one pass through the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Selection),
    Done,
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    if !picker::is_interactive() {
        return Err(BookbitsError::UsageError(
            "the menu needs an interactive terminal; use `bookbits books` and `bookbits export` instead"
                .to_string(),
        ));
    }

    let config = ctx.config()?;
    let library = ctx.open_library(&config)?;
    let mut selection = Selection::new(config.default_format());

    loop {
        let action = prompt_action(&library, &selection)?;
        match step(&library, ctx.out_dir, selection, action) {
            Step::Continue(next) => selection = next,
            Step::Done => return Ok(()),
        }
    }
}

/// Labels for the main menu, reflecting the current selection
pub fn main_menu_items(library: &Library, selection: &Selection) -> Vec<String> {
    let current_book = selection
        .book()
        .and_then(|id| library.catalog().get(id))
        .map(|book| book.title.as_str())
        .unwrap_or("None");

    vec![
        format!("Select Book (Current: {})", current_book),
        format!("Select Format (Current: {})", selection.format()),
        "Export Annotations".to_string(),
        "Quit".to_string(),
    ]
}

fn prompt_action(library: &Library, selection: &Selection) -> Result<MenuAction> {
    let items = main_menu_items(library, selection);
    let action = match picker::pick_index(&items, MAIN_MENU_TITLE)? {
        Some(0) => MenuAction::SelectBook(picker::pick_index(
            &library.book_labels(),
            "Select a Book",
        )?),
        Some(1) => {
            let labels: Vec<String> = Library::format_labels()
                .into_iter()
                .map(str::to_string)
                .collect();
            MenuAction::SelectFormat(picker::pick_index(&labels, "Select Output Format")?)
        }
        Some(2) => MenuAction::Export,
        _ => MenuAction::Quit,
    };
    Ok(action)
}

/// Apply one menu action to the selection.
///
/// Export failures are reported and leave the selection as it was so the
/// user can try again.
pub fn step(library: &Library, out_dir: &Path, selection: Selection, action: MenuAction) -> Step {
    match action {
        MenuAction::SelectBook(choice) => {
            let books = library.books();
            if books.is_empty() {
                println!("No books with highlights found");
            }
            match choice.and_then(|i| books.get(i)) {
                Some(book) => Step::Continue(selection.with_book(book.id.clone())),
                None => Step::Continue(selection),
            }
        }
        MenuAction::SelectFormat(choice) => match choice.and_then(|i| ExportFormat::ALL.get(i)) {
            Some(format) => Step::Continue(selection.with_format(*format)),
            None => Step::Continue(selection),
        },
        MenuAction::Export => match selection.export(library, out_dir) {
            Ok(exported) => {
                if let Some(path) = exported.exported() {
                    println!("Annotations exported to {}", path_relative_to_cwd(path));
                }
                Step::Done
            }
            Err(BookbitsError::UsageError(message)) => {
                println!("{}", message);
                Step::Continue(selection)
            }
            Err(e) => {
                error!(error = %e, "export failed");
                println!("Error exporting annotations: {}", e);
                Step::Continue(selection)
            }
        },
        MenuAction::Quit => {
            println!("Exiting...");
            Step::Done
        }
    }
}

#[cfg(test)]
#[path = "../../crates/bookbits-core/src/db/fixtures.rs"]
mod fixtures;
