//! Interactive picker for "choose one of N" menus
//!
//! Thin wrapper over the inquire crate; callers map the returned index back
//! to their own choices, so duplicate labels are harmless.

use std::io::IsTerminal;

use bookbits_core::error::{BookbitsError, Result};
use inquire::{InquireError, Select};

/// Present a menu and return the index of the chosen option.
///
/// Returns None if the list is empty or the user cancelled/escaped.
pub fn pick_index(options: &[String], prompt: &str) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let help_message = format!(
        "{} items, use ↑↓ to navigate, Enter to select, Esc to cancel",
        options.len()
    );

    let select = Select::new(prompt, options.to_vec())
        .with_help_message(&help_message)
        .with_page_size(20);

    match select.raw_prompt() {
        Ok(choice) => Ok(Some(choice.index)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(BookbitsError::io_operation("show menu", "stdin", e)),
    }
}

/// Check if stdin is a TTY (interactive terminal)
///
/// Returns false if running in a non-interactive environment (CI, pipe, etc.)
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}
