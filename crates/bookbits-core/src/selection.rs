//! Interactive selection context
//!
//! A [`Selection`] is a value: every interaction produces a new one, and a
//! failed export leaves the previous value untouched so the user can retry.

use std::path::{Path, PathBuf};

use crate::bail_usage;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::library::Library;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoBookSelected,
    BookSelected,
    Exported,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    book: Option<String>,
    format: ExportFormat,
    exported: Option<PathBuf>,
}

impl Selection {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            book: None,
            format,
            exported: None,
        }
    }

    /// Choose a book, replacing any earlier choice
    pub fn with_book(self, id: impl Into<String>) -> Self {
        Self {
            book: Some(id.into()),
            exported: None,
            ..self
        }
    }

    /// Choose the export format; allowed in every state
    pub fn with_format(self, format: ExportFormat) -> Self {
        Self { format, ..self }
    }

    pub fn book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn exported(&self) -> Option<&Path> {
        self.exported.as_deref()
    }

    pub fn state(&self) -> SelectionState {
        match (&self.book, &self.exported) {
            (None, _) => SelectionState::NoBookSelected,
            (Some(_), None) => SelectionState::BookSelected,
            (Some(_), Some(_)) => SelectionState::Exported,
        }
    }

    /// Export the selected book into `dir`.
    ///
    /// Returns the selection in the `Exported` state; on error `self` is
    /// still valid and the export can be retried.
    pub fn export(&self, library: &Library, dir: &Path) -> Result<Selection> {
        let Some(book) = self.book.as_deref() else {
            bail_usage!("Please select a book before exporting!");
        };

        let path = library.export(book, self.format, dir)?;
        Ok(Selection {
            exported: Some(path),
            ..self.clone()
        })
    }
}
