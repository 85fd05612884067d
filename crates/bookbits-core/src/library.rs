//! The library view handed to user interfaces
//!
//! Resolves both stores, loads the catalog, reconciles it against the
//! annotation store, and exports a chosen book.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::annotations::{self, HighlightedBookSet};
use crate::catalog::{self, BookRecord, CatalogIndex};
use crate::config::Config;
use crate::error::{BookbitsError, Result};
use crate::export::{self, ExportFormat};
use crate::locate;

/// Glob patterns for the two stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePatterns {
    pub library: String,
    pub annotations: String,
}

impl StorePatterns {
    pub fn from_config(config: &Config) -> Self {
        Self {
            library: config.library_pattern().to_string(),
            annotations: config.annotation_pattern().to_string(),
        }
    }
}

/// Concrete store files for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub library: PathBuf,
    pub annotations: PathBuf,
}

impl StorePaths {
    pub fn resolve(patterns: &StorePatterns) -> Result<Self> {
        Ok(Self {
            library: locate::resolve(&patterns.library)?,
            annotations: locate::resolve(&patterns.annotations)?,
        })
    }
}

/// Catalog snapshot plus the books that can be exported
#[derive(Debug, Clone)]
pub struct Library {
    paths: StorePaths,
    catalog: CatalogIndex,
    highlighted: HighlightedBookSet,
}

impl Library {
    /// Locate both stores and load them
    pub fn open(patterns: &StorePatterns) -> Result<Self> {
        let paths = StorePaths::resolve(patterns)?;
        Self::load(paths)
    }

    pub fn load(paths: StorePaths) -> Result<Self> {
        let catalog = catalog::load_catalog(&paths.library)?;
        let highlighted = annotations::find_highlighted_books(&paths.annotations, &catalog)?;

        info!(
            books = catalog.len(),
            highlighted = highlighted.len(),
            "library loaded"
        );

        Ok(Self {
            paths,
            catalog,
            highlighted,
        })
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Books with at least one highlight, in reconciliation order
    pub fn books(&self) -> Vec<&BookRecord> {
        self.highlighted
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// Menu labels for [`Library::books`], in the same order
    pub fn book_labels(&self) -> Vec<String> {
        self.books().into_iter().map(BookRecord::label).collect()
    }

    pub fn format_labels() -> Vec<&'static str> {
        ExportFormat::ALL.iter().map(|f| f.extension()).collect()
    }

    /// Look up an exportable book
    pub fn book(&self, id: &str) -> Result<&BookRecord> {
        if !self.highlighted.iter().any(|h| h == id) {
            return Err(BookbitsError::BookNotFound { id: id.to_string() });
        }
        self.catalog
            .get(id)
            .ok_or_else(|| BookbitsError::BookNotFound { id: id.to_string() })
    }

    /// Export one book into `dir`, returning the written file
    pub fn export(&self, id: &str, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
        let book = self.book(id)?;
        let annotations = annotations::fetch_annotations(&self.paths.annotations, id)?;
        let path = export::write_export(dir, &annotations, format, &book.title)?;

        info!(book_id = id, path = %path.display(), "annotations exported");
        Ok(path)
    }
}
