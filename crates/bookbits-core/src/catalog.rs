//! Library catalog snapshot
//!
//! Reads every asset from the BKLibrary store once per run.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::db::{LibraryRow, StoreConnection};
use crate::error::Result;
use crate::trace_time;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A single book in the library catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl BookRecord {
    /// Build a record, substituting sentinels for missing title or author
    pub fn new(id: impl Into<String>, title: Option<String>, author: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: or_sentinel(title, UNKNOWN_TITLE),
            author: or_sentinel(author, UNKNOWN_AUTHOR),
        }
    }

    /// Menu label: `<title> by <author>`
    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel.to_string(),
    }
}

/// Every book in the catalog, keyed by asset id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    books: BTreeMap<String, BookRecord>,
}

impl CatalogIndex {
    pub fn from_rows(rows: Vec<LibraryRow>) -> Self {
        rows.into_iter()
            .filter_map(|row| match row.asset_id {
                Some(id) => Some(BookRecord::new(id, row.sort_title, row.sort_author)),
                None => {
                    debug!("skipping library asset without an id");
                    None
                }
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.books.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<BookRecord> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().map(|b| (b.id.clone(), b)).collect(),
        }
    }
}

/// Load the full catalog from the library store at `path`
pub fn load_catalog(path: &Path) -> Result<CatalogIndex> {
    let start = Instant::now();
    let store = StoreConnection::open(path)?;
    let rows = store.library_rows()?;
    let catalog = CatalogIndex::from_rows(rows);

    debug!(books = catalog.len(), "loaded catalog");
    trace_time!(start, "load_catalog");
    Ok(catalog)
}
