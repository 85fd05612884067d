//! Highlights and notes from the AEAnnotation store

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::db::StoreConnection;
use crate::error::Result;
use crate::trace_time;

/// A highlighted passage and its optional note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub highlight: String,
    pub note: Option<String>,
}

impl Annotation {
    pub fn new(highlight: impl Into<String>, note: Option<String>) -> Self {
        Self {
            highlight: highlight.into(),
            note,
        }
    }

    /// The note text, if there is any to render.
    ///
    /// A stored empty string renders the same as no note.
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// Asset ids that have at least one non-empty highlight, in query order
pub type HighlightedBookSet = Vec<String>;

/// Find which catalog entries have highlights in the annotation store.
///
/// An empty catalog returns immediately without touching the store.
pub fn find_highlighted_books(path: &Path, catalog: &CatalogIndex) -> Result<HighlightedBookSet> {
    if catalog.is_empty() {
        debug!("empty catalog; no books to reconcile");
        return Ok(Vec::new());
    }

    let start = Instant::now();
    let ids: Vec<&str> = catalog.ids().collect();
    let store = StoreConnection::open(path)?;
    let highlighted = store.highlighted_asset_ids(&ids)?;

    debug!(
        catalog = catalog.len(),
        highlighted = highlighted.len(),
        "reconciled annotations"
    );
    trace_time!(start, "find_highlighted_books");
    Ok(highlighted)
}

/// Fetch every non-empty highlight for one book, in store order
pub fn fetch_annotations(path: &Path, book_id: &str) -> Result<Vec<Annotation>> {
    let start = Instant::now();
    let store = StoreConnection::open(path)?;
    let annotations: Vec<Annotation> = store
        .annotation_rows(book_id)?
        .into_iter()
        .map(|(highlight, note)| Annotation { highlight, note })
        .collect();

    debug!(book_id, count = annotations.len(), "fetched annotations");
    trace_time!(start, "fetch_annotations", book_id = book_id);
    Ok(annotations)
}
