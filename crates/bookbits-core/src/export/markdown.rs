//! Markdown export
//!
//! Layout:
//!
//! ```text
//! # Highlights - <title>
//!
//! <highlight>
//! *<note>*
//! ---
//! ```
//!
//! Text is written verbatim; multi-line highlights stay multi-line.

use crate::annotations::Annotation;

pub const SEPARATOR: &str = "---";

pub fn render(annotations: &[Annotation], book_title: &str) -> String {
    let mut out = format!("# Highlights - {}\n\n", book_title);

    for annotation in annotations {
        out.push_str(&annotation.highlight);
        out.push('\n');
        if let Some(note) = annotation.note_text() {
            out.push('*');
            out.push_str(note);
            out.push_str("*\n");
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}
