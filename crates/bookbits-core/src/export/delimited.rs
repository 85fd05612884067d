//! Semicolon-delimited export

use crate::annotations::Annotation;

pub const DELIMITER: char = ';';
pub const HEADER: &str = "Highlight;Notes";
/// Record terminator, as spreadsheet applications expect
pub const TERMINATOR: &str = "\r\n";

/// Replace each line break (`\r\n`, `\n` or `\r`) with a single space.
///
/// Records are CRLF-terminated, so embedded breaks would split a record.
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Quote a field when it contains the delimiter or a quote character
fn field(text: &str) -> String {
    let text = collapse_newlines(text);
    if text.contains([DELIMITER, '"']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

/// Render the header row followed by one record per annotation
pub fn render(annotations: &[Annotation]) -> String {
    let mut out =
        String::with_capacity(HEADER.len() + TERMINATOR.len() + annotations.len() * 64);
    out.push_str(HEADER);
    out.push_str(TERMINATOR);

    for annotation in annotations {
        out.push_str(&field(&annotation.highlight));
        out.push(DELIMITER);
        out.push_str(&field(annotation.note_text().unwrap_or("")));
        out.push_str(TERMINATOR);
    }

    out
}
