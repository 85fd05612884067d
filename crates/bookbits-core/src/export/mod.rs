//! Export highlights to a file
//!
//! Two encodings are supported:
//! - csv: `Highlight;Notes` records, one line per highlight
//! - md: a Markdown document headed by the book title
//!
//! The file name depends only on the format (`highlights.csv` or
//! `highlights.md`), so exporting another book replaces the previous file.

pub mod delimited;
pub mod markdown;

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, error};

use crate::annotations::Annotation;
use crate::error::{BookbitsError, Result};

/// Base name shared by every export file
pub const EXPORT_STEM: &str = "highlights";

/// Output encoding for an export
///
/// Serialized by extension (`csv`, `md`); deserialized through [`FromStr`]
/// so config values accept the same names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Semicolon-delimited text
    Delimited,
    /// Markdown document (default)
    #[default]
    Markdown,
}

impl ExportFormat {
    /// Every supported format, in menu order
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Delimited, ExportFormat::Markdown];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Delimited => "csv",
            ExportFormat::Markdown => "md",
        }
    }

    /// Output file name, e.g. `highlights.md`
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_STEM, self.extension())
    }

    /// Comma-separated list of accepted format names
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|f| f.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ExportFormat {
    type Err = BookbitsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Delimited),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            _ => Err(BookbitsError::unsupported_format(s, Self::supported())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl Serialize for ExportFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.extension())
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Render annotations in the given format
pub fn render(annotations: &[Annotation], format: ExportFormat, book_title: &str) -> String {
    match format {
        ExportFormat::Delimited => delimited::render(annotations),
        ExportFormat::Markdown => markdown::render(annotations, book_title),
    }
}

/// Write annotations into `dir`, creating or truncating the export file.
///
/// Returns the path of the written file.
pub fn write_export(
    dir: &Path,
    annotations: &[Annotation],
    format: ExportFormat,
    book_title: &str,
) -> Result<PathBuf> {
    let path = dir.join(format.file_name());
    let content = render(annotations, format, book_title);

    let mut file = File::create(&path).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to open export file");
        BookbitsError::io("create", &path, e)
    })?;
    file.write_all(content.as_bytes()).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to write export file");
        BookbitsError::io("write", &path, e)
    })?;

    debug!(
        path = %path.display(),
        format = %format,
        count = annotations.len(),
        "wrote export"
    );
    Ok(path)
}
