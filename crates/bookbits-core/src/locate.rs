//! Data store discovery
//!
//! Apple Books keeps both databases inside its sandbox container and appends a
//! schema suffix to each file name, so they are located by glob pattern
//! relative to the home directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{BookbitsError, Result};

/// Default pattern for the library catalog database
pub const LIBRARY_DB_PATTERN: &str =
    "~/Library/Containers/com.apple.iBooksX/Data/Documents/BKLibrary/BKLibrary*.sqlite";

/// Default pattern for the annotation database
pub const ANNOTATION_DB_PATTERN: &str =
    "~/Library/Containers/com.apple.iBooksX/Data/Documents/AEAnnotation/AEAnnotation*.sqlite";

/// A store file matched by a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreFile {
    pub path: PathBuf,
    /// Last modification time, if the filesystem reports one
    pub modified: Option<DateTime<Utc>>,
}

impl StoreFile {
    fn from_path(path: PathBuf) -> Self {
        let modified = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        Self { path, modified }
    }
}

/// The part of `pattern` after a leading `~` or `~/`, if there is one
fn strip_home(pattern: &str) -> Option<&str> {
    if pattern == "~" {
        Some("")
    } else {
        pattern.strip_prefix("~/")
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| BookbitsError::Other("unable to determine home directory".to_string()))
}

/// Expand a leading `~` to the user's home directory.
///
/// The home directory is escaped so glob metacharacters in it match literally.
pub fn expand_home(pattern: &str) -> Result<String> {
    let Some(rest) = strip_home(pattern) else {
        return Ok(pattern.to_string());
    };

    let home = glob::Pattern::escape(&home_dir()?.to_string_lossy());

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(Path::new(&home).join(rest).to_string_lossy().into_owned())
    }
}

/// `pattern` read as a plain path, with `~` expanded but nothing escaped
fn literal_path(pattern: &str) -> Result<PathBuf> {
    match strip_home(pattern) {
        Some("") => home_dir(),
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(pattern)),
    }
}

/// List every regular file matching `pattern`.
///
/// A pattern naming an existing file is taken as that file, even when the
/// path contains glob metacharacters such as `[`.
pub fn candidates(pattern: &str) -> Result<Vec<StoreFile>> {
    let literal = literal_path(pattern)?;
    if literal.is_file() {
        debug!(path = %literal.display(), "pattern names an existing file");
        return Ok(vec![StoreFile::from_path(literal)]);
    }

    let expanded = expand_home(pattern)?;
    let paths = glob::glob(&expanded).map_err(|e| {
        BookbitsError::UsageError(format!("invalid store pattern {}: {}", pattern, e))
    })?;

    let mut found = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => found.push(StoreFile::from_path(path)),
            Ok(path) => debug!(path = %path.display(), "skipping non-file match"),
            Err(e) => debug!(error = %e, "skipping unreadable match"),
        }
    }

    Ok(found)
}

/// Resolve `pattern` to exactly one store file.
///
/// When several installations match, the most recently modified file wins;
/// ties go to the lexicographically greatest path.
pub fn resolve(pattern: &str) -> Result<PathBuf> {
    let matches = candidates(pattern)?;

    if matches.len() > 1 {
        warn!(
            pattern,
            count = matches.len(),
            "multiple stores match; using the most recently modified"
        );
    }

    let chosen = matches
        .into_iter()
        .max_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.path.cmp(&b.path))
        })
        .ok_or_else(|| BookbitsError::StoreNotFound {
            pattern: pattern.to_string(),
        })?;

    debug!(pattern, path = %chosen.path.display(), "resolved store");
    Ok(chosen.path)
}
