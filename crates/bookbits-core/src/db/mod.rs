//! Read-only SQLite access to the Apple Books stores

#[cfg(test)]
pub(crate) mod fixtures;
mod queries;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::{BookbitsError, Result};

pub use queries::{LibraryRow, ID_BATCH_SIZE};

/// A read-only connection to one store file.
///
/// Each connection serves a single logical operation and is closed when
/// dropped, on success and error paths alike.
#[derive(Debug)]
pub struct StoreConnection {
    conn: Connection,
    path: PathBuf,
}

impl StoreConnection {
    /// Open the store at `path` without write access.
    ///
    /// The file must already exist; SQLite is never allowed to create it.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to open store");
            BookbitsError::store_operation(&format!("open store at {}", path.display()), e)
        })?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
