use rusqlite::params;
use tracing::debug;

use super::StoreConnection;
use crate::error::Result;
use crate::map_store_err;

/// Host parameters bound per `IN (...)` query. Stays under SQLite's
/// historical limit of 999 so older builds accept it too.
pub const ID_BATCH_SIZE: usize = 900;

/// One raw row of `ZBKLIBRARYASSET`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRow {
    pub asset_id: Option<String>,
    pub sort_title: Option<String>,
    pub sort_author: Option<String>,
}

impl StoreConnection {
    /// Every asset in the library catalog, in storage order.
    pub fn library_rows(&self) -> Result<Vec<LibraryRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT ZASSETID, ZSORTTITLE, ZSORTAUTHOR FROM ZBKLIBRARYASSET")
            .map_err(map_store_err!("prepare library query"))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(LibraryRow {
                    asset_id: row.get(0)?,
                    sort_title: row.get(1)?,
                    sort_author: row.get(2)?,
                })
            })
            .map_err(map_store_err!("query library assets"))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(map_store_err!("read library asset"))?);
        }

        debug!(store = %self.path().display(), rows = out.len(), "read library assets");
        Ok(out)
    }

    /// Distinct asset ids among `asset_ids` that have a non-empty highlight.
    ///
    /// An empty input returns immediately; `IN ()` is not valid SQL.
    pub fn highlighted_asset_ids(&self, asset_ids: &[&str]) -> Result<Vec<String>> {
        let mut found = Vec::new();

        for batch in asset_ids.chunks(ID_BATCH_SIZE) {
            let placeholders = vec!["?"; batch.len()].join(",");
            let sql = format!(
                "SELECT DISTINCT ZANNOTATIONASSETID FROM ZAEANNOTATION \
                 WHERE ZANNOTATIONASSETID IN ({}) AND ZANNOTATIONSELECTEDTEXT != ''",
                placeholders
            );

            let mut stmt = self
                .conn
                .prepare(&sql)
                .map_err(map_store_err!("prepare highlighted books query"))?;

            let rows = stmt
                .query_map(rusqlite::params_from_iter(batch.iter()), |row| {
                    row.get::<_, String>(0)
                })
                .map_err(map_store_err!("query highlighted books"))?;

            for row in rows {
                found.push(row.map_err(map_store_err!("read highlighted book"))?);
            }
        }

        debug!(
            store = %self.path().display(),
            candidates = asset_ids.len(),
            found = found.len(),
            "reconciled highlighted books"
        );
        Ok(found)
    }

    /// Highlight text and note for every non-empty highlight of one asset.
    ///
    /// No ORDER BY: rows come back in the store's natural order.
    pub fn annotation_rows(&self, asset_id: &str) -> Result<Vec<(String, Option<String>)>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT ZANNOTATIONSELECTEDTEXT, ZANNOTATIONNOTE FROM ZAEANNOTATION \
                 WHERE ZANNOTATIONASSETID = ?1 AND ZANNOTATIONSELECTEDTEXT != ''",
            )
            .map_err(map_store_err!("prepare annotation query"))?;

        let rows = stmt
            .query_map(params![asset_id], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(map_store_err!("query annotations"))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(map_store_err!("read annotation"))?);
        }

        debug!(store = %self.path().display(), asset_id, rows = out.len(), "read annotations");
        Ok(out)
    }
}
