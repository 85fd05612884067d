//! SQLite fixtures mirroring the Apple Books schemas
//!
//! Shared by every test target in the workspace; integration tests pull it
//! in with `#[path]`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

/// (asset id, sort title, sort author)
pub type LibraryFixtureRow<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

/// (asset id, selected text, note)
pub type AnnotationFixtureRow<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

pub const LIBRARY_DB_FILE: &str = "BKLibrary-1-091020131601.sqlite";
pub const ANNOTATION_DB_FILE: &str = "AEAnnotation_v10312011_1727_local.sqlite";

pub fn library_db(dir: &Path, rows: &[LibraryFixtureRow]) -> PathBuf {
    let path = dir.join(LIBRARY_DB_FILE);
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE ZBKLIBRARYASSET (
            Z_PK INTEGER PRIMARY KEY,
            ZASSETID VARCHAR,
            ZTITLE VARCHAR,
            ZSORTTITLE VARCHAR,
            ZSORTAUTHOR VARCHAR
        );",
    )
    .unwrap();
    for (id, title, author) in rows {
        conn.execute(
            "INSERT INTO ZBKLIBRARYASSET (ZASSETID, ZTITLE, ZSORTTITLE, ZSORTAUTHOR)
             VALUES (?1, ?2, ?2, ?3)",
            params![id, title, author],
        )
        .unwrap();
    }
    path
}

pub fn annotation_db(dir: &Path, rows: &[AnnotationFixtureRow]) -> PathBuf {
    let path = dir.join(ANNOTATION_DB_FILE);
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE ZAEANNOTATION (
            Z_PK INTEGER PRIMARY KEY,
            ZANNOTATIONASSETID VARCHAR,
            ZANNOTATIONSELECTEDTEXT VARCHAR,
            ZANNOTATIONNOTE VARCHAR
        );",
    )
    .unwrap();
    for (id, text, note) in rows {
        conn.execute(
            "INSERT INTO ZAEANNOTATION (ZANNOTATIONASSETID, ZANNOTATIONSELECTEDTEXT, ZANNOTATIONNOTE)
             VALUES (?1, ?2, ?3)",
            params![id, text, note],
        )
        .unwrap();
    }
    path
}
