use crate::support::{moby_dick, Stores};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// books command
// ============================================================================

#[test]
fn test_books_lists_only_highlighted() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("b1  Moby Dick by Melville"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_books_unknown_title_and_author() {
    let stores = Stores::new(&[("b1", None, Some(""))], &[("b1", Some("text"), None)]);
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Title by Unknown Author"));
}

#[test]
fn test_books_empty_catalog() {
    let stores = Stores::new(&[], &[("b1", Some("orphan"), None)]);
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books with highlights found"));
}

#[test]
fn test_books_ignores_empty_highlights() {
    let stores = Stores::new(
        &[("b1", Some("Emma"), Some("Austen"))],
        &[("b1", Some(""), Some("a note")), ("b1", None, None)],
    );
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books with highlights found"));
}

#[test]
fn test_books_json() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    let output = stores
        .command(cwd.path())
        .args(["books", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let books = json.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], "b1");
    assert_eq!(books[0]["title"], "Moby Dick");
    assert_eq!(books[0]["author"], "Melville");
}

#[test]
fn test_books_records() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["books", "--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H bookbits=1 records=1 mode=books books=1",
        ))
        .stdout(predicate::str::contains(
            "B id=\"b1\" title=\"Moby Dick\" author=\"Melville\"",
        ));
}
