use crate::support::{moby_dick, Stores};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// export command
// ============================================================================

#[test]
fn test_export_csv() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotations exported to"))
        .stdout(predicate::str::contains("highlights.csv"));

    let content = fs::read_to_string(cwd.path().join("highlights.csv")).unwrap();
    assert_eq!(content, "Highlight;Notes\r\nCall me Ishmael.;\r\n");
}

#[test]
fn test_export_defaults_to_markdown() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1"])
        .assert()
        .success();

    let content = fs::read_to_string(cwd.path().join("highlights.md")).unwrap();
    assert_eq!(
        content,
        "# Highlights - Moby Dick\n\nCall me Ishmael.\n---\n"
    );
}

#[test]
fn test_export_markdown_with_notes() {
    let stores = Stores::new(
        &[("b1", Some("Emma"), Some("Austen"))],
        &[
            ("b1", Some("first"), Some("why")),
            ("b1", Some("second"), Some("")),
        ],
    );
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "md"])
        .assert()
        .success();

    let content = fs::read_to_string(cwd.path().join("highlights.md")).unwrap();
    assert_eq!(
        content,
        "# Highlights - Emma\n\nfirst\n*why*\n---\nsecond\n---\n"
    );
}

#[test]
fn test_export_csv_escapes_delimiter_and_newlines() {
    let stores = Stores::new(
        &[("b1", Some("Emma"), Some("Austen"))],
        &[("b1", Some("one; two\nthree"), Some("say \"hi\""))],
    );
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "CSV"])
        .assert()
        .success();

    let content = fs::read_to_string(cwd.path().join("highlights.csv")).unwrap();
    assert_eq!(
        content,
        "Highlight;Notes\r\n\"one; two three\";\"say \"\"hi\"\"\"\r\n"
    );
}

#[test]
fn test_export_overwrites_previous_file() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();
    fs::write(cwd.path().join("highlights.csv"), "stale contents\n").unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "csv"])
        .assert()
        .success();

    let content = fs::read_to_string(cwd.path().join("highlights.csv")).unwrap();
    assert!(!content.contains("stale"));
}

#[test]
fn test_export_out_dir() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();
    let out = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "csv", "--out-dir"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("highlights.csv").exists());
    assert!(!cwd.path().join("highlights.csv").exists());
}

#[test]
fn test_export_json_report() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    let output = stores
        .command(cwd.path())
        .args(["--format", "json", "export", "b1", "--as", "md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "md");
    assert!(json["file"].as_str().unwrap().ends_with("highlights.md"));
}

#[test]
fn test_export_unsupported_format() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported format: pdf"));

    assert!(!cwd.path().join("highlights.pdf").exists());
    assert!(!cwd.path().join("highlights.csv").exists());
    assert!(!cwd.path().join("highlights.md").exists());
}

#[test]
fn test_export_book_without_highlights() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b2", "--as", "csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("book not found: b2"));

    assert!(!cwd.path().join("highlights.csv").exists());
}

#[test]
fn test_export_missing_out_dir_fails() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--out-dir", "does/not/exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("highlights.md"));
}

#[test]
fn test_export_missing_out_dir_json_is_io_error() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    let output = stores
        .command(cwd.path())
        .args(["--format", "json", "export", "b1", "--as", "csv"])
        .args(["--out-dir", "does/not/exist"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope = stderr
        .lines()
        .find(|line| line.starts_with("{\"error\""))
        .expect("JSON error envelope on stderr");
    let json: serde_json::Value = serde_json::from_str(envelope).unwrap();
    assert_eq!(json["error"]["type"], "io_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("highlights.csv"));
}
