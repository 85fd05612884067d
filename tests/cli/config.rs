use crate::support::{bookbits, moby_dick};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// config.toml
// ============================================================================

#[test]
fn test_config_default_format() {
    let stores = moby_dick();
    stores.write_config("default_format = \"csv\"\n");
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1"])
        .assert()
        .success();

    assert!(cwd.path().join("highlights.csv").exists());
}

#[test]
fn test_flag_overrides_config_format() {
    let stores = moby_dick();
    stores.write_config("default_format = \"csv\"\n");
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .args(["export", "b1", "--as", "md"])
        .assert()
        .success();

    assert!(cwd.path().join("highlights.md").exists());
}

#[test]
fn test_config_store_patterns() {
    let stores = moby_dick();
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        format!(
            "library_pattern = \"{}\"\nannotation_pattern = \"{}\"\n",
            stores.library_pattern(),
            stores.annotation_pattern()
        ),
    )
    .unwrap();
    let cwd = tempdir().unwrap();

    bookbits()
        .current_dir(cwd.path())
        .env("BOOKBITS_CONFIG_DIR", config_dir.path())
        .env_remove("BOOKBITS_LIBRARY_DB")
        .env_remove("BOOKBITS_ANNOTATION_DB")
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("Moby Dick by Melville"));
}

#[test]
fn test_store_env_vars() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    bookbits()
        .current_dir(cwd.path())
        .env("BOOKBITS_CONFIG_DIR", stores.config_dir.path())
        .env("BOOKBITS_LIBRARY_DB", stores.library_pattern())
        .env("BOOKBITS_ANNOTATION_DB", stores.annotation_pattern())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("b1"));
}

#[test]
fn test_malformed_config_fails() {
    let stores = moby_dick();
    stores.write_config("not valid toml [[[\n");
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("books")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}
