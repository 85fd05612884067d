use crate::support::{moby_dick, Stores};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// stores command
// ============================================================================

#[test]
fn test_stores_human() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("stores")
        .assert()
        .success()
        .stdout(predicate::str::contains("library: "))
        .stdout(predicate::str::contains("BKLibrary-1-091020131601.sqlite"))
        .stdout(predicate::str::contains("annotations: "))
        .stdout(predicate::str::contains(
            "AEAnnotation_v10312011_1727_local.sqlite",
        ));
}

#[test]
fn test_stores_json() {
    let stores = moby_dick();
    let cwd = tempdir().unwrap();

    let output = stores
        .command(cwd.path())
        .args(["stores", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["library"]["selected"]["path"]
        .as_str()
        .unwrap()
        .ends_with("BKLibrary-1-091020131601.sqlite"));
    assert_eq!(json["annotations"]["candidates"].as_array().unwrap().len(), 1);
}

#[test]
fn test_stores_reports_missing_store() {
    let stores = Stores::empty();
    stores.write_library(&[]);
    let cwd = tempdir().unwrap();

    stores
        .command(cwd.path())
        .arg("stores")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("annotations: not found"));
}
