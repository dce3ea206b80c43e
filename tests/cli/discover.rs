use crate::support::{index_row, recall_in, setup_data_dir};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Co-occurrence discovery tests
// ============================================================================

fn write_index(dir: &std::path::Path) {
    let mut rows = String::new();
    for i in 0..3 {
        let ts = format!("t{}", i);
        rows.push_str(&index_row("s1", &ts, "user", "webhook zorblat", "webhook zorblat", "/p"));
        rows.push_str(&index_row("s2", &ts, "user", "kubernetes cluster", "kubernet cluster", "/p"));
    }
    fs::write(dir.join("memory-index.tsv"), rows).unwrap();
}

#[test]
fn test_discover_missing_index_exits_1() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .arg("discover")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("index file not found"));
}

#[test]
fn test_discover_missing_index_json_envelope() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .args(["--format", "json", "discover"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"not_found\""));
}

#[test]
fn test_discover_dry_run_lists_candidates() {
    let dir = setup_data_dir(&["webhook"]);
    write_index(dir.path());

    recall_in(dir.path())
        .arg("discover")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 messages loaded"))
        .stdout(predicate::str::contains("zorblat"))
        .stdout(predicate::str::contains("NEW"))
        .stdout(predicate::str::contains("kubernetes").not())
        .stdout(predicate::str::contains("Run with --write"));

    assert!(!dir.path().join("custom_keywords.txt").exists());
}

#[test]
fn test_discover_write_merges_and_preserves_header() {
    let dir = setup_data_dir(&["webhook"]);
    write_index(dir.path());
    let keywords = dir.path().join("custom_keywords.txt");
    fs::write(&keywords, "# my keywords\nalpha\n").unwrap();

    recall_in(dir.path())
        .args(["discover", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 keywords"));

    assert_eq!(
        fs::read_to_string(&keywords).unwrap(),
        "# my keywords\nalpha\nzorblat\n"
    );

    recall_in(dir.path())
        .arg("discover")
        .assert()
        .success()
        .stdout(predicate::str::contains("(already in list)"))
        .stdout(predicate::str::contains("Found 0 new candidate keywords"));
}

#[test]
fn test_discover_write_creates_file_with_default_header() {
    let dir = setup_data_dir(&["webhook"]);
    write_index(dir.path());

    recall_in(dir.path())
        .args(["-q", "discover", "--write"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("custom_keywords.txt")).unwrap();
    assert!(content.starts_with("# "));
    assert!(content.ends_with("zorblat\n"));
}
