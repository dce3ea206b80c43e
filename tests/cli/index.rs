use crate::support::recall_in;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Index build tests
// ============================================================================

#[test]
fn test_index_stdin_to_stdout() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .arg("index")
        .write_stdin("s1\t2024-01-01\tuser\tThe cats were running\t/proj\n")
        .assert()
        .success()
        .stdout("s1\t2024-01-01\tuser\tThe cats were running\tthe cat be run\t/proj\n");
}

#[test]
fn test_index_keeps_order_and_skips_malformed() {
    let dir = tempdir().unwrap();
    let input = "a\tt1\tuser\tfirst message\t/p\n\
                 only\ttwo fields\n\
                 b\tt2\tassistant\t部署 webhooks 成功\t/p\n\
                 c\tt3\tbot\tunknown type\t/p\n";

    recall_in(dir.path())
        .arg("index")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "a\tt1\tuser\tfirst message\tfirst messag\t/p\n\
             b\tt2\tassistant\t部署 webhooks 成功\twebhook\t/p\n",
        );
}

#[test]
fn test_index_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.tsv");
    let output = dir.path().join("memory-index.tsv");
    fs::write(&input, "s1\tt1\tuser\tChildren ran home\t/proj\n").unwrap();
    fs::write(&output, "stale contents\n").unwrap();

    recall_in(dir.path())
        .arg("index")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 1 messages"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "s1\tt1\tuser\tChildren ran home\tchild run home\t/proj\n");
}

#[test]
fn test_index_json_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, "s1\tt1\tuser\thello\t/p\nbroken\ns2\tt2\tuser\tworld\t/p\n").unwrap();

    recall_in(dir.path())
        .args(["--format", "json", "index"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"written\": 2"))
        .stdout(predicate::str::contains("\"skipped\": 1"));
}

#[test]
fn test_index_missing_input_exits_1() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["index", "/nonexistent/raw.tsv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}
