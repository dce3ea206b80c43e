use crate::support::{recall_in, setup_data_dir};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Query normalizer tests
// ============================================================================

#[test]
fn test_normalize_arguments() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["normalize", "The", "cats", "were", "running"])
        .assert()
        .success()
        .stdout("the cat be run\n");
}

#[test]
fn test_normalize_passes_non_ascii_through() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["normalize", "部署 webhooks"])
        .assert()
        .success()
        .stdout("部署 webhook\n");
}

#[test]
fn test_normalize_stdin_lines() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .arg("normalize")
        .write_stdin("children ran\n\nfailing tests\n")
        .assert()
        .success()
        .stdout("child run\nfail test\n");
}

// ============================================================================
// Keyword hint tests
// ============================================================================

#[test]
fn test_keywords_from_arguments() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .args(["keywords", "the zorblat and the quuxify"])
        .assert()
        .success()
        .stdout("zorblat quuxify\n");
}

#[test]
fn test_keywords_respects_max() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .args(["keywords", "--max", "1", "zorblat quuxify"])
        .assert()
        .success()
        .stdout("zorblat\n");
}

#[test]
fn test_keywords_from_stdin_with_cjk() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .arg("keywords")
        .write_stdin("配置日历 zorblat")
        .assert()
        .success()
        .stdout("配置 置日 日历 zorblat\n");
}

#[test]
fn test_keywords_keeps_custom_words_whole_with_jieba() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["keywords", "飞书机器人"])
        .assert()
        .success()
        .stdout(predicate::str::contains("飞书"));
}

#[test]
fn test_keywords_stopwords_only_prints_nothing() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .args(["keywords", "the and of"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_keywords_without_text_exits_1() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .arg("keywords")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no text given"));
}

#[test]
fn test_keywords_json_classifies() {
    let dir = setup_data_dir(&["webhook"]);

    recall_in(dir.path())
        .args(["--format", "json", "keywords", "webhook zorblat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keyword\":\"webhook\""))
        .stdout(predicate::str::contains("\"class\":\"seed\""))
        .stdout(predicate::str::contains("\"class\":null"));
}
