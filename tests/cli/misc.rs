use crate::support::{recall, recall_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    recall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: recall"))
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("rank"));
}

#[test]
fn test_version_flag() {
    recall()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recall"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("recall --help"));
}

#[test]
fn test_unknown_subcommand_exit_1() {
    let dir = tempdir().unwrap();

    recall_in(dir.path()).arg("frobnicate").assert().code(1);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["--format", "json", "index", "--bogus-flag"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_invalid_config_exit_1() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[rank\nbroken").unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook", "simple"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}
