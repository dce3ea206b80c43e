use crate::support::{index_row, recall_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Rank formatter tests
// ============================================================================

fn candidates() -> String {
    [
        index_row("aaaaaaaa-1", "2024-05-01T10:00:00Z", "user", "The webhook keeps failing", "the webhook keep fail", "/srv/bot"),
        index_row("aaaaaaaa-1", "2024-05-01T10:05:00Z", "assistant", "Retry the webhook", "retri the webhook", "/srv/bot"),
        index_row("bbbbbbbb-2", "2024-04-01T09:00:00Z", "user", "retry logic", "retri logic", "/srv/queue"),
    ]
    .concat()
}

#[test]
fn test_rank_simple_output() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook retry", "simple", "webhook retri"])
        .write_stdin(candidates())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[aaaaaaaa] webhook[2] retry[1] (2 matches | 2024-05-01 | /srv/bot)\n[asst] Retry the webhook\n... and 1 more matches\n",
        ))
        .stdout(predicate::str::contains(
            "[bbbbbbbb] retry[1] (1 matches | 2024-04-01 | /srv/queue)",
        ))
        .stdout(predicate::str::ends_with(
            "\nFound matches in 2 sessions (searched 2 keywords)\n",
        ))
        .stderr(predicate::str::contains("aaaaaaaa,bbbbbbbb"));
}

#[test]
fn test_rank_normalizes_query_when_not_given() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "0", "200", "retrying", "simple"])
        .write_stdin(candidates())
        .assert()
        .success()
        .stdout(predicate::str::contains("[bbbbbbbb] retrying[1]"));
}

#[test]
fn test_rank_status_code_keyword_counts_only_its_own_hits() {
    let dir = tempdir().unwrap();
    let rows = [
        index_row("cccccccc-3", "2024-06-01T08:00:00Z", "user", "unexpected error here", "unexpect error here", "/srv/api"),
        index_row("dddddddd-4", "2024-06-02T08:00:00Z", "user", "gateway returned 404 error", "gateway return error", "/srv/api"),
    ]
    .concat();

    recall_in(dir.path())
        .args(["rank", "5", "0", "200", "404 error", "simple"])
        .write_stdin(rows)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[dddddddd] 404[1] error[1] (2 matches | 2024-06-02 | /srv/api)\n",
        ))
        .stdout(predicate::str::contains(
            "[cccccccc] error[1] (1 matches | 2024-06-01 | /srv/api)",
        ));
}

#[test]
fn test_rank_punctuated_keyword_with_short_normalized_argument() {
    let dir = tempdir().unwrap();
    let rows = [
        index_row("eeeeeeee-5", "2024-06-03T08:00:00Z", "user", "Upgrade node.js first", "upgrad node js first", "/srv/hooks"),
        index_row("ffffffff-6", "2024-06-04T08:00:00Z", "user", "the webhook fired", "the webhook fire", "/srv/hooks"),
    ]
    .concat();

    recall_in(dir.path())
        .args(["rank", "5", "0", "200", "node.js webhook", "simple", "node webhook"])
        .write_stdin(rows)
        .assert()
        .success()
        .stdout(predicate::str::contains("[eeeeeeee] node.js[1] (1 matches"))
        .stdout(predicate::str::contains("[ffffffff] webhook[1] (1 matches"));
}

#[test]
fn test_rank_excludes_active_session() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .env("CLAUDE_SESSION_ID", "aaaaaaaa-1")
        .args(["rank", "5", "1", "200", "webhook retry", "simple", "webhook retri"])
        .write_stdin(candidates())
        .assert()
        .success()
        .stdout(predicate::str::contains("aaaaaaaa").not())
        .stdout(predicate::str::contains("Found matches in 1 sessions"));
}

#[test]
fn test_rank_no_rows() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook", "simple"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("No matches found.\n");
}

#[test]
fn test_rank_strict_noise_floor() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook|retry", "strict"])
        .write_stdin(candidates())
        .assert()
        .success()
        .stdout("\nFound matches in 0 sessions (strict mode)\n");
}

#[test]
fn test_rank_json_output() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["--format", "json", "rank", "5", "1", "200", "webhook", "simple"])
        .write_stdin(candidates())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"short_id\": \"aaaaaaaa\""))
        .stdout(predicate::str::contains("\"mode\": \"simple\""));
}

#[test]
fn test_rank_insufficient_arguments_exit_1() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook"])
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn test_rank_unknown_mode_exit_1() {
    let dir = tempdir().unwrap();

    recall_in(dir.path())
        .args(["rank", "5", "1", "200", "webhook", "fuzzy"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fuzzy"));
}
