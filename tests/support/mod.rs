use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for recall
pub fn recall() -> Command {
    cargo_bin_cmd!("recall")
}

/// A recall command bound to `dir` as data directory, isolated from the caller's environment
pub fn recall_in(dir: &Path) -> Command {
    let mut cmd = recall();
    cmd.env("RECALL_DATA_DIR", dir)
        .env_remove("CLAUDE_SESSION_ID")
        .env_remove("RUST_LOG")
        .env_remove("RECALL_LOG");
    cmd
}

/// Data directory whose config selects bigram segmentation and the given seeds
#[allow(dead_code)]
pub fn setup_data_dir(seeds: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let seeds = seeds
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        dir.path().join("config.toml"),
        format!(
            "[extract]\nsegmenter = \"bigram\"\n\n[discovery]\nseeds = [{}]\n",
            seeds
        ),
    )
    .unwrap();
    dir
}

/// Six-field index row
#[allow(dead_code)]
pub fn index_row(session: &str, ts: &str, kind: &str, text: &str, normalized: &str, project: &str) -> String {
    format!("{}\t{}\t{}\t{}\t{}\t{}\n", session, ts, kind, text, normalized, project)
}
