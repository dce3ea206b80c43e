//! CLI argument parsing for recall
//!
//! Global flags: --data-dir, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DiscoverArgs, IndexArgs, KeywordsArgs, NormalizeArgs, RankArgs};
pub use output::OutputFormat;

/// Recall - bilingual search over past conversation transcripts
#[derive(Parser, Debug)]
#[command(name = "recall")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the index, keyword file and reference data
    #[arg(long, global = true, env = "RECALL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the normalized index from raw conversation records
    Index(IndexArgs),

    /// Mine the index for new domain keywords
    Discover(DiscoverArgs),

    /// Rank pre-filtered index rows (read from stdin) against a query
    Rank(RankArgs),

    /// Normalize a query the way the index is normalized
    Normalize(NormalizeArgs),

    /// Extract search keywords from text
    Keywords(KeywordsArgs),
}
