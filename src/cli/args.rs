//! Subcommand argument structures

use std::path::PathBuf;

use clap::Args;
use recall_core::rank::QueryMode;

use super::parse::parse_query_mode;

/// Arguments for the index command.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Raw five-field records (default: stdin)
    pub input: Option<PathBuf>,

    /// Index file to replace (default: stdout)
    pub output: Option<PathBuf>,
}

/// Arguments for the discover command.
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Merge the top new keywords into the custom keyword file
    #[arg(long)]
    pub write: bool,

    /// Index file to mine (default: the data directory's index)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

/// Arguments for the rank command.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Maximum sessions to show after the adaptive cutoff
    pub sessions: usize,

    /// Snippets shown per session
    pub messages: usize,

    /// Snippet length in characters
    pub context: usize,

    /// Query as typed
    pub query: String,

    /// simple or strict
    #[arg(value_parser = parse_query_mode)]
    pub mode: QueryMode,

    /// Normalized query (default: normalized from QUERY)
    pub normalized: Option<String>,

    /// Summarize each session with its most frequent other keywords
    #[arg(long)]
    pub topics: bool,

    /// Session to leave out of the results
    #[arg(long, env = "CLAUDE_SESSION_ID")]
    pub exclude_session: Option<String>,
}

/// Arguments for the normalize command.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Query words (default: one query per stdin line)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

/// Arguments for the keywords command.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Text to extract from (default: stdin)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Maximum keywords (default from config)
    #[arg(long)]
    pub max: Option<usize>,
}
