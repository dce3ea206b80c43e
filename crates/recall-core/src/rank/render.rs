//! Ranked result view and its plain-text rendering

use std::fmt;
use std::path::Path;

use chrono::DateTime;
use serde::Serialize;

use super::query::QueryMode;
use crate::index::MessageType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub role: MessageType,
    pub text: String,
}

/// One displayed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSession {
    pub session_id: String,
    pub short_id: String,
    /// Non-zero keyword counts in query order
    pub keyword_counts: Vec<KeywordCount>,
    pub matches: usize,
    pub weighted_score: usize,
    pub timestamp: String,
    pub date: String,
    pub project: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    pub snippets: Vec<Snippet>,
    /// Matched messages not shown as snippets
    pub more: usize,
}

/// Final output of the rank formatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub mode: QueryMode,
    pub keywords: Vec<String>,
    /// Sessions present in the input after exclusion and dedup
    pub candidate_sessions: usize,
    pub sessions: Vec<RankedSession>,
    #[serde(skip)]
    pub messages_limit: usize,
}

impl RankedResult {
    /// Short ids of the displayed sessions, for the stderr side channel
    pub fn short_ids(&self) -> Vec<&str> {
        self.sessions.iter().map(|s| s.short_id.as_str()).collect()
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    fn fmt_session(&self, f: &mut fmt::Formatter<'_>, session: &RankedSession) -> fmt::Result {
        let counts = session
            .keyword_counts
            .iter()
            .map(|kc| format!("{}[{}]", kc.keyword, kc.count))
            .collect::<Vec<_>>()
            .join(" ");

        if session.topics.is_empty() {
            writeln!(
                f,
                "[{}] {} ({} matches | {} | {})",
                session.short_id, counts, session.matches, session.date, session.project
            )?;
        } else {
            writeln!(
                f,
                "[{}] {} ({} matches | {}) → {}",
                session.short_id,
                counts,
                session.matches,
                session.date,
                session.topics.join(", ")
            )?;
        }

        if self.messages_limit == 0 {
            return Ok(());
        }
        for snippet in &session.snippets {
            writeln!(f, "{} {}", snippet.role.label(), snippet.text)?;
        }
        if session.more > 0 {
            writeln!(f, "... and {} more matches", session.more)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidate_sessions == 0 {
            return writeln!(f, "No matches found.");
        }
        for session in &self.sessions {
            self.fmt_session(f, session)?;
        }
        match self.mode {
            QueryMode::Simple => writeln!(
                f,
                "\nFound matches in {} sessions (searched {} keywords)",
                self.sessions.len(),
                self.keywords.len()
            ),
            QueryMode::Strict => writeln!(
                f,
                "\nFound matches in {} sessions (strict mode)",
                self.sessions.len()
            ),
        }
    }
}

/// Calendar date of a timestamp in its own offset; non-RFC 3339 values keep their first ten characters
pub fn display_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.date_naive().to_string(),
        Err(_) => timestamp.chars().take(10).collect(),
    }
}

/// Show paths under `home` with a leading `~`
pub fn shorten_home(path: &str, home: Option<&Path>) -> String {
    let Some(home) = home.and_then(|h| h.to_str()).filter(|h| !h.is_empty()) else {
        return path.to_string();
    };
    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
        _ => path.to_string(),
    }
}
