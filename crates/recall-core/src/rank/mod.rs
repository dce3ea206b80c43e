//! Query-time ranking of pre-filtered index rows
//!
//! Rows arrive already narrowed by an external filter. They are grouped by
//! session, scored against the query keywords, ordered, truncated by the
//! adaptive cutoff, and rendered with snippets.

mod query;
mod render;
mod session;
mod snippet;
mod topics;

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::RankConfig;
use crate::error::Result;
use crate::extract::BilingualExtractor;
use crate::index::IndexRow;
use crate::trace_time;

pub use query::{Query, QueryMode, QueryTerm};
pub use render::{display_date, shorten_home, KeywordCount, RankedResult, RankedSession, Snippet};
pub use session::{
    adaptive_cutoff, aggregate, rank_sessions, weighted_score, MatchedMessage, SessionAggregate,
};
pub use snippet::extract_snippet;
pub use topics::session_topics;

/// Per-invocation display limits
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    /// Upper bound on displayed sessions after the cutoff; zero leaves only the cutoff
    pub sessions_limit: usize,
    /// Snippets shown per session
    pub messages_limit: usize,
    /// Snippet budget in characters
    pub context: usize,
    pub topics: bool,
    /// Active session to leave out of the results
    pub exclude_session: Option<String>,
}

/// Read six-field index rows, skipping malformed lines
pub fn read_rows<R: BufRead>(mut input: R) -> Result<Vec<IndexRow>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }
        match IndexRow::parse_line(line) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "skipped malformed candidate rows");
    }
    Ok(rows)
}

/// Scores, orders and renders candidate sessions
pub struct RankFormatter<'a> {
    extractor: &'a BilingualExtractor,
    config: &'a RankConfig,
    home: Option<PathBuf>,
}

impl<'a> RankFormatter<'a> {
    pub fn new(extractor: &'a BilingualExtractor, config: &'a RankConfig) -> Self {
        RankFormatter {
            extractor,
            config,
            home: dirs::home_dir(),
        }
    }

    /// Override the directory shown as `~`
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    #[tracing::instrument(skip_all, fields(mode = %query.mode, keywords = query.len()))]
    pub fn rank<I>(&self, rows: I, query: &Query, options: &RankOptions) -> RankedResult
    where
        I: IntoIterator<Item = IndexRow>,
    {
        let start = Instant::now();
        let sessions = aggregate(rows, query, options.exclude_session.as_deref());
        let candidate_sessions = sessions.len();

        let mut ranked = rank_sessions(sessions, query.mode, self.config.strict_min_matches);
        let scores: Vec<usize> = ranked.iter().map(|s| s.weighted_score).collect();
        let mut keep = adaptive_cutoff(
            &scores,
            self.config.cutoff_fraction,
            self.config.min_sessions,
            self.config.max_sessions,
        );
        if options.sessions_limit > 0 {
            keep = keep.min(options.sessions_limit);
        }
        ranked.truncate(keep);
        tracing::debug!(candidate_sessions, kept = ranked.len(), "ranked sessions");

        let sessions = ranked
            .iter()
            .map(|s| self.present(s, query, options))
            .collect();
        trace_time!(start, "rank");

        RankedResult {
            mode: query.mode,
            keywords: query.keywords().map(str::to_string).collect(),
            candidate_sessions,
            sessions,
            messages_limit: options.messages_limit,
        }
    }

    fn present(&self, session: &SessionAggregate, query: &Query, options: &RankOptions) -> RankedSession {
        let keyword_counts = query
            .keywords()
            .filter_map(|kw| {
                let count = session.keyword_count(kw);
                (count > 0).then(|| KeywordCount {
                    keyword: kw.to_string(),
                    count,
                })
            })
            .collect();

        let topics = if options.topics {
            session_topics(
                self.extractor,
                session.messages.iter().map(|m| m.row.record.text.as_str()),
                query,
                self.config.topic_count,
            )
        } else {
            Vec::new()
        };

        let mut by_hits: Vec<&MatchedMessage> = session.messages.iter().collect();
        by_hits.sort_by_key(|m| std::cmp::Reverse(m.keyword_hits()));
        let snippets = by_hits
            .into_iter()
            .take(options.messages_limit)
            .map(|m| Snippet {
                role: m.row.record.message_type,
                text: extract_snippet(&m.row.record.text, &m.row.normalized_text, query, options.context),
            })
            .collect();

        RankedSession {
            session_id: session.session_id.clone(),
            short_id: session
                .session_id
                .chars()
                .take(self.config.short_id_len)
                .collect(),
            keyword_counts,
            matches: session.matches(),
            weighted_score: session.weighted_score,
            timestamp: session.latest_timestamp.clone(),
            date: display_date(&session.latest_timestamp),
            project: shorten_home(&session.project_path, self.home.as_deref()),
            topics,
            snippets,
            more: session.matches().saturating_sub(options.messages_limit),
        }
    }
}
