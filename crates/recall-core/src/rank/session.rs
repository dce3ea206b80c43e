//! Per-session aggregation, ordering and adaptive cutoff

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use super::query::{Query, QueryMode};
use crate::index::{IndexRow, MessageType};

/// A candidate row with its per-keyword occurrence counts (zero counts omitted)
#[derive(Debug, Clone)]
pub struct MatchedMessage {
    pub row: IndexRow,
    pub keyword_counts: HashMap<String, usize>,
}

impl MatchedMessage {
    pub fn new(row: IndexRow, query: &Query) -> Self {
        let mut keyword_counts = HashMap::new();
        for term in &query.terms {
            let count = term.count_in(&row.record.text, &row.normalized_text);
            if count > 0 {
                keyword_counts.insert(term.raw.clone(), count);
            }
        }
        MatchedMessage {
            row,
            keyword_counts,
        }
    }

    /// Distinct keywords present in this message
    pub fn keyword_hits(&self) -> usize {
        self.keyword_counts.len()
    }
}

/// Everything known about one session for the current query
#[derive(Debug, Clone)]
pub struct SessionAggregate {
    pub session_id: String,
    pub messages: Vec<MatchedMessage>,
    pub keyword_counts: HashMap<String, usize>,
    /// Distinct keywords hit across the session; always zero in strict mode
    pub hits: usize,
    pub weighted_score: usize,
    pub latest_timestamp: String,
    /// Project of the session's first message
    pub project_path: String,
}

impl SessionAggregate {
    fn from_rows(session_id: String, rows: Vec<IndexRow>, query: &Query) -> Self {
        let messages: Vec<MatchedMessage> =
            rows.into_iter().map(|row| MatchedMessage::new(row, query)).collect();

        let mut keyword_counts: HashMap<String, usize> = HashMap::new();
        for message in &messages {
            for (keyword, count) in &message.keyword_counts {
                *keyword_counts.entry(keyword.clone()).or_insert(0) += count;
            }
        }

        let hits = match query.mode {
            QueryMode::Simple => keyword_counts.len(),
            QueryMode::Strict => 0,
        };
        let weighted_score = weighted_score(&keyword_counts, query);
        let latest_timestamp = messages
            .iter()
            .map(|m| m.row.record.timestamp.as_str())
            .max()
            .unwrap_or_default()
            .to_string();
        let project_path = messages
            .first()
            .map(|m| m.row.record.project_path.clone())
            .unwrap_or_default();

        SessionAggregate {
            session_id,
            messages,
            keyword_counts,
            hits,
            weighted_score,
            latest_timestamp,
            project_path,
        }
    }

    /// Deduplicated messages in this session
    pub fn matches(&self) -> usize {
        self.messages.len()
    }

    pub fn keyword_count(&self, keyword: &str) -> usize {
        self.keyword_counts.get(keyword).copied().unwrap_or(0)
    }
}

/// Σ count[k] × (n − position of k): earlier keywords weigh more
pub fn weighted_score(keyword_counts: &HashMap<String, usize>, query: &Query) -> usize {
    let n = query.len();
    query
        .keywords()
        .enumerate()
        .map(|(i, kw)| keyword_counts.get(kw).copied().unwrap_or(0) * (n - i))
        .sum()
}

/// Group rows by session in first-seen order, dropping duplicate
/// `(timestamp, type, text)` messages and the excluded session
pub fn aggregate<I>(rows: I, query: &Query, exclude_session: Option<&str>) -> Vec<SessionAggregate>
where
    I: IntoIterator<Item = IndexRow>,
{
    let exclude_session = exclude_session.filter(|s| !s.is_empty());
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, (Vec<IndexRow>, HashSet<(String, MessageType, String)>)> =
        HashMap::new();

    for row in rows {
        let record = &row.record;
        if exclude_session == Some(record.session_id.as_str()) {
            continue;
        }
        let key = (
            record.timestamp.clone(),
            record.message_type,
            record.text.clone(),
        );
        let (session_rows, seen) = grouped.entry(record.session_id.clone()).or_insert_with(|| {
            order.push(record.session_id.clone());
            (Vec::new(), HashSet::new())
        });
        if seen.insert(key) {
            session_rows.push(row);
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let (rows, _) = grouped.remove(&id)?;
            Some(SessionAggregate::from_rows(id, rows, query))
        })
        .collect()
}

/// Order sessions for display.
///
/// Simple mode: weighted score, distinct keyword hits, match count, recency,
/// all descending. Strict mode drops sessions under `strict_min_matches`
/// matches, then orders by match count and recency. Ties keep input order.
pub fn rank_sessions(
    mut sessions: Vec<SessionAggregate>,
    mode: QueryMode,
    strict_min_matches: usize,
) -> Vec<SessionAggregate> {
    match mode {
        QueryMode::Simple => sessions.sort_by(|a, b| {
            (b.weighted_score, b.hits, b.matches(), &b.latest_timestamp).cmp(&(
                a.weighted_score,
                a.hits,
                a.matches(),
                &a.latest_timestamp,
            ))
        }),
        QueryMode::Strict => {
            sessions.retain(|s| s.matches() >= strict_min_matches);
            sessions.sort_by_key(|s| Reverse((s.matches(), s.latest_timestamp.clone())));
        }
    }
    sessions
}

/// Number of leading sessions to keep.
///
/// Sessions are taken until their cumulative score reaches `fraction` of the
/// total, then the count is clamped into `[min, max]` and finally capped by
/// the number of sessions available.
pub fn adaptive_cutoff(scores: &[usize], fraction: f64, min: usize, max: usize) -> usize {
    if scores.is_empty() {
        return 0;
    }
    let total: usize = scores.iter().sum();
    let threshold = total as f64 * fraction;
    let mut cumulative = 0usize;
    let mut kept = 0;
    for score in scores {
        cumulative += score;
        kept += 1;
        if cumulative as f64 >= threshold {
            break;
        }
    }
    kept.min(max).max(min).min(scores.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Normalizer;

    fn row(session: &str, ts: &str, text: &str, normalized: &str) -> IndexRow {
        IndexRow::parse_line(&format!(
            "{}\t{}\tuser\t{}\t{}\t/proj/{}",
            session, ts, text, normalized, session
        ))
        .unwrap()
    }

    fn simple(raw: &str) -> Query {
        Query::parse(raw, QueryMode::Simple, &Normalizer::new()).unwrap()
    }

    #[test]
    fn test_cutoff_ten_equal_sessions() {
        assert_eq!(adaptive_cutoff(&[1; 10], 0.7, 3, 8), 7);
    }

    #[test]
    fn test_cutoff_fewer_than_minimum() {
        assert_eq!(adaptive_cutoff(&[5, 1], 0.7, 3, 8), 2);
        assert_eq!(adaptive_cutoff(&[], 0.7, 3, 8), 0);
    }

    #[test]
    fn test_cutoff_clamps_into_range() {
        // first session alone holds 70%
        assert_eq!(adaptive_cutoff(&[100, 1, 1, 1, 1], 0.7, 3, 8), 3);
        assert_eq!(adaptive_cutoff(&[1; 20], 0.7, 3, 8), 8);
        assert_eq!(adaptive_cutoff(&[0, 0, 0, 0], 0.7, 3, 8), 3);
    }

    #[test]
    fn test_aggregate_dedupes_and_excludes_active_session() {
        let q = simple("deploy");
        let rows = vec![
            row("a", "t1", "deploy now", "deploy now"),
            row("a", "t1", "deploy now", "deploy now"),
            row("b", "t2", "deploy later", "deploy later"),
            row("a", "t3", "deploy again", "deploy again"),
        ];
        let sessions = aggregate(rows, &q, Some("b"));
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].session_id, "a");
        assert_eq!(sessions[0].matches(), 2);
        assert_eq!(sessions[0].keyword_count("deploy"), 2);
        assert_eq!(sessions[0].latest_timestamp, "t3");
        assert_eq!(sessions[0].project_path, "/proj/a");
    }

    #[test]
    fn test_earlier_keyword_outranks_later() {
        let q = simple("webhook retry");
        let rows = vec![
            row("b", "t9", "retry", "retri"),
            row("a", "t1", "webhook", "webhook"),
        ];
        let sessions = aggregate(rows, &q, None);
        let a = sessions.iter().find(|s| s.session_id == "a").unwrap();
        let b = sessions.iter().find(|s| s.session_id == "b").unwrap();
        assert_eq!(a.matches(), b.matches());
        assert!(a.weighted_score >= b.weighted_score);

        let ranked = rank_sessions(sessions, QueryMode::Simple, 5);
        assert_eq!(ranked[0].session_id, "a");
    }

    #[test]
    fn test_simple_ties_fall_back_to_hits_then_recency() {
        let q = simple("alpha beta");
        let rows = vec![
            row("old", "2024-01-01", "beta beta beta", "beta beta beta"),
            row("mixed", "2024-01-02", "alpha beta", "alpha beta"),
            row("new", "2024-03-01", "beta beta beta", "beta beta beta"),
        ];
        let ranked = rank_sessions(aggregate(rows, &q, None), QueryMode::Simple, 5);
        let order: Vec<&str> = ranked.iter().map(|s| s.session_id.as_str()).collect();
        assert_eq!(order, vec!["mixed", "new", "old"]);
    }

    #[test]
    fn test_strict_floor_drops_small_sessions() {
        let q = Query::parse("deploy|ship", QueryMode::Strict, &Normalizer::new()).unwrap();
        let mut rows = Vec::new();
        for i in 0..4 {
            rows.push(row("small", &format!("t{}", i), &format!("deploy {}", i), "deploy"));
        }
        for i in 0..5 {
            rows.push(row("big", &format!("t{}", i), &format!("ship {}", i), "ship"));
        }
        let sessions = aggregate(rows, &q, None);
        assert!(sessions.iter().all(|s| s.hits == 0));

        let ranked = rank_sessions(sessions, QueryMode::Strict, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].session_id, "big");
    }
}
