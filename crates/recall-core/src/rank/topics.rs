use std::collections::{HashMap, HashSet};

use super::query::Query;
use crate::extract::BilingualExtractor;

/// Most frequent extracted keywords across a session's messages, excluding
/// the query's own keywords. Ties keep first-seen order.
pub fn session_topics<'t, I>(
    extractor: &BilingualExtractor,
    texts: I,
    query: &Query,
    limit: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = &'t str>,
{
    let exclude: HashSet<String> = query.keywords().map(str::to_lowercase).collect();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for text in texts {
        for word in extractor.keyword_occurrences(text, &exclude) {
            let count = counts.entry(word.clone()).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }
    }

    order.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    order.truncate(limit);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::query::QueryMode;
    use crate::text::Normalizer;

    #[test]
    fn test_topics_exclude_query_and_rank_by_count() {
        let extractor = BilingualExtractor::bigram();
        let query = Query::parse("webhook", QueryMode::Simple, &Normalizer::new()).unwrap();
        let texts = [
            "webhook retries against the gateway",
            "gateway timeout on webhook",
            "gateway logs show retries",
        ];
        let topics = session_topics(&extractor, texts, &query, 2);
        assert_eq!(topics, vec!["gateway", "retries"]);
    }

    #[test]
    fn test_topics_include_cjk_segments() {
        let extractor = BilingualExtractor::bigram();
        let query = Query::parse("飞书", QueryMode::Simple, &Normalizer::new()).unwrap();
        let topics = session_topics(&extractor, ["飞书日历", "日历同步"], &query, 4);
        assert_eq!(topics[0], "日历");
        assert!(!topics.contains(&"飞书".to_string()));
    }
}
