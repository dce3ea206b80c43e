//! Snippet windows around the first keyword occurrence of a message

use super::query::Query;

const ELLIPSIS: &str = "...";

/// Cut `text` down to roughly `context` characters around a query keyword.
///
/// Text within budget is returned unmodified. Otherwise the window starts a
/// third of the budget before the first raw keyword occurrence. When no raw
/// keyword occurs, the position of the first normalized keyword in
/// `normalized_text` is mapped onto the raw whitespace-separated words; the
/// mapping assumes both sequences line up word for word, which fails when
/// normalization dropped tokens. Without any position the leading `context`
/// characters are returned.
pub fn extract_snippet(text: &str, normalized_text: &str, query: &Query, context: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= context {
        return text.to_string();
    }

    let position = raw_position(text, query).or_else(|| normalized_position(text, normalized_text, query));
    match position {
        Some(pos) => window(&chars, pos, context),
        None => {
            let mut head: String = chars[..context].iter().collect();
            head.push_str(ELLIPSIS);
            head
        }
    }
}

/// Character offset of the first keyword (in query order) found literally
fn raw_position(text: &str, query: &Query) -> Option<usize> {
    query
        .terms
        .iter()
        .find_map(|term| term.find_literal(text))
        .map(|byte| text[..byte].chars().count())
}

fn normalized_position(text: &str, normalized_text: &str, query: &Query) -> Option<usize> {
    let norm_words: Vec<&str> = normalized_text.split_whitespace().collect();
    // Phrase keywords ("node js") are located by their first word
    let idx = query.terms.iter().find_map(|t| {
        let first = t.normalized.split(' ').next()?;
        norm_words.iter().position(|w| *w == first)
    })?;

    let words: Vec<&str> = text.split_whitespace().collect();
    if idx >= words.len() {
        return None;
    }
    Some(words[..idx].iter().map(|w| w.chars().count() + 1).sum())
}

fn window(chars: &[char], pos: usize, context: usize) -> String {
    let before = context / 3;
    let after = context - before;
    let start = pos.saturating_sub(before);
    let end = (pos + after).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.extend(&chars[start..end.max(start)]);
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::query::QueryMode;
    use crate::text::Normalizer;

    fn query(raw: &str, normalized: &str) -> Query {
        Query::with_normalized(raw, normalized, QueryMode::Simple, &Normalizer::new()).unwrap()
    }

    #[test]
    fn test_short_text_is_unmodified() {
        let q = query("webhook", "webhook");
        assert_eq!(extract_snippet("set up a webhook", "set up a webhook", &q, 100), "set up a webhook");
        assert_eq!(extract_snippet("exactly", "exactly", &q, 7), "exactly");
    }

    #[test]
    fn test_window_around_raw_match() {
        let q = query("WebHook", "webhook");
        let text = "0123456789 webhook 0123456789 0123456789";
        assert_eq!(extract_snippet(text, "webhook", &q, 12), "...789 webhook ...");
    }

    #[test]
    fn test_window_counts_characters_not_bytes() {
        let q = query("飞书", "飞书");
        let text = "一二三四五六七八九十飞书甲乙丙丁戊己庚辛壬癸";
        assert_eq!(extract_snippet(text, "", &q, 9), "...八九十飞书甲乙丙丁...");
    }

    #[test]
    fn test_match_near_start_has_no_prefix() {
        let q = query("alpha", "alpha");
        let text = "alpha beta gamma delta epsilon";
        assert_eq!(extract_snippet(text, "alpha", &q, 10), "alpha b...");
    }

    #[test]
    fn test_normalized_position_fallback() {
        let q = query("zzz", "gggg");
        let text = "aaaa bbbb cccc dddd eeee ffff gggg hhhh iiii jjjj";
        assert_eq!(extract_snippet(text, text, &q, 12), "...fff gggg hhh...");
    }

    #[test]
    fn test_no_position_returns_head() {
        let q = query("zzz", "zzz");
        let text = "aaaa bbbb cccc dddd";
        assert_eq!(extract_snippet(text, "aaaa bbbb cccc dddd", &q, 9), "aaaa bbbb...");
    }
}
