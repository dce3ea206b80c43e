//! Bilingual keyword extraction for mixed English/Chinese text
//!
//! Text is partitioned into Latin and CJK runs. Latin runs yield lowercased
//! words and digit groups of three or more characters; CJK runs go through
//! the configured [`Segmenter`]. Keywords keep first-appearance order, since
//! downstream ranking treats the first keyword as the most important.

mod segment;

pub use segment::{BigramSegmenter, JiebaSegmenter, Segmenter};

use std::collections::HashSet;

use crate::text::stopwords::{is_chinese_stopword, is_english_stopword};
use crate::text::{latin_terms, latin_words, split_runs, Run};

/// Default keyword cap for hint extraction
pub const DEFAULT_MAX_KEYWORDS: usize = 6;

/// Minimum CJK segment length, in characters
const MIN_CJK_LEN: usize = 2;

/// A candidate keyword tagged with the script it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Latin(String),
    Cjk(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Latin(s) | Token::Cjk(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Token::Latin(s) | Token::Cjk(s) => s,
        }
    }

    fn is_stopword(&self) -> bool {
        match self {
            Token::Latin(s) => is_english_stopword(s),
            Token::Cjk(s) => is_chinese_stopword(s),
        }
    }
}

/// Keyword extractor over a pluggable CJK segmenter
pub struct BilingualExtractor {
    segmenter: Box<dyn Segmenter>,
}

impl BilingualExtractor {
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        BilingualExtractor { segmenter }
    }

    /// Extractor using overlapping bigrams for CJK text
    pub fn bigram() -> Self {
        Self::new(Box::new(BigramSegmenter))
    }

    pub fn segmenter_name(&self) -> &'static str {
        self.segmenter.name()
    }

    /// Every candidate token in order, duplicates kept, before stopword filtering
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for run in split_runs(text) {
            match run {
                Run::Latin(s) => tokens.extend(latin_terms(s).map(Token::Latin)),
                Run::Cjk(s) => tokens.extend(self.cjk_segments(s).map(Token::Cjk)),
            }
        }
        tokens
    }

    fn cjk_segments<'a>(&self, run: &'a str) -> impl Iterator<Item = String> + 'a {
        self.segmenter
            .segment(run)
            .into_iter()
            .filter(|w| w.chars().count() >= MIN_CJK_LEN)
    }

    /// Stopword-filtered keyword occurrences, duplicates kept, minus `exclude`
    /// (matched lowercased for Latin, exactly for CJK)
    pub fn keyword_occurrences(&self, text: &str, exclude: &HashSet<String>) -> Vec<String> {
        self.tokens(text)
            .into_iter()
            .filter(|t| !t.is_stopword() && !exclude.contains(t.as_str()))
            .map(Token::into_string)
            .collect()
    }

    /// Ordered, deduplicated keywords, at most `cap` of them.
    ///
    /// Empty or whitespace-only input yields an empty list.
    pub fn extract(&self, text: &str, exclude: Option<&HashSet<String>>, cap: usize) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let empty = HashSet::new();
        let exclude = exclude.unwrap_or(&empty);

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for keyword in self.keyword_occurrences(text, exclude) {
            if keywords.len() >= cap {
                break;
            }
            if seen.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }
        keywords
    }

    /// Unfiltered word set of a message, used for co-occurrence counting.
    ///
    /// Latin words only (no digit groups); CJK segments of two or more characters.
    pub fn vocabulary(&self, text: &str) -> HashSet<String> {
        let mut words = HashSet::new();
        for run in split_runs(text) {
            match run {
                Run::Latin(s) => words.extend(latin_words(s)),
                Run::Cjk(s) => words.extend(self.cjk_segments(s)),
            }
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bigram() -> BilingualExtractor {
        BilingualExtractor::bigram()
    }

    /// Segmenter that returns each run whole
    struct WholeRun;

    impl Segmenter for WholeRun {
        fn segment(&self, run: &str) -> Vec<String> {
            vec![run.to_string()]
        }

        fn name(&self) -> &'static str {
            "whole"
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(bigram().extract("", None, DEFAULT_MAX_KEYWORDS).is_empty());
        assert!(bigram().extract("   \n", None, DEFAULT_MAX_KEYWORDS).is_empty());
    }

    #[test]
    fn test_english_keywords_in_order() {
        let keywords = bigram().extract(
            "help me debug the feishu approval workflow",
            None,
            DEFAULT_MAX_KEYWORDS,
        );
        assert_eq!(keywords, vec!["feishu", "approval", "workflow"]);
    }

    #[test]
    fn test_status_codes_are_kept() {
        let keywords = bigram().extract("nginx returns 502 then 404", None, 6);
        assert_eq!(keywords, vec!["nginx", "returns", "502", "404"]);
    }

    #[test]
    fn test_mixed_script_order() {
        let extractor = BilingualExtractor::new(Box::new(WholeRun));
        let keywords = extractor.extract("feishu 审批流程 有问题", None, 6);
        assert_eq!(keywords, vec!["feishu", "审批流程", "有问题"]);
    }

    #[test]
    fn test_dedup_case_insensitive_latin() {
        let keywords = bigram().extract("Webhook webhook WEBHOOK retries", None, 6);
        assert_eq!(keywords, vec!["webhook", "retries"]);
    }

    #[test]
    fn test_bigram_fallback_filters_stopwords() {
        let keywords = bigram().extract("帮我看看飞书", None, 10);
        assert!(keywords.contains(&"飞书".to_string()));
        assert!(!keywords.contains(&"帮我".to_string()));
        assert!(!keywords.contains(&"看看".to_string()));
    }

    #[test]
    fn test_cap_is_respected() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel";
        let keywords = bigram().extract(text, None, 3);
        assert_eq!(keywords, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_exclusion_set() {
        let exclude: HashSet<String> = ["feishu".to_string()].into_iter().collect();
        let keywords = bigram().extract("Feishu calendar sync", Some(&exclude), 6);
        assert_eq!(keywords, vec!["calendar", "sync"]);
    }

    #[test]
    fn test_no_stopwords_returned() {
        let text = "the quick approval of this thing was running while 我们 的 日历";
        for keyword in bigram().extract(text, None, 20) {
            assert!(!is_english_stopword(&keyword));
            assert!(!is_chinese_stopword(&keyword));
        }
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "飞书 bitable 多维表格 oauth token 刷新";
        assert_eq!(bigram().extract(text, None, 6), bigram().extract(text, None, 6));
    }

    #[test]
    fn test_single_cjk_segments_dropped() {
        let extractor = BilingualExtractor::new(Box::new(WholeRun));
        assert!(extractor.extract("飞", None, 6).is_empty());
    }

    #[test]
    fn test_vocabulary_skips_digits_keeps_stopwords() {
        let words = bigram().vocabulary("The API returned 500 for 日历");
        assert!(words.contains("the"));
        assert!(words.contains("api"));
        assert!(!words.contains("500"));
        assert!(words.contains("日历"));
    }

    #[test]
    fn test_occurrences_keep_duplicates() {
        let occurrences = bigram().keyword_occurrences("oauth token oauth", &HashSet::new());
        assert_eq!(occurrences, vec!["oauth", "token", "oauth"]);
    }
}
