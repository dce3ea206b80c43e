//! Text primitives: script runs, word extraction, normalization, stopwords

mod irregulars;
mod normalize;
pub mod stopwords;

pub use normalize::Normalizer;

use regex::Regex;
use std::sync::OnceLock;

static ASCII_WORD: OnceLock<Regex> = OnceLock::new();
static LATIN_TERM: OnceLock<Regex> = OnceLock::new();
static LATIN_WORD: OnceLock<Regex> = OnceLock::new();

/// Minimum length for Latin keywords and digit groups
pub const MIN_LATIN_LEN: usize = 3;

fn ascii_word_re() -> &'static Regex {
    ASCII_WORD.get_or_init(|| Regex::new(r"\b[a-zA-Z]+\b").expect("static regex"))
}

fn latin_term_re() -> &'static Regex {
    LATIN_TERM
        .get_or_init(|| Regex::new(r"\b(?:[a-zA-Z]{3,}|[0-9]{3,})\b").expect("static regex"))
}

fn latin_word_re() -> &'static Regex {
    LATIN_WORD.get_or_init(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("static regex"))
}

/// Every standalone ASCII-alphabetic word, in order, duplicates kept
pub fn ascii_words(text: &str) -> impl Iterator<Item = &str> {
    ascii_word_re().find_iter(text).map(|m| m.as_str())
}

/// Lowercased alphabetic words of at least three letters (no digits)
pub fn latin_words(text: &str) -> impl Iterator<Item = String> + '_ {
    latin_word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Lowercased alphabetic words and digit groups of at least three characters
pub fn latin_terms(text: &str) -> impl Iterator<Item = String> + '_ {
    latin_term_re()
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// CJK ideographs plus Japanese kana
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fff}' |  // CJK Unified Ideographs
        '\u{3040}'..='\u{309f}' |  // Hiragana
        '\u{30a0}'..='\u{30ff}'    // Katakana
    )
}

/// Chinese ideographs only; the bigram fallback keeps nothing else
pub fn is_han(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

/// A maximal single-script stretch of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    Latin(&'a str),
    Cjk(&'a str),
}

/// Partition text into alternating Latin and CJK runs, skipping whitespace-only Latin runs
pub fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current_cjk: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let cjk = is_cjk(c);
        match current_cjk {
            Some(prev) if prev != cjk => {
                push_run(&mut runs, &text[start..i], prev);
                start = i;
            }
            _ => {}
        }
        current_cjk = Some(cjk);
    }
    if let Some(prev) = current_cjk {
        push_run(&mut runs, &text[start..], prev);
    }
    runs
}

fn push_run<'a>(runs: &mut Vec<Run<'a>>, slice: &'a str, cjk: bool) {
    if cjk {
        runs.push(Run::Cjk(slice));
    } else if !slice.trim().is_empty() {
        runs.push(Run::Latin(slice));
    }
}
