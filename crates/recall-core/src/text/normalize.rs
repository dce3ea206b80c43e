//! Canonical word → base-form mapping shared by index build and query parsing.
//!
//! The index's normalized column and the normalized query are both produced
//! by [`Normalizer::normalize_word`]; any divergence between the two would
//! silently stop ASCII keywords from matching.

use std::cell::RefCell;
use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};

use super::irregulars::base_form;
use super::ascii_words;

/// Memo entries kept before the cache stops growing
const CACHE_CAPACITY: usize = 100_000;

/// Snowball English stemmer plus irregular-form table, memoized per process
pub struct Normalizer {
    stemmer: Stemmer,
    cache: RefCell<HashMap<String, String>>,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer {
            stemmer: Stemmer::create(Algorithm::English),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Normalize a single alphabetic token.
    ///
    /// Tokens shorter than two characters are only lowercased. Irregular forms
    /// win over stemming, so "ran" becomes "run" rather than a stem of "ran".
    pub fn normalize_word(&self, word: &str) -> String {
        if let Some(hit) = self.cache.borrow().get(word) {
            return hit.clone();
        }
        let normalized = self.compute(word);
        let mut cache = self.cache.borrow_mut();
        if cache.len() < CACHE_CAPACITY {
            cache.insert(word.to_string(), normalized.clone());
        }
        normalized
    }

    fn compute(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.chars().count() < 2 {
            return lower;
        }
        if let Some(base) = base_form(&lower) {
            return base.to_string();
        }
        self.stemmer.stem(&lower).into_owned()
    }

    /// Normalized column for an index row: every ASCII-alphabetic word in
    /// order, multiplicity preserved, joined by single spaces. Anything else
    /// (CJK, digits, punctuation) is dropped.
    pub fn normalize_text(&self, text: &str) -> String {
        ascii_words(text)
            .map(|w| self.normalize_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize a free-text query.
    ///
    /// Whitespace-separated ASCII tokens contribute their alphabetic words
    /// normalized exactly as [`Normalizer::normalize_text`] would; non-ASCII
    /// tokens are passed through untouched for raw-text matching.
    pub fn normalize_query(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        for token in text.split_whitespace() {
            if token.is_ascii() {
                out.extend(ascii_words(token).map(|w| self.normalize_word(w)));
            } else {
                out.push(token.to_string());
            }
        }
        out.join(" ")
    }

    /// Normalized form of one query keyword: its ASCII-alphabetic words,
    /// normalized and space-joined so multi-word keywords ("node.js",
    /// "don't") match as a phrase in the normalized column.
    ///
    /// Returns `None` when the keyword has no alphabetic word, e.g. "404".
    pub fn normalize_keyword(&self, keyword: &str) -> Option<String> {
        let words: Vec<String> = ascii_words(keyword).map(|w| self.normalize_word(w)).collect();
        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    #[cfg(test)]
    fn cached_entries(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
