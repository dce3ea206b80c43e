//! Query keywords and their per-message matchers

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::{RecallError, Result};
use crate::text::{ascii_words, Normalizer};

/// How the query's keywords relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Independent terms, each weighted by position
    Simple,
    /// Whitespace-separated groups of `|` alternatives, all groups already
    /// required by the upstream filter
    Strict,
}

impl FromStr for QueryMode {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(QueryMode::Simple),
            "strict" => Ok(QueryMode::Strict),
            other => Err(RecallError::invalid_value("mode", other)),
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Simple => write!(f, "simple"),
            QueryMode::Strict => write!(f, "strict"),
        }
    }
}

/// Where a keyword is looked for in an index row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Haystack {
    /// Whole words of the normalized column
    Normalized,
    /// Whole tokens of the raw text; ASCII keywords without letters ("404")
    RawWord,
    /// Any substring of the raw text; non-ASCII keywords
    RawSubstring,
}

/// One query keyword with its normalized form
#[derive(Debug, Clone)]
pub struct QueryTerm {
    /// Lowercased keyword as typed
    pub raw: String,
    pub normalized: String,
    matcher: Regex,
    literal: Regex,
    haystack: Haystack,
}

impl QueryTerm {
    /// `normalized` is the keyword's normalized form, `None` when it has no
    /// alphabetic word to normalize.
    fn new(raw: String, normalized: Option<String>) -> Result<Self> {
        let literal = case_insensitive(&regex::escape(&raw), &raw)?;
        let (haystack, normalized) = match normalized {
            _ if !raw.is_ascii() => (Haystack::RawSubstring, raw.clone()),
            Some(norm) => (Haystack::Normalized, norm),
            None => (Haystack::RawWord, raw.clone()),
        };
        let matcher = match haystack {
            Haystack::Normalized => {
                case_insensitive(&format!(r"\b{}\b", regex::escape(&normalized)), &raw)?
            }
            Haystack::RawWord | Haystack::RawSubstring => literal.clone(),
        };
        Ok(QueryTerm {
            raw,
            normalized,
            matcher,
            literal,
            haystack,
        })
    }

    /// Byte offset of the first case-insensitive literal occurrence in raw text
    pub fn find_literal(&self, text: &str) -> Option<usize> {
        self.literal.find(text).map(|m| m.start())
    }

    /// Occurrences in a row: whole normalized words for alphabetic ASCII
    /// keywords, whole raw tokens for other ASCII keywords, raw substrings
    /// for everything else
    pub fn count_in(&self, text: &str, normalized_text: &str) -> usize {
        match self.haystack {
            Haystack::Normalized => self.matcher.find_iter(normalized_text).count(),
            Haystack::RawSubstring => self.matcher.find_iter(text).count(),
            Haystack::RawWord => self
                .matcher
                .find_iter(text)
                .filter(|m| {
                    let before = text[..m.start()].chars().next_back();
                    let after = text[m.end()..].chars().next();
                    !before.is_some_and(char::is_alphanumeric)
                        && !after.is_some_and(char::is_alphanumeric)
                })
                .count(),
        }
    }
}

fn case_insensitive(pattern: &str, keyword: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| RecallError::invalid_value("query keyword", format!("{}: {}", keyword, e)))
}

/// Parsed query: ordered keywords, first = most important
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub normalized: String,
    pub mode: QueryMode,
    pub terms: Vec<QueryTerm>,
}

impl Query {
    /// Parse a query, normalizing each keyword on its own.
    pub fn parse(raw: &str, mode: QueryMode, normalizer: &Normalizer) -> Result<Self> {
        let terms = split_keywords(raw, mode)
            .into_iter()
            .map(|kw| {
                let norm = normalizer.normalize_keyword(&kw);
                QueryTerm::new(kw, norm)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Query {
            raw: raw.to_string(),
            normalized: normalizer.normalize_query(raw),
            mode,
            terms,
        })
    }

    /// Parse a query with a caller-supplied normalized form.
    ///
    /// Each ASCII keyword takes as many normalized words as it has alphabetic
    /// words ("404" takes none, "node.js" takes two) and each non-ASCII
    /// keyword takes one, mirroring [`Normalizer::normalize_query`]. When the
    /// supplied words do not add up to that shape, every keyword is
    /// normalized on its own instead.
    pub fn with_normalized(
        raw: &str,
        normalized: &str,
        mode: QueryMode,
        normalizer: &Normalizer,
    ) -> Result<Self> {
        let keywords = split_keywords(raw, mode);
        let normalized_words: Vec<String> = normalized
            .split(|c: char| c.is_whitespace() || c == '|')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        let widths: Vec<usize> = keywords
            .iter()
            .map(|kw| if kw.is_ascii() { ascii_words(kw).count() } else { 1 })
            .collect();
        if widths.iter().sum::<usize>() != normalized_words.len() {
            tracing::debug!(
                keywords = keywords.len(),
                normalized = normalized_words.len(),
                "normalized query does not line up with keywords"
            );
            let mut query = Query::parse(raw, mode, normalizer)?;
            query.normalized = normalized.to_string();
            return Ok(query);
        }

        let mut words = normalized_words.into_iter();
        let terms = keywords
            .into_iter()
            .zip(widths)
            .map(|(kw, width)| {
                let norm = (width > 0)
                    .then(|| words.by_ref().take(width).collect::<Vec<_>>().join(" "));
                QueryTerm::new(kw, norm)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Query {
            raw: raw.to_string(),
            normalized: normalized.to_string(),
            mode,
            terms,
        })
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.raw.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Lowercased keywords in query order; strict `|` groups are flattened
fn split_keywords(raw: &str, mode: QueryMode) -> Vec<String> {
    match mode {
        QueryMode::Simple => raw.split_whitespace().map(str::to_lowercase).collect(),
        QueryMode::Strict => raw
            .split_whitespace()
            .flat_map(|group| group.split('|'))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect(),
    }
}
