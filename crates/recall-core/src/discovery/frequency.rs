//! Background frequency references for domain-specificity scoring

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// General-language frequency of a word, as a fraction of the reference corpus
pub trait BackgroundFrequency {
    /// `None` when the word has no known background entry
    fn relative_frequency(&self, word: &str) -> Option<f64>;
}

/// Word counts loaded from a reference file
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
    fold_case: bool,
}

impl FrequencyTable {
    /// Build from `(word, count)` pairs
    pub fn from_counts<I, S>(entries: I, fold_case: bool) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable {
            fold_case,
            ..Default::default()
        };
        for (word, count) in entries {
            table.insert(word.as_ref(), count);
        }
        table
    }

    fn insert(&mut self, word: &str, count: u64) {
        let key = if self.fold_case {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        self.counts.insert(key, count);
        self.total += count;
    }

    /// English reference: `word<space>count` per line, case-folded.
    ///
    /// A missing or unreadable file yields an empty table.
    pub fn load_english(path: &Path) -> Self {
        Self::load(path, true)
    }

    /// Chinese reference in jieba dictionary format: `word freq [tag]` per line
    pub fn load_jieba_dict(path: &Path) -> Self {
        Self::load(path, false)
    }

    fn load(path: &Path, fold_case: bool) -> Self {
        let mut table = FrequencyTable {
            fold_case,
            ..Default::default()
        };
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "frequency reference unavailable");
                return table;
            }
        };

        let mut skipped = 0usize;
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "stopped reading frequency reference");
                    break;
                }
            };
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next().map(str::parse::<u64>)) {
                (Some(word), Some(Ok(count))) => table.insert(word, count),
                _ => skipped += 1,
            }
        }
        tracing::debug!(
            path = %path.display(),
            words = table.len(),
            total = table.total,
            skipped,
            "loaded frequency reference"
        );
        table
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl BackgroundFrequency for FrequencyTable {
    fn relative_frequency(&self, word: &str) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let count = if self.fold_case {
            self.counts.get(&word.to_lowercase())
        } else {
            self.counts.get(word)
        };
        match count {
            Some(&c) if c > 0 => Some(c as f64 / self.total as f64),
            _ => None,
        }
    }
}
