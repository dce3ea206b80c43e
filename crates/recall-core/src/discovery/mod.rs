//! Offline co-occurrence discovery of new domain keywords
//!
//! One pass over the index counts corpus word frequencies and, for messages
//! that mention a seed keyword, which other words appear alongside it.
//! Candidates are scored by co-occurrence count, PMI with the seed, and how
//! much more frequent they are here than in general-language text.

pub mod frequency;
pub mod scoring;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;

use crate::extract::BilingualExtractor;
use crate::keywords::KeywordFile;
use crate::text::{latin_words, stopwords::is_general_stopword};
use crate::trace_time;

pub use frequency::{BackgroundFrequency, FrequencyTable};
use scoring::{domain_boost, pair_score, pmi};

#[derive(Debug, Clone)]
struct Seed {
    text: String,
    lower: String,
}

impl Seed {
    fn new(text: &str) -> Self {
        Seed {
            text: text.to_string(),
            lower: text.to_lowercase(),
        }
    }

    /// Case-insensitive for ASCII seeds, exact for the rest
    fn occurs_in(&self, text: &str, text_lower: &str) -> bool {
        text_lower.contains(&self.lower) || text.contains(&self.text)
    }

    fn is(&self, word: &str) -> bool {
        word == self.text || word.to_lowercase() == self.lower
    }
}

/// Counters accumulated over the index pass
#[derive(Debug, Default)]
pub struct CooccurrenceCounts {
    /// Messages seen
    pub messages: usize,
    /// Messages containing at least one seed
    pub seed_messages: usize,
    global: HashMap<String, u64>,
    /// Per-seed co-occurrence counts, indexed like the seed list
    pairs: Vec<HashMap<String, u64>>,
}

impl CooccurrenceCounts {
    /// Corpus occurrences of `word`, or zero when never seen
    pub fn global_frequency(&self, word: &str) -> u64 {
        self.global.get(word).copied().unwrap_or(0)
    }

    /// Messages in which `word` appeared together with the seed at `seed_index`
    pub fn cooccurrence(&self, seed_index: usize, word: &str) -> u64 {
        self.pairs
            .get(seed_index)
            .and_then(|m| m.get(word))
            .copied()
            .unwrap_or(0)
    }

    pub fn corpus_total(&self) -> u64 {
        self.global.values().sum()
    }
}

/// A proposed keyword with its accumulated score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
    /// In-corpus occurrence count
    pub frequency: u64,
}

/// Outcome of a discovery run
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub messages: usize,
    pub seed_messages: usize,
    /// Index lines skipped as malformed
    pub skipped: usize,
    /// Every surviving candidate, best first
    pub candidates: Vec<Candidate>,
}

impl DiscoveryReport {
    /// Candidates among the first `show` that the keyword file does not already hold
    pub fn new_candidates<'r>(&'r self, existing: &KeywordFile, show: usize) -> Vec<&'r Candidate> {
        self.candidates
            .iter()
            .take(show)
            .filter(|c| !existing.contains(&c.word))
            .collect()
    }

    /// Words that `--write` merges: the first `top_k` new candidates of the shown list
    pub fn selection(&self, existing: &KeywordFile, show: usize, top_k: usize) -> Vec<String> {
        self.new_candidates(existing, show)
            .into_iter()
            .take(top_k)
            .map(|c| c.word.clone())
            .collect()
    }
}

/// Co-occurrence miner anchored on a fixed seed list
pub struct Discovery<'a> {
    extractor: &'a BilingualExtractor,
    seeds: Vec<Seed>,
    min_cooccurrence: u64,
}

impl<'a> Discovery<'a> {
    pub fn new(extractor: &'a BilingualExtractor, seeds: &[String], min_cooccurrence: usize) -> Self {
        Discovery {
            extractor,
            seeds: seeds
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(Seed::new)
                .collect(),
            min_cooccurrence: min_cooccurrence as u64,
        }
    }

    /// Count co-occurrences, score, and rank in one call
    #[tracing::instrument(skip_all, fields(seeds = self.seeds.len()))]
    pub fn run<I, S>(
        &self,
        messages: I,
        english: &dyn BackgroundFrequency,
        chinese: &dyn BackgroundFrequency,
    ) -> DiscoveryReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = self.count(messages);
        let candidates = self.score(&counts, english, chinese);
        DiscoveryReport {
            messages: counts.messages,
            seed_messages: counts.seed_messages,
            skipped: 0,
            candidates,
        }
    }

    pub fn count<I, S>(&self, messages: I) -> CooccurrenceCounts
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut counts = CooccurrenceCounts {
            pairs: vec![HashMap::new(); self.seeds.len()],
            ..Default::default()
        };
        for text in messages {
            self.observe(&mut counts, text.as_ref());
        }
        tracing::info!(
            messages = counts.messages,
            seed_messages = counts.seed_messages,
            vocabulary = counts.global.len(),
            "counted co-occurrences"
        );
        trace_time!(start, "cooccurrence_count");
        counts
    }

    /// Fold one message into the counters
    pub fn observe(&self, counts: &mut CooccurrenceCounts, text: &str) {
        counts.messages += 1;
        for word in latin_words(text) {
            *counts.global.entry(word).or_insert(0) += 1;
        }

        let text_lower = text.to_lowercase();
        let matched: Vec<usize> = self
            .seeds
            .iter()
            .enumerate()
            .filter(|(_, seed)| seed.occurs_in(text, &text_lower))
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            return;
        }
        counts.seed_messages += 1;

        let words = self.extractor.vocabulary(text);
        for word in &words {
            if !word.is_ascii() {
                *counts.global.entry(word.clone()).or_insert(0) += 1;
            }
        }
        for &i in &matched {
            let seed = &self.seeds[i];
            let pairs = &mut counts.pairs[i];
            for word in &words {
                if !seed.is(word) {
                    *pairs.entry(word.clone()).or_insert(0) += 1;
                }
            }
        }
    }

    /// Score every candidate across all seeds, best first (ties by word)
    pub fn score(
        &self,
        counts: &CooccurrenceCounts,
        english: &dyn BackgroundFrequency,
        chinese: &dyn BackgroundFrequency,
    ) -> Vec<Candidate> {
        let corpus_total = counts.corpus_total();
        let mut scores: HashMap<&str, f64> = HashMap::new();

        for pairs in &counts.pairs {
            let seed_total: u64 = pairs.values().sum();
            for (word, &count) in pairs {
                if count < self.min_cooccurrence || !self.is_candidate(word) {
                    continue;
                }
                let global_freq = counts.global.get(word).copied().unwrap_or(1);
                let background = if is_english_word(word) {
                    english.relative_frequency(word)
                } else {
                    chinese.relative_frequency(word)
                };
                let pmi = pmi(count, seed_total, global_freq, corpus_total);
                let boost = domain_boost(global_freq, corpus_total, background);
                *scores.entry(word.as_str()).or_insert(0.0) += pair_score(count, pmi, boost);
            }
        }

        let mut candidates: Vec<Candidate> = scores
            .into_iter()
            .map(|(word, score)| Candidate {
                word: word.to_string(),
                score,
                frequency: counts.global_frequency(word),
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        tracing::debug!(candidates = candidates.len(), "scored candidates");
        candidates
    }

    fn is_candidate(&self, word: &str) -> bool {
        !is_general_stopword(word) && !self.seeds.iter().any(|s| s.is(word))
    }
}

fn is_english_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}
