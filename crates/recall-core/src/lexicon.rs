//! Reference resources loaded once per process
//!
//! The normalizer, the segmenting extractor, the custom keyword file and the
//! background frequency tables are built here from configuration and passed
//! by reference into the index builder, discovery and the rank formatter.

use std::collections::HashSet;
use std::time::Instant;

use crate::config::{DataPaths, RecallConfig, SegmenterKind};
use crate::discovery::FrequencyTable;
use crate::error::Result;
use crate::extract::{BigramSegmenter, BilingualExtractor, JiebaSegmenter, Segmenter};
use crate::keywords::{classify, segmentation_words, KeywordClass, KeywordFile};
use crate::text::Normalizer;
use crate::trace_time;

/// Shared text-processing state
pub struct Lexicon {
    pub normalizer: Normalizer,
    pub extractor: BilingualExtractor,
    pub custom: KeywordFile,
    pub seeds: Vec<String>,
    pub max_keywords: usize,
}

impl Lexicon {
    /// Load the custom keyword file and build the configured segmenter.
    ///
    /// A missing custom keyword file is an empty vocabulary. An unreadable
    /// jieba dictionary falls back to jieba's built-in dictionary.
    pub fn load(config: &RecallConfig, paths: &DataPaths) -> Result<Self> {
        let start = Instant::now();
        let custom = KeywordFile::load(&paths.custom_keywords)?;
        let seeds = config.discovery.seeds.clone();
        let segmenter = build_segmenter(config.extract.segmenter, paths, &custom, &seeds);
        tracing::debug!(
            segmenter = segmenter.name(),
            custom_keywords = custom.len(),
            seeds = seeds.len(),
            "loaded lexicon"
        );
        trace_time!(start, "lexicon_load");

        Ok(Lexicon::with_extractor(
            BilingualExtractor::new(segmenter),
            custom,
            seeds,
            config.extract.max_keywords,
        ))
    }

    /// Lexicon over an explicit extractor and vocabulary
    pub fn with_extractor(
        extractor: BilingualExtractor,
        custom: KeywordFile,
        seeds: Vec<String>,
        max_keywords: usize,
    ) -> Self {
        Lexicon {
            normalizer: Normalizer::new(),
            extractor,
            custom,
            seeds,
            max_keywords,
        }
    }

    /// Ordered keywords of `text`, capped at the configured maximum
    pub fn keywords(&self, text: &str, exclude: Option<&HashSet<String>>) -> Vec<String> {
        self.extractor.extract(text, exclude, self.max_keywords)
    }

    pub fn classify(&self, word: &str) -> Option<KeywordClass> {
        classify(word, &self.seeds, &self.custom)
    }
}

fn build_segmenter(
    kind: SegmenterKind,
    paths: &DataPaths,
    custom: &KeywordFile,
    seeds: &[String],
) -> Box<dyn Segmenter> {
    if kind == SegmenterKind::Bigram {
        return Box::new(BigramSegmenter);
    }
    let words = segmentation_words(custom, seeds);
    if paths.chinese_dict.exists() {
        match JiebaSegmenter::from_dictionary(&paths.chinese_dict, &words) {
            Ok(segmenter) => return Box::new(segmenter),
            Err(e) => tracing::warn!(error = %e, "using built-in jieba dictionary"),
        }
    }
    Box::new(JiebaSegmenter::new(&words))
}

/// General-language frequency references for discovery scoring
pub struct BackgroundTables {
    pub english: FrequencyTable,
    pub chinese: FrequencyTable,
}

impl BackgroundTables {
    /// Missing files yield empty tables, so every word falls to the unknown-word boost
    pub fn load(paths: &DataPaths) -> Self {
        let start = Instant::now();
        let english = FrequencyTable::load_english(&paths.english_freq);
        let chinese = FrequencyTable::load_jieba_dict(&paths.chinese_dict);
        if english.is_empty() {
            tracing::warn!(path = %paths.english_freq.display(), "no English frequency reference");
        }
        if chinese.is_empty() {
            tracing::warn!(path = %paths.chinese_dict.display(), "no Chinese frequency reference");
        }
        trace_time!(start, "background_load", english = english.len(), chinese = chinese.len());
        BackgroundTables { english, chinese }
    }
}
