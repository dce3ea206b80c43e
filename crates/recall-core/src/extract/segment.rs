//! CJK segmentation backends

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::Jieba;

use crate::error::{RecallError, Result};
use crate::text::is_han;

/// Splits one CJK run into words
pub trait Segmenter {
    fn segment(&self, run: &str) -> Vec<String>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Dictionary-based segmentation via jieba
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Built-in dictionary augmented with `extra_words` so domain terms stay whole
    pub fn new<I, S>(extra_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = JiebaSegmenter {
            jieba: Jieba::new(),
        };
        segmenter.add_words(extra_words);
        segmenter
    }

    /// Load a jieba-format dictionary (`word freq [tag]` per line) instead of the built-in one
    pub fn from_dictionary<I, S>(path: &Path, extra_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let file = File::open(path).map_err(|e| RecallError::Dictionary {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let jieba = Jieba::with_dict(&mut BufReader::new(file)).map_err(|e| {
            RecallError::Dictionary {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        let mut segmenter = JiebaSegmenter { jieba };
        segmenter.add_words(extra_words);
        Ok(segmenter)
    }

    fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.jieba.add_word(word, None, None);
            }
        }
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, run: &str) -> Vec<String> {
        self.jieba
            .cut(run, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

/// Overlapping two-character windows over the Han characters of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct BigramSegmenter;

impl Segmenter for BigramSegmenter {
    fn segment(&self, run: &str) -> Vec<String> {
        let chars: Vec<char> = run.chars().filter(|c| is_han(*c)).collect();
        chars
            .windows(2)
            .map(|pair| pair.iter().collect())
            .collect()
    }

    fn name(&self) -> &'static str {
        "bigram"
    }
}
