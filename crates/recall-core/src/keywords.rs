//! Custom keyword file and keyword classification
//!
//! File format: one keyword per line, UTF-8. Lines starting with `#` are
//! comments and blank lines are ignored. The set is unordered; it is written
//! back sorted, with the leading comment block preserved.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::fsutil::write_atomic;
use crate::text::stopwords::{is_chinese_stopword, is_english_stopword, is_general_stopword};

/// Domain terms always added to the segmentation dictionary
pub const BUILTIN_CUSTOM_WORDS: &[&str] = &[
    // Feishu/Lark
    "飞书", "多维表格", "审批流程", "机器人", "群聊",
    // Browser automation
    "浏览器", "自动化", "无头模式",
    // Calendar/sync
    "日历", "同步", "日历同步",
    // Common tech terms
    "配置文件", "命令行", "接口调用",
];

const DEFAULT_HEADER: &[&str] = &[
    "# Custom keywords for recall",
    "# Auto-generated by `recall discover --write`",
    "# One keyword per line",
    "#",
];

/// How a token relates to the curated vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordClass {
    Seed,
    Custom,
    Stop,
}

/// Parsed custom keyword file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFile {
    header: Vec<String>,
    keywords: BTreeSet<String>,
}

impl KeywordFile {
    /// Parse keyword file contents
    pub fn parse(content: &str) -> Self {
        let mut header = Vec::new();
        let mut keywords = BTreeSet::new();
        let mut in_header = true;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                if in_header {
                    header.push(trimmed.to_string());
                }
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }
            in_header = false;
            keywords.insert(trimmed.to_string());
        }

        KeywordFile { header, keywords }
    }

    /// Load the keyword file; a missing file is an empty set
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no custom keyword file");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content);
        tracing::debug!(path = %path.display(), keywords = file.len(), "loaded custom keywords");
        Ok(file)
    }

    /// Render with the preserved (or default) header and sorted keywords
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.header.is_empty() {
            for line in DEFAULT_HEADER {
                out.push_str(line);
                out.push('\n');
            }
        } else {
            for line in &self.header {
                out.push_str(line);
                out.push('\n');
            }
        }
        for keyword in &self.keywords {
            out.push_str(keyword);
            out.push('\n');
        }
        out
    }

    /// Atomically replace the keyword file
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, self.render().as_bytes())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Add keywords; returns how many were new
    pub fn merge<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.keywords.len();
        for word in words {
            let word = word.into();
            let word = word.trim();
            if !word.is_empty() && !word.starts_with('#') {
                self.keywords.insert(word.to_string());
            }
        }
        self.keywords.len() - before
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

/// Words added to the segmentation dictionary: built-ins, then the custom file, then seeds
pub fn segmentation_words(custom: &KeywordFile, seeds: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut words = Vec::new();
    let all = BUILTIN_CUSTOM_WORDS
        .iter()
        .copied()
        .chain(custom.iter())
        .chain(seeds.iter().map(String::as_str));
    for word in all {
        if seen.insert(word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Classify a token against the seed list, the custom file and the stopword sets
pub fn classify(word: &str, seeds: &[String], custom: &KeywordFile) -> Option<KeywordClass> {
    let lower = word.to_lowercase();
    if seeds
        .iter()
        .any(|s| s == word || s.to_lowercase() == lower)
    {
        return Some(KeywordClass::Seed);
    }
    if custom.contains(word) {
        return Some(KeywordClass::Custom);
    }
    if is_general_stopword(word) || is_english_stopword(&lower) || is_chinese_stopword(word) {
        return Some(KeywordClass::Stop);
    }
    None
}
