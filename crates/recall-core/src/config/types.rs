//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration, read from `config.toml` in the data directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecallConfig {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub rank: RankConfig,
}

/// Locations of the shared data files. Relative paths resolve against the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Conversation index (tab-separated)
    #[serde(default = "default_index_file")]
    pub index: String,

    /// Custom keyword list, one keyword per line
    #[serde(default = "default_custom_keywords_file")]
    pub custom_keywords: String,

    /// General-English frequency reference (`word count` per line)
    #[serde(default = "default_english_freq_file")]
    pub english_freq: String,

    /// jieba-format dictionary (`word freq [tag]` per line) used as the
    /// Chinese frequency reference and, when present, as the segmentation dictionary
    #[serde(default = "default_chinese_dict_file")]
    pub chinese_dict: String,
}

/// Segmentation backend for CJK runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Jieba,
    Bigram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Keyword cap for hint extraction
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    #[serde(default)]
    pub segmenter: SegmenterKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Known domain terms used as co-occurrence anchors
    #[serde(default = "default_seeds")]
    pub seeds: Vec<String>,

    /// Minimum co-occurrence count for a candidate
    #[serde(default = "default_min_cooccurrence")]
    pub min_cooccurrence: usize,

    /// Number of new keywords merged by `--write`
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Number of candidates shown in the report
    #[serde(default = "default_show")]
    pub show: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Cumulative weighted-score fraction at which the result list is cut
    #[serde(default = "default_cutoff_fraction")]
    pub cutoff_fraction: f64,

    #[serde(default = "default_min_sessions")]
    pub min_sessions: usize,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Strict-mode noise floor on matched messages per session
    #[serde(default = "default_strict_min_matches")]
    pub strict_min_matches: usize,

    #[serde(default = "default_topic_count")]
    pub topic_count: usize,

    #[serde(default = "default_short_id_len")]
    pub short_id_len: usize,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            index: default_index_file(),
            custom_keywords: default_custom_keywords_file(),
            english_freq: default_english_freq_file(),
            chinese_dict: default_chinese_dict_file(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            segmenter: SegmenterKind::default(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            seeds: default_seeds(),
            min_cooccurrence: default_min_cooccurrence(),
            top_k: default_top_k(),
            show: default_show(),
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            cutoff_fraction: default_cutoff_fraction(),
            min_sessions: default_min_sessions(),
            max_sessions: default_max_sessions(),
            strict_min_matches: default_strict_min_matches(),
            topic_count: default_topic_count(),
            short_id_len: default_short_id_len(),
        }
    }
}

fn default_index_file() -> String {
    "memory-index.tsv".to_string()
}

fn default_custom_keywords_file() -> String {
    "custom_keywords.txt".to_string()
}

fn default_english_freq_file() -> String {
    "english_freq.txt".to_string()
}

fn default_chinese_dict_file() -> String {
    "chinese_dict.txt".to_string()
}

fn default_max_keywords() -> usize {
    6
}

fn default_seeds() -> Vec<String> {
    [
        "feishu",
        "lark",
        "bitable",
        "oauth",
        "chrome",
        "browser",
        "cdp",
        "headless",
        "playwright",
        "automation",
        "calendar",
        "gmail",
        "api",
        "飞书",
        "多维表格",
        "审批",
        "浏览器",
        "自动化",
        "日历",
        "机器人",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_min_cooccurrence() -> usize {
    3
}

fn default_top_k() -> usize {
    30
}

fn default_show() -> usize {
    50
}

fn default_cutoff_fraction() -> f64 {
    0.7
}

fn default_min_sessions() -> usize {
    3
}

fn default_max_sessions() -> usize {
    8
}

fn default_strict_min_matches() -> usize {
    5
}

fn default_topic_count() -> usize {
    4
}

fn default_short_id_len() -> usize {
    8
}
