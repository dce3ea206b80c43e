//! Configuration for recall
//!
//! Configuration lives in `config.toml` inside the data directory. Every field
//! has a default, so a missing file is the same as an empty one.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{RecallError, Result};
use crate::fsutil::write_atomic;

pub use types::{
    DiscoveryConfig, ExtractConfig, FilesConfig, RankConfig, RecallConfig, SegmenterKind,
};

const DATA_DIR: &str = "recall";
const CONFIG_FILE: &str = "config.toml";
const DATA_DIR_ENV_VAR: &str = "RECALL_DATA_DIR";

impl RecallConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RecallConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the extractor and rank formatter cannot honor
    pub fn validate(&self) -> Result<()> {
        let rank = &self.rank;
        if !(rank.cutoff_fraction > 0.0 && rank.cutoff_fraction <= 1.0) {
            bail_invalid!("rank.cutoff_fraction", rank.cutoff_fraction);
        }
        if rank.min_sessions > rank.max_sessions {
            bail_invalid!(
                "rank.min_sessions",
                format!("{} (above max_sessions {})", rank.min_sessions, rank.max_sessions)
            );
        }
        if self.extract.max_keywords == 0 {
            bail_invalid!("extract.max_keywords", 0);
        }
        Ok(())
    }

    /// Load `config.toml` from the data directory, falling back to defaults when absent
    pub fn load_or_default(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RecallError::Other(format!("failed to serialize config: {}", e)))?;
        write_atomic(path, content.as_bytes())
    }
}

/// Resolved locations of every data file, derived from the data directory and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub index: PathBuf,
    pub custom_keywords: PathBuf,
    pub english_freq: PathBuf,
    pub chinese_dict: PathBuf,
}

impl DataPaths {
    pub fn resolve(data_dir: &Path, files: &FilesConfig) -> Self {
        let join = |p: &str| {
            let p = Path::new(p);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                data_dir.join(p)
            }
        };
        Self {
            data_dir: data_dir.to_path_buf(),
            index: join(&files.index),
            custom_keywords: join(&files.custom_keywords),
            english_freq: join(&files.english_freq),
            chinese_dict: join(&files.chinese_dict),
        }
    }
}

/// Determine the data directory: explicit flag, then `RECALL_DATA_DIR`, then the platform data dir
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Ok(env_dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !env_dir.is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR))
        .ok_or(RecallError::NoDataDir)
}
