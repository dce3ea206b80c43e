//! Error types and exit codes for recall
//!
//! Exit codes:
//! - 0: Success
//! - 1: Failure (missing required file, bad arguments, I/O)
//! - 130: Interrupted by Ctrl-C

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes returned by the `recall` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Interrupted = 130,
}

/// Errors that can occur during recall operations
#[derive(Error, Debug)]
pub enum RecallError {
    #[error("{0}")]
    UsageError(String),

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unable to determine data directory")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load segmentation dictionary {path:?}: {reason}")]
    Dictionary { path: PathBuf, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("index build interrupted; previous index left untouched")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl RecallError {
    /// Create an error for a required file or entity that is missing
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RecallError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RecallError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RecallError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RecallError::Interrupted => ExitCode::Interrupted,
            _ => ExitCode::Failure,
        }
    }

    /// Stable identifier used in JSON error envelopes
    pub fn error_type(&self) -> &'static str {
        match self {
            RecallError::UsageError(_) => "usage_error",
            RecallError::NotFound { .. } => "not_found",
            RecallError::InvalidValue { .. } => "invalid_value",
            RecallError::NoDataDir => "no_data_dir",
            RecallError::Io(_) => "io_error",
            RecallError::Toml(_) => "toml_error",
            RecallError::Json(_) => "json_error",
            RecallError::Dictionary { .. } => "dictionary_error",
            RecallError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RecallError::Interrupted => "interrupted",
            RecallError::Other(_) => "other",
        }
    }

    /// Render as a JSON error envelope for `--format json`
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
        .to_string()
    }
}

/// Result type alias for recall operations
pub type Result<T> = std::result::Result<T, RecallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_exits_with_failure() {
        let err = RecallError::not_found("index file", "/tmp/nope.tsv");
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.to_string(), "index file not found: /tmp/nope.tsv");
    }

    #[test]
    fn test_usage_error_exits_with_failure() {
        let err = RecallError::UsageError("missing query".to_string());
        assert_eq!(err.exit_code() as i32, 1);
    }

    #[test]
    fn test_interrupted_exit_code() {
        assert_eq!(RecallError::Interrupted.exit_code() as i32, 130);
    }

    #[test]
    fn test_json_envelope() {
        let err = RecallError::invalid_value("mode", "loose");
        let parsed: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(parsed["error"]["code"], 1);
        assert_eq!(parsed["error"]["type"], "invalid_value");
        assert_eq!(parsed["error"]["message"], "invalid mode: loose");
    }
}
