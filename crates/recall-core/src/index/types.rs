//! Conversation records and index rows
//!
//! Raw records have five tab-separated fields:
//! `session_id, timestamp, type, text, project_path`. Index rows insert the
//! normalized text before the project path, for six fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RecallError;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Assistant,
}

impl MessageType {
    /// Short role label used in rendered snippets
    pub fn label(&self) -> &'static str {
        match self {
            MessageType::User => "[user]",
            MessageType::Assistant => "[asst]",
        }
    }
}

impl FromStr for MessageType {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageType::User),
            "assistant" => Ok(MessageType::Assistant),
            other => Err(RecallError::invalid_value("message type", other)),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::User => write!(f, "user"),
            MessageType::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message from a conversation transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    pub session_id: String,
    pub timestamp: String,
    pub message_type: MessageType,
    pub text: String,
    pub project_path: String,
}

impl ConversationRecord {
    /// Parse a five-field raw line. Any other field count, or an unknown
    /// message type, is malformed and yields `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        let [session_id, timestamp, message_type, text, project_path] = fields.as_slice() else {
            return None;
        };
        Some(ConversationRecord {
            session_id: session_id.to_string(),
            timestamp: timestamp.to_string(),
            message_type: message_type.parse().ok()?,
            text: text.to_string(),
            project_path: project_path.to_string(),
        })
    }
}

/// An indexed message: the raw record plus its normalized text column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub record: ConversationRecord,
    pub normalized_text: String,
}

impl IndexRow {
    /// Parse a six-field index line. The project path is the remainder of the line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.splitn(6, '\t').collect();
        let [session_id, timestamp, message_type, text, normalized_text, project_path] =
            fields.as_slice()
        else {
            return None;
        };
        Some(IndexRow {
            record: ConversationRecord {
                session_id: session_id.to_string(),
                timestamp: timestamp.to_string(),
                message_type: message_type.parse().ok()?,
                text: text.to_string(),
                project_path: project_path.to_string(),
            },
            normalized_text: normalized_text.to_string(),
        })
    }

    /// Render as a six-field tab-separated line (no trailing newline)
    pub fn to_line(&self) -> String {
        let r = &self.record;
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.session_id, r.timestamp, r.message_type, r.text, self.normalized_text, r.project_path
        )
    }
}

/// Message text of a raw (5-field) or indexed (6-field) line
pub fn message_text(line: &str) -> Option<&str> {
    let mut fields = line.split('\t');
    let text = fields.nth(3)?;
    let remaining = fields.count();
    matches!(remaining, 1 | 2).then_some(text)
}
