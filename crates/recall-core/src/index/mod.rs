//! Conversation index: record types, the normalized-column builder, and readers

mod builder;
mod reader;
pub mod types;

pub use builder::{BuildStats, IndexBuilder, PROGRESS_INTERVAL};
pub use reader::MessageTexts;
pub use types::{message_text, ConversationRecord, IndexRow, MessageType};
