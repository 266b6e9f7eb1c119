//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in the assistant conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in the conversation transcript.
///
/// Messages are immutable once created and are only ever appended to the
/// transcript; the transcript grows monotonically within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Row shape persisted to the `chat_history` collection.
///
/// Each completed exchange is mirrored as one row pairing the user text with
/// the assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub user_message: String,
    pub ai_response: String,
    /// RFC 3339 timestamp of the exchange.
    pub timestamp: String,
}

impl ChatRecord {
    /// Builds the persisted row for a completed exchange.
    pub fn new(
        user_message: impl Into<String>,
        ai_response: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            user_message: user_message.into(),
            ai_response: ai_response.into(),
            timestamp: timestamp.into(),
        }
    }
}
