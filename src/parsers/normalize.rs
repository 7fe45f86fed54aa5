use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Message, Role};

/// Map a raw role spelling onto the canonical vocabulary.
///
/// Covers every spelling observed across the four platforms; anything
/// unrecognized passes through unchanged rather than failing.
pub fn normalize_role(raw: &str) -> Role {
    match raw {
        "user" | "human" | "Human" | "User" => Role::User,
        "assistant" | "Assistant" | "model" | "ai" | "bot" => Role::Assistant,
        "system" => Role::System,
        other => Role::from(other.to_string()),
    }
}

/// A message as captured from a platform, before normalization.
///
/// Platforms disagree on which field carries the text (`content` vs `text`)
/// and whether a timestamp is present; all fields are optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<Message> for RawMessage {
    fn from(msg: Message) -> Self {
        Self {
            role: msg.role.as_str().to_string(),
            content: Some(msg.content),
            text: None,
            timestamp: msg.timestamp,
        }
    }
}

/// Normalize a raw message into the canonical [`Message`] shape.
///
/// Content comes from `content`, then `text`, then defaults to empty; a
/// capture timestamp is stamped when the source lacks one. Idempotent:
/// normalizing an already-normalized message returns the same value.
pub fn normalize_message(raw: RawMessage) -> Message {
    let content = raw.content.or(raw.text).unwrap_or_default();
    Message {
        role: normalize_role(&raw.role),
        content,
        timestamp: Some(raw.timestamp.unwrap_or_else(Utc::now)),
    }
}

pub fn normalize_messages(raws: Vec<RawMessage>) -> Vec<Message> {
    raws.into_iter().map(normalize_message).collect()
}
