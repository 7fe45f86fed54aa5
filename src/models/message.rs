use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical message role.
///
/// Serializes as its lowercase string form. Role spellings the normalization
/// table does not recognize survive round-trips through [`Role::Other`] rather
/// than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Other(s) => s.as_str(),
        }
    }

    /// Display label used when formatting a conversation for injection
    pub fn label(&self) -> &str {
        match self {
            Role::User => "User",
            _ => "Assistant",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A single conversation turn in canonical form.
///
/// Content is non-empty trimmed visible text. There is no ordering field;
/// order is positional in the containing sequence and equals on-page
/// document order, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Capture stamp added by normalization when the source lacks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: None }
    }
}
