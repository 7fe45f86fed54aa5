use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Message, Platform};

/// A captured, persisted conversation record.
///
/// `messages` is non-empty at save time (empty captures are rejected at the
/// capture boundary); order is on-page document order, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub id: Uuid,
    pub source: Platform,
    pub title: String,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// An unsaved capture, before the store assigns an id and creation stamp.
///
/// `id` is set only on the import path, where records keep their original
/// identity and overwrite any stored record sharing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub source: Platform,
    #[serde(default)]
    pub title: Option<String>,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub url: String,
}

impl ContextDraft {
    pub fn new(source: Platform, messages: Vec<Message>) -> Self {
        Self { id: None, source, title: None, messages, url: String::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl From<Context> for ContextDraft {
    fn from(context: Context) -> Self {
        Self {
            id: Some(context.id),
            source: context.source,
            title: Some(context.title),
            messages: context.messages,
            url: context.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_context_serializes_created_at_as_camel_case() {
        let context = Context {
            id: Uuid::new_v4(),
            source: Platform::Claude,
            title: "Test".to_string(),
            messages: vec![Message::new(Role::User, "Hi")],
            url: "https://claude.ai/chat/1".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&context).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_draft_accepts_full_record_shape() {
        // Import feeds stored records back through the draft shape; the
        // createdAt field is dropped and re-stamped by save.
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "source": "gemini",
            "title": "Old capture",
            "messages": [{"role": "user", "content": "Hi"}],
            "url": "https://gemini.google.com/app",
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;

        let draft: ContextDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.id.unwrap().to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(draft.source, Platform::Gemini);
        assert_eq!(draft.messages.len(), 1);
    }
}
