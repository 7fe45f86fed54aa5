//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use ai_context_bridge::models::{ContextDraft, Message, Platform, Role};

/// Builder for conversation page fixtures, emitting the markup each
/// platform actually renders its turns with.
pub struct PageBuilder {
    platform: Platform,
    title: Option<String>,
    body: String,
}

impl PageBuilder {
    pub fn new(platform: Platform) -> Self {
        Self { platform, title: None, body: String::new() }
    }

    pub fn chatgpt() -> Self {
        Self::new(Platform::Chatgpt)
    }

    pub fn claude() -> Self {
        Self::new(Platform::Claude)
    }

    pub fn gemini() -> Self {
        Self::new(Platform::Gemini)
    }

    pub fn perplexity() -> Self {
        Self::new(Platform::Perplexity)
    }

    /// Set the document title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Append a user turn in the platform's markup
    pub fn user(mut self, text: &str) -> Self {
        let markup = match self.platform {
            Platform::Chatgpt => format!(
                r#"<div data-message-author-role="user"><div class="whitespace-pre-wrap">{text}</div></div>"#
            ),
            Platform::Claude => format!(r#"<div data-testid="user-message">{text}</div>"#),
            Platform::Gemini => format!(r#"<div class="query-content">{text}</div>"#),
            Platform::Perplexity => format!(r#"<div class="user-query">{text}</div>"#),
        };
        self.body.push_str(&markup);
        self
    }

    /// Append an assistant turn in the platform's markup
    pub fn assistant(mut self, text: &str) -> Self {
        let markup = match self.platform {
            Platform::Chatgpt => format!(
                r#"<div data-message-author-role="assistant"><div class="markdown">{text}</div></div>"#
            ),
            Platform::Claude => format!(r#"<div data-testid="assistant-message">{text}</div>"#),
            Platform::Gemini => format!(r#"<div class="model-response">{text}</div>"#),
            Platform::Perplexity => format!(r#"<div class="prose-answer">{text}</div>"#),
        };
        self.body.push_str(&markup);
        self
    }

    /// Append the platform's composer element
    pub fn composer(mut self) -> Self {
        let markup = match self.platform {
            Platform::Chatgpt => r#"<textarea id="prompt-textarea"></textarea>"#,
            Platform::Claude => r#"<div contenteditable="true" class="ProseMirror"></div>"#,
            Platform::Gemini => r#"<div class="ql-editor" contenteditable="true"></div>"#,
            Platform::Perplexity => r#"<textarea class="search-input"></textarea>"#,
        };
        self.body.push_str(markup);
        self
    }

    /// Append arbitrary markup (page chrome, decoys)
    pub fn raw(mut self, markup: &str) -> Self {
        self.body.push_str(markup);
        self
    }

    /// Render the full page
    pub fn build(self) -> String {
        let head = self
            .title
            .map(|t| format!("<head><title>{t}</title></head>"))
            .unwrap_or_default();
        format!("<!DOCTYPE html><html>{head}<body>{}</body></html>", self.body)
    }

    /// Render the page and write it into `dir`, returning the file path
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.build()).expect("Failed to write page fixture");
        path
    }
}

/// Fresh data directory for a store/bridge under test
pub fn data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A draft with explicit turns, for store-level tests
pub fn draft(platform: Platform, turns: &[(Role, &str)]) -> ContextDraft {
    let messages =
        turns.iter().map(|(role, text)| Message::new(role.clone(), *text)).collect();
    ContextDraft::new(platform, messages)
}

/// A realistic two-platform conversation page pair used by handoff tests
pub fn claude_conversation() -> String {
    PageBuilder::claude()
        .title("Borrow checker help - Claude")
        .user("Why does this borrow fail?")
        .assistant("The value is moved before the second use.")
        .user("How do I fix it?")
        .assistant("Clone it, or restructure so the borrow ends earlier.")
        .build()
}
