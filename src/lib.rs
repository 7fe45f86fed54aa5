//! AI Context Bridge - Carry AI chat conversations between platforms
//!
//! This library reconstructs a canonical `(role, content)` conversation from
//! the rendered page of four AI chat platforms (ChatGPT, Claude, Gemini,
//! Perplexity), stores captured conversations in a durable local store, and
//! hands a conversation off to another platform exactly once. It supports:
//!
//! - Platform detection and per-platform extraction cascades
//! - Normalizing platform-specific role labels into a shared model
//! - A capped, most-recent-first context store with export/import
//! - An exactly-once pending-handoff slot between capture and delivery
//! - Injection planning against a destination page's composer
//!
//! # Example
//!
//! ```no_run
//! use ai_context_bridge::bridge::Bridge;
//! use ai_context_bridge::models::Platform;
//! use scraper::Html;
//! use std::path::Path;
//!
//! let mut bridge = Bridge::open(Path::new("/tmp/bridge-data"))?;
//! let page = Html::parse_document("<div data-testid=\"user-message\">Hi</div>");
//! let context = bridge.capture(Platform::Claude, &page, "https://claude.ai/chat/1")?;
//! println!("Captured {} messages", context.messages.len());
//! # Ok::<(), ai_context_bridge::error::BridgeError>(())
//! ```

pub mod adapters;
pub mod bridge;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod extract;
pub mod handoff;
pub mod models;
pub mod parsers;
pub mod readiness;
pub mod store;

// Re-export commonly used types
pub use adapters::adapter_for;
pub use bridge::{Bridge, Request, Response};
pub use error::BridgeError;
pub use models::{Context, ContextDraft, Message, Platform, Role};
pub use parsers::format_for_injection;
pub use store::{ContextStore, MAX_CONTEXTS};
