//! Data models for captured conversation contexts.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Message`] - A single `(role, content)` turn in canonical form
//! - [`Role`] - The canonical role vocabulary (`user`/`assistant`/`system`)
//! - [`Context`] - A captured, persisted conversation plus metadata
//! - [`ContextDraft`] - An unsaved capture, before the store assigns an id
//! - [`Platform`] - The four supported chat sites and their metadata
//!
//! These models use serde with camelCase renames where needed so persisted
//! records and export files keep stable on-disk field names.

pub mod context;
pub mod message;
pub mod platform;

pub use context::{Context, ContextDraft};
pub use message::{Message, Role};
pub use platform::Platform;
