//! Normalization and formatting of conversation messages
//!
//! # Error Handling Strategy
//!
//! Normalization is pure, stateless, and total: it never fails and never
//! panics. Unknown role spellings pass through unchanged as a last resort,
//! and missing content fields default to the empty string (empty messages
//! are dropped later, at the extraction boundary). Normalizing an
//! already-normalized message returns the same value, so the layer can be
//! applied defensively anywhere in the pipeline.

pub mod format;
pub mod normalize;

pub use format::{conversation_stats, format_for_injection, generate_title, truncate_to_token_limit};
pub use normalize::{RawMessage, normalize_message, normalize_messages, normalize_role};
