//! Error taxonomy for capture, injection, storage, and handoff operations.
//!
//! # Error Handling Strategy
//!
//! Failures fall into a small fixed taxonomy rather than free-form strings:
//!
//! - [`BridgeError::NoMessagesFound`] is a *soft* outcome - an empty extraction
//!   is valid, surfaced as a warning, and performs no store write.
//! - [`BridgeError::InputNotFound`] aborts an injection; the caller reports it,
//!   nothing is retried.
//! - [`BridgeError::InvalidImportFormat`] aborts an import before anything is
//!   written.
//! - Storage failures wrap the underlying io/serde error and propagate to the
//!   caller of the store API; they are never swallowed.
//! - [`BridgeError::Communication`] marks an unreachable extraction endpoint
//!   and carries a reload remediation hint in its message.
//!
//! No variant triggers an automatic retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Empty extraction - a normal outcome, not a failure
    #[error("no messages found in the conversation")]
    NoMessagesFound,

    /// The platform's composer element did not match any known selector
    #[error("could not find the chat input field")]
    InputNotFound,

    /// Import payload is not a `{version, exportedAt, contexts: [...]}` snapshot
    #[error("invalid import data format")]
    InvalidImportFormat,

    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),

    #[error("storage failure: malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The page context hosting the adapter was torn down
    #[error("lost connection to the page; reload it and try again")]
    Communication,
}

impl BridgeError {
    /// Soft outcomes are reported as warnings, not failures
    pub fn is_soft(&self) -> bool {
        matches!(self, BridgeError::NoMessagesFound)
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
