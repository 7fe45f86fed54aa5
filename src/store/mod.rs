//! Durable local storage of captured conversation contexts
//!
//! The store is the single owner of the persisted context list. It loads
//! once on open and writes through on every mutation - there is no
//! out-of-band mutation path, and a mutation is acknowledged only after the
//! durable write succeeds. Records are kept most-recent-first and capped at
//! [`MAX_CONTEXTS`]; the oldest records are evicted on overflow.
//!
//! # Error Handling Strategy
//!
//! Storage failures propagate to the caller as typed errors and are never
//! swallowed or retried. Import validates the snapshot shape before writing
//! anything, so a malformed payload leaves the store untouched.

pub mod persistence;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BridgeError, Result};
use crate::models::{Context, ContextDraft};
use crate::parsers::generate_title;

/// Hard cap on stored contexts; oldest evicted on overflow
pub const MAX_CONTEXTS: usize = 50;

/// Export snapshot schema version
pub const EXPORT_VERSION: u32 = 1;

/// A versioned backup snapshot, the exact shape import accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u32,
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
    pub contexts: Vec<Context>,
}

/// Durable CRUD over captured contexts, keyed by id.
pub struct ContextStore {
    path: PathBuf,
    contexts: Vec<Context>,
}

impl ContextStore {
    /// Open (or create) the store under a data directory. Loads the
    /// persisted list; a missing file is an empty store.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = persistence::contexts_path(data_dir)?;
        let contexts = persistence::load_contexts(&path)?;
        Ok(Self { path, contexts })
    }

    /// Save a context: assigns an id if absent, derives a title if absent,
    /// stamps `createdAt`, prepends (most-recent-first), evicts beyond the
    /// cap, persists, and returns the stored record.
    ///
    /// A draft carrying an id that matches an existing record overwrites it
    /// (the import path relies on this).
    pub fn save(&mut self, draft: ContextDraft) -> Result<Context> {
        let id = draft.id.unwrap_or_else(Uuid::new_v4);
        let title = match draft.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => generate_title(&draft.messages),
        };

        let record = Context {
            id,
            source: draft.source,
            title,
            messages: draft.messages,
            url: draft.url,
            created_at: Utc::now(),
        };

        self.contexts.retain(|c| c.id != id);
        self.contexts.insert(0, record.clone());
        self.contexts.truncate(MAX_CONTEXTS);
        self.persist()?;

        Ok(record)
    }

    /// All records, most recent first.
    pub fn get_all(&self) -> &[Context] {
        &self.contexts
    }

    /// The most recently saved record, used by the quick-paste shortcut.
    pub fn get_latest(&self) -> Option<&Context> {
        self.contexts.first()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Context> {
        self.contexts.iter().find(|c| c.id == id)
    }

    /// Delete by id. Idempotent: deleting an absent id is not an error.
    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.contexts.len();
        self.contexts.retain(|c| c.id != id);
        let removed = self.contexts.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Remove every record. Idempotent.
    pub fn clear(&mut self) -> Result<()> {
        self.contexts.clear();
        self.persist()
    }

    /// Produce a versioned backup snapshot of the full store.
    pub fn export_all(&self) -> ExportData {
        ExportData {
            version: EXPORT_VERSION,
            exported_at: Utc::now(),
            contexts: self.contexts.clone(),
        }
    }

    /// Import a backup snapshot. The whole payload is validated before any
    /// record is written; entries keep their ids, so collisions overwrite
    /// existing records. Returns the number of contexts imported.
    ///
    /// # Errors
    ///
    /// [`BridgeError::InvalidImportFormat`] if `contexts` is missing, not an
    /// array, or contains entries that do not parse as context records.
    pub fn import_data(&mut self, data: &serde_json::Value) -> Result<usize> {
        let entries = data
            .get("contexts")
            .and_then(|c| c.as_array())
            .ok_or(BridgeError::InvalidImportFormat)?;

        let drafts: Vec<ContextDraft> = entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| BridgeError::InvalidImportFormat)?;

        let count = drafts.len();
        for draft in drafts {
            self.save(draft)?;
        }
        Ok(count)
    }

    fn persist(&self) -> Result<()> {
        persistence::save_contexts(&self.path, &self.contexts)
    }
}
