//! Cross-page handoff: exactly-once transfer of a captured context
//!
//! The origin page and the destination page share no memory - the pending
//! handoff lives in durable storage, which is what makes a publish on one
//! page visible to a consume on the next page load. The slot holds at most
//! one pending value process-wide; a new publish overwrites any unconsumed
//! predecessor, and the first matching consume destroys it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Context, ContextDraft, Platform};
use crate::store::ContextStore;

const PENDING_FILENAME: &str = "pending.json";

/// The single pending handoff value, addressed to one target platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingHandoff {
    pub context: Context,
    #[serde(rename = "targetPlatform")]
    pub target_platform: Platform,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Outcome of a publish: the stored record and where to navigate.
#[derive(Debug, Clone)]
pub struct Published {
    pub context: Context,
    /// The target platform's canonical new-conversation URL
    pub open_url: &'static str,
}

/// Durable single-value slot backing the handoff protocol.
pub struct HandoffSlot {
    path: PathBuf,
}

impl HandoffSlot {
    pub fn open(data_dir: &Path) -> Self {
        Self { path: data_dir.join(PENDING_FILENAME) }
    }

    /// Publish a context for a target platform.
    ///
    /// The context is persisted through the store first, so it survives even
    /// if consumption never happens; the slot then embeds a full copy so the
    /// handoff outlives the origin page's navigation away. Any previous
    /// pending value is overwritten.
    pub fn publish(
        &self,
        store: &mut ContextStore,
        draft: ContextDraft,
        target: Platform,
    ) -> Result<Published> {
        let context = store.save(draft)?;

        let pending = PendingHandoff {
            context: context.clone(),
            target_platform: target,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&pending)?;
        fs::write(&self.path, json)?;

        Ok(Published { context, open_url: target.new_chat_url() })
    }

    /// Destructively consume the pending context for `platform`.
    ///
    /// An empty slot, or a pending value addressed to a different platform,
    /// returns `None` and leaves the slot unchanged - a page load on one
    /// platform never consumes a handoff addressed to another. On a match
    /// the slot is cleared before the context is returned, so a second call
    /// from any platform returns `None`.
    pub fn consume(&self, platform: Platform) -> Result<Option<Context>> {
        let Some(pending) = self.peek()? else { return Ok(None) };

        if pending.target_platform != platform {
            return Ok(None);
        }

        fs::remove_file(&self.path)?;
        Ok(Some(pending.context))
    }

    /// Read the slot without consuming it.
    pub fn peek(&self) -> Result<Option<PendingHandoff>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
