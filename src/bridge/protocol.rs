//! The inter-component message contract, as tagged request/response pairs.
//!
//! Requests serialize as `{"type": "SAVE_CONTEXT", "payload": ...}`; the
//! tags are part of the stored-data contract, so recorded traffic and export
//! tooling stay compatible.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extract::Injection;
use crate::models::{Context, ContextDraft, Platform};
use crate::store::ExportData;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    SaveContext(ContextDraft),
    GetAllContexts,
    GetLatestContext,
    DeleteContext {
        id: Uuid,
    },
    ClearAll,
    SendToPlatform {
        context: ContextDraft,
        #[serde(rename = "targetPlatform")]
        target_platform: Platform,
    },
    /// Destructive read of the pending handoff slot
    GetPendingContext {
        platform: Platform,
    },
    ExportAll,
    ImportData {
        data: serde_json::Value,
    },
    /// Adapter-side: extract and save the conversation in `html`
    CaptureContext {
        platform: Platform,
        html: String,
        #[serde(default)]
        url: String,
    },
    /// Adapter-side: plan an injection of `text` into the composer in `html`
    PasteContext {
        platform: Platform,
        html: String,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Saved { success: bool, context: Context },
    Contexts { contexts: Vec<Context> },
    Latest { context: Option<Context> },
    Ack { success: bool },
    Pending { context: Option<Context> },
    Export { data: ExportData },
    Imported { success: bool, count: usize },
    Injection { success: bool, injection: Injection },
    Failure { success: bool, error: String },
}

impl Response {
    pub fn failure(error: impl ToString) -> Self {
        Response::Failure { success: false, error: error.to_string() }
    }
}
