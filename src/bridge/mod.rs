//! Coordinator: relays requests to the store, the handoff slot, and adapters
//!
//! The bridge is the single owner of the context store and the handoff slot;
//! every mutation funnels through one place. Action-level operations -
//! capture, paste, send, deliver - live here too, combining an adapter with
//! the store so callers never touch either directly.
//!
//! # Error Handling Strategy
//!
//! [`Bridge::handle`] is the action boundary: every failure is converted to
//! a [`Response::Failure`] carrying the taxonomy error's message, and never
//! propagates as a fault. The typed action methods (`capture`,
//! `send_to_platform`, ...) return `Result` for callers like the CLI that
//! want to distinguish soft outcomes from hard ones.

pub mod protocol;

use std::path::Path;
use std::time::Duration;

use scraper::Html;

use crate::adapters::adapter_for;
use crate::error::{BridgeError, Result};
use crate::extract::Injection;
use crate::handoff::{HandoffSlot, Published};
use crate::models::{Context, ContextDraft, Platform};
use crate::parsers::{RawMessage, format_for_injection, normalize_messages};
use crate::readiness::wait_for;
use crate::store::ContextStore;

pub use protocol::{Request, Response};

/// Supplies snapshots of the destination page while its composer mounts.
///
/// Probing re-fetches because the page mutates as it loads; returning `None`
/// means "no usable snapshot yet".
pub trait DocumentSource {
    fn fetch(&mut self) -> Option<Html>;
}

pub struct Bridge {
    store: ContextStore,
    handoff: HandoffSlot,
}

impl Bridge {
    pub fn open(data_dir: &Path) -> Result<Self> {
        Ok(Self { store: ContextStore::open(data_dir)?, handoff: HandoffSlot::open(data_dir) })
    }

    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ContextStore {
        &mut self.store
    }

    /// Extract and normalize a page's conversation into an unsaved draft.
    /// Normalization stamps capture timestamps on messages lacking one.
    fn draft_from_page(
        &self,
        platform: Platform,
        doc: &Html,
        url: &str,
    ) -> Result<ContextDraft> {
        let adapter = adapter_for(platform);
        let messages = adapter.extract_messages(doc);
        if messages.is_empty() {
            return Err(BridgeError::NoMessagesFound);
        }
        let messages =
            normalize_messages(messages.into_iter().map(RawMessage::from).collect());

        let mut draft = ContextDraft::new(platform, messages).with_url(url);
        draft.title = adapter.extract_title(doc);
        Ok(draft)
    }

    /// Extract the conversation from a page snapshot and save it.
    ///
    /// # Errors
    ///
    /// [`BridgeError::NoMessagesFound`] when every cascade strategy comes up
    /// empty; nothing is written in that case.
    pub fn capture(&mut self, platform: Platform, doc: &Html, url: &str) -> Result<Context> {
        let draft = self.draft_from_page(platform, doc, url)?;
        self.store.save(draft)
    }

    /// Plan an injection of the most recent capture into this page's
    /// composer. Returns `Ok(None)` when the store is empty.
    pub fn paste_latest(&self, platform: Platform, doc: &Html) -> Result<Option<Injection>> {
        let Some(latest) = self.store.get_latest() else { return Ok(None) };
        let text = format_for_injection(latest);
        adapter_for(platform).inject_into_input(doc, &text).map(Some)
    }

    /// Capture this page's conversation and publish it for another platform.
    /// Returns the stored record and the URL to open.
    pub fn send_to_platform(
        &mut self,
        platform: Platform,
        doc: &Html,
        url: &str,
        target: Platform,
    ) -> Result<Published> {
        let draft = self.draft_from_page(platform, doc, url)?;
        self.handoff.publish(&mut self.store, draft, target)
    }

    /// Destination-page flow: consume a pending handoff addressed to
    /// `platform`, wait (bounded) for the composer to mount, and plan the
    /// injection.
    ///
    /// `Ok(None)` means no handoff was pending for this platform. A consumed
    /// handoff whose composer never appears is reported as
    /// [`BridgeError::InputNotFound`] - the context remains available in the
    /// store, but the user must be told injection failed.
    pub fn deliver_pending(
        &self,
        platform: Platform,
        source: &mut dyn DocumentSource,
        timeout: Duration,
        interval: Duration,
    ) -> Result<Option<Injection>> {
        let Some(context) = self.handoff.consume(platform)? else { return Ok(None) };

        let adapter = adapter_for(platform);
        let text = format_for_injection(&context);

        let injection = wait_for(timeout, interval, || {
            let doc = source.fetch()?;
            adapter.inject_into_input(&doc, &text).ok()
        });

        match injection {
            Some(plan) => Ok(Some(plan)),
            None => Err(BridgeError::InputNotFound),
        }
    }

    /// Consume a pending handoff addressed to `platform` without planning
    /// an injection.
    pub fn consume_pending(&self, platform: Platform) -> Result<Option<Context>> {
        self.handoff.consume(platform)
    }

    /// Dispatch one protocol request. Failures become
    /// [`Response::Failure`]; they never propagate out of the boundary.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::SaveContext(draft) => match self.store.save(draft) {
                Ok(context) => Response::Saved { success: true, context },
                Err(e) => Response::failure(e),
            },

            Request::GetAllContexts => {
                Response::Contexts { contexts: self.store.get_all().to_vec() }
            }

            Request::GetLatestContext => {
                Response::Latest { context: self.store.get_latest().cloned() }
            }

            Request::DeleteContext { id } => match self.store.delete(id) {
                Ok(_) => Response::Ack { success: true },
                Err(e) => Response::failure(e),
            },

            Request::ClearAll => match self.store.clear() {
                Ok(()) => Response::Ack { success: true },
                Err(e) => Response::failure(e),
            },

            Request::SendToPlatform { context, target_platform } => {
                match self.handoff.publish(&mut self.store, context, target_platform) {
                    Ok(_) => Response::Ack { success: true },
                    Err(e) => Response::failure(e),
                }
            }

            Request::GetPendingContext { platform } => match self.handoff.consume(platform) {
                Ok(context) => Response::Pending { context },
                Err(e) => Response::failure(e),
            },

            Request::ExportAll => Response::Export { data: self.store.export_all() },

            Request::ImportData { data } => match self.store.import_data(&data) {
                Ok(count) => Response::Imported { success: true, count },
                Err(e) => Response::failure(e),
            },

            Request::CaptureContext { platform, html, url } => {
                let doc = Html::parse_document(&html);
                match self.capture(platform, &doc, &url) {
                    Ok(context) => Response::Saved { success: true, context },
                    Err(e) => Response::failure(e),
                }
            }

            Request::PasteContext { platform, html, text } => {
                let doc = Html::parse_document(&html);
                match adapter_for(platform).inject_into_input(&doc, &text) {
                    Ok(injection) => Response::Injection { success: true, injection },
                    Err(e) => Response::failure(e),
                }
            }
        }
    }
}
