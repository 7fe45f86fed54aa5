//! Extraction engine: strategy cascade, title probes, composer lookup
//!
//! Chat sites ship no stable public API for reading a conversation back out
//! of the page, and their DOM markup changes across releases. Each adapter
//! therefore carries an *ordered list of strategy descriptors* - plain data,
//! so new strategies can be appended without touching the shared algorithm -
//! and this module executes them:
//!
//! - [`cascade::run_cascade`] tries strategies most-specific-first and stops
//!   at the first one that yields any message node (first success wins,
//!   overlapping selectors never produce merged duplicates).
//! - [`title::run_probes`] tries title sources in priority order, down to a
//!   title synthesized from the first user message.
//! - [`composer::plan_injection`] locates the platform's input field and
//!   describes how text must be written into it.
//!
//! # Error Handling Strategy
//!
//! Extraction never fails: an exhausted cascade returns an empty sequence,
//! which callers surface as a "no messages found" condition rather than an
//! error. Only composer lookup has a hard failure (`InputNotFound`), because
//! an injection with no target cannot proceed.

pub mod cascade;
pub mod composer;
pub mod strategy;
pub mod title;

pub use cascade::{CascadeOutcome, run_cascade};
pub use composer::{ComposerSelector, Injection, InjectionMechanism, plan_injection};
pub use strategy::{ExtractionStrategy, StrategyKind};
pub use title::{TitleProbe, run_probes};
