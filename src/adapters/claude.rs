//! Claude (claude.ai)
//!
//! Claude's markup has churned the most across releases, so its cascade is
//! the deepest: `data-testid` substring matching first, then the exact
//! testid pair, then the legacy font classes, then generic role attributes.

use super::Adapter;
use crate::extract::{ComposerSelector, ExtractionStrategy, StrategyKind, TitleProbe};
use crate::models::Platform;

static STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "testid-substring",
        kind: StrategyKind::AttributeSubstring {
            selector: "[data-testid*=\"message\"]",
            attribute: "data-testid",
            user_marker: "user",
            assistant_markers: &["assistant", "claude"],
        },
    },
    ExtractionStrategy {
        name: "testid-pair",
        kind: StrategyKind::RolePair {
            user: "[data-testid=\"user-message\"]",
            assistant: "[data-testid=\"assistant-message\"]",
        },
    },
    ExtractionStrategy {
        name: "font-classes",
        kind: StrategyKind::RolePair {
            user: ".font-user-message",
            assistant: ".font-claude-message",
        },
    },
    ExtractionStrategy {
        name: "data-role-pair",
        kind: StrategyKind::RolePair {
            user: "[data-role=\"user\"]",
            assistant: "[data-role=\"assistant\"]",
        },
    },
];

static TITLE_PROBES: &[TitleProbe] = &[
    TitleProbe::SidebarActive {
        selector: "[class*=\"active\"] [class*=\"truncate\"], nav a[aria-current=\"page\"]",
    },
    TitleProbe::DocumentTitle { strip: &[" - Claude", "Claude"], reject: &[] },
    TitleProbe::FirstUserMessage,
];

static COMPOSER: &[ComposerSelector] = &[
    ComposerSelector::new("[contenteditable=\"true\"]"),
    ComposerSelector::new(".ProseMirror"),
    ComposerSelector::new("textarea"),
    ComposerSelector::new("[data-testid=\"composer-input\"]"),
];

pub struct ClaudeAdapter;

impl Adapter for ClaudeAdapter {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn strategies(&self) -> &'static [ExtractionStrategy] {
        STRATEGIES
    }

    fn title_probes(&self) -> &'static [TitleProbe] {
        TITLE_PROBES
    }

    fn composer_selectors(&self) -> &'static [ComposerSelector] {
        COMPOSER
    }
}
