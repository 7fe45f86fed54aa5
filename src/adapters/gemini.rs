//! Gemini (gemini.google.com)

use super::Adapter;
use crate::extract::{ComposerSelector, ExtractionStrategy, StrategyKind, TitleProbe};
use crate::models::Platform;

static STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "author-pair",
        kind: StrategyKind::RolePair {
            user: "[data-message-author=\"user\"], .query-content, .user-query",
            assistant: "[data-message-author=\"model\"], .model-response, .response-content",
        },
    },
    ExtractionStrategy {
        name: "query-response-classes",
        kind: StrategyKind::RolePair { user: ".query-text", assistant: ".response-text" },
    },
    // Structural last resort; short blocks are chrome, not turns
    ExtractionStrategy {
        name: "alternating-turns",
        kind: StrategyKind::AlternatingTurns {
            selector: "[class*=\"turn\"], [class*=\"message\"]",
            min_len: 10,
        },
    },
];

static TITLE_PROBES: &[TitleProbe] = &[
    TitleProbe::Chrome {
        selector: "[class*=\"conversation-title\"], [class*=\"chat-title\"]",
        reject: &[],
    },
    TitleProbe::DocumentTitle { strip: &[" - Gemini", "Gemini"], reject: &[] },
    TitleProbe::FirstUserMessage,
];

static COMPOSER: &[ComposerSelector] = &[
    ComposerSelector::new(".ql-editor"),
    ComposerSelector::new("[contenteditable=\"true\"]"),
    ComposerSelector::new("textarea"),
    ComposerSelector::new("rich-textarea"),
    ComposerSelector::new("[data-placeholder]"),
];

pub struct GeminiAdapter;

impl Adapter for GeminiAdapter {
    fn platform(&self) -> Platform {
        Platform::Gemini
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
