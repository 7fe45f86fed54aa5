//! ChatGPT (chat.openai.com, chatgpt.com)

use super::Adapter;
use crate::extract::{ComposerSelector, ExtractionStrategy, StrategyKind, TitleProbe};
use crate::models::Platform;

/// ChatGPT marks every turn with `data-message-author-role`, which has been
/// stable across releases; the class-based pair is kept as a fallback for
/// older conversation views.
static STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "author-role-attribute",
        kind: StrategyKind::RoleAttribute {
            selector: "[data-message-author-role]",
            attribute: "data-message-author-role",
            content: Some(".markdown, .whitespace-pre-wrap"),
        },
    },
    ExtractionStrategy {
        name: "author-role-pair",
        kind: StrategyKind::RolePair {
            user: "[data-message-author-role=\"user\"]",
            assistant: "[data-message-author-role=\"assistant\"]",
        },
    },
];

static TITLE_PROBES: &[TitleProbe] = &[
    TitleProbe::Chrome {
        selector: "nav a.bg-token-sidebar-surface-secondary",
        reject: &[],
    },
    TitleProbe::DocumentTitle { strip: &[" - ChatGPT"], reject: &["ChatGPT"] },
    TitleProbe::FirstUserMessage,
];

static COMPOSER: &[ComposerSelector] = &[
    ComposerSelector::new("#prompt-textarea"),
    ComposerSelector::new("textarea[placeholder*=\"Message\"]"),
];

pub struct ChatGptAdapter;

impl Adapter for ChatGptAdapter {
    fn platform(&self) -> Platform {
        Platform::Chatgpt
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
