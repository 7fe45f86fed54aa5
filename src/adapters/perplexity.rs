//! Perplexity (perplexity.ai)
//!
//! Perplexity renders a Q&A thread rather than labelled chat turns: query
//! blocks and prose answer blocks, paired in page order. The answer
//! selectors are loose class-substring patterns, so a minimum-length gate
//! keeps source chips and related-question chrome out of the transcript.

use super::Adapter;
use crate::extract::{ComposerSelector, ExtractionStrategy, StrategyKind, TitleProbe};
use crate::models::Platform;

static STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "query-answer-blocks",
        kind: StrategyKind::PairedBlocks {
            query: "[class*=\"query\"], [class*=\"question\"], .whitespace-pre-wrap",
            answer: "[class*=\"prose\"], [class*=\"answer\"], [class*=\"response\"]",
            min_answer_len: 20,
        },
    },
    ExtractionStrategy {
        name: "thread-messages",
        kind: StrategyKind::AlternatingTurns {
            selector: "[class*=\"thread-message\"], [class*=\"message-block\"]",
            min_len: 0,
        },
    },
];

static TITLE_PROBES: &[TitleProbe] = &[
    TitleProbe::Chrome { selector: "h1, [class*=\"title\"]", reject: &["Perplexity"] },
    TitleProbe::DocumentTitle { strip: &[" - Perplexity"], reject: &["Perplexity"] },
    TitleProbe::FirstUserMessage,
];

static COMPOSER: &[ComposerSelector] = &[
    ComposerSelector::editable("textarea"),
    ComposerSelector::editable("[contenteditable=\"true\"]"),
    ComposerSelector::editable("input[type=\"text\"]"),
    ComposerSelector::editable("[class*=\"input\"]"),
];

pub struct PerplexityAdapter;

impl Adapter for PerplexityAdapter {
    fn platform(&self) -> Platform {
        Platform::Perplexity
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
