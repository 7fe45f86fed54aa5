//! Platform adapters: one extraction/injection contract, four variants
//!
//! Every supported site implements the same [`Adapter`] contract. The
//! adapters themselves are thin - each one contributes selector tables
//! (extraction strategies, title probes, composer selectors) observed on its
//! site, while the merge/sort/normalize machinery lives once in
//! [`crate::extract`]. Adding support for a markup change means appending a
//! strategy descriptor, not writing extraction code.

pub mod chatgpt;
pub mod claude;
pub mod gemini;
pub mod perplexity;

use scraper::Html;

use crate::error::Result;
use crate::extract::{
    ComposerSelector, ExtractionStrategy, Injection, TitleProbe, plan_injection, run_cascade,
    run_probes,
};
use crate::models::{Message, Platform};

pub use chatgpt::ChatGptAdapter;
pub use claude::ClaudeAdapter;
pub use gemini::GeminiAdapter;
pub use perplexity::PerplexityAdapter;

/// The uniform extraction/injection contract every platform implements.
///
/// Implementations supply selector tables; the extraction, title, and
/// injection algorithms are provided methods shared across all platforms.
pub trait Adapter: Send + Sync {
    fn platform(&self) -> Platform;

    /// Extraction strategies, most specific first
    fn strategies(&self) -> &'static [ExtractionStrategy];

    /// Title sources, in priority order
    fn title_probes(&self) -> &'static [TitleProbe];

    /// Composer element candidates, in priority order
    fn composer_selectors(&self) -> &'static [ComposerSelector];

    /// Extract the conversation in on-page order. Never fails; an empty
    /// result means no strategy matched any message node.
    fn extract_messages(&self, doc: &Html) -> Vec<Message> {
        run_cascade(doc, self.strategies()).messages
    }

    /// Extract the conversation title, if any source yields one.
    fn extract_title(&self, doc: &Html) -> Option<String> {
        run_probes(doc, self.title_probes(), || self.extract_messages(doc))
    }

    /// Build an injection plan writing `text` into the platform's composer.
    fn inject_into_input(&self, doc: &Html, text: &str) -> Result<Injection> {
        plan_injection(doc, self.composer_selectors(), text)
    }
}

/// Look up the adapter for a platform.
pub fn adapter_for(platform: Platform) -> &'static dyn Adapter {
    match platform {
        Platform::Chatgpt => &ChatGptAdapter,
        Platform::Claude => &ClaudeAdapter,
        Platform::Gemini => &GeminiAdapter,
        Platform::Perplexity => &PerplexityAdapter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_for_covers_all_platforms() {
        for platform in Platform::ALL {
            assert_eq!(adapter_for(platform).platform(), platform);
        }
    }

    #[test]
    fn test_every_adapter_has_a_cascade_and_composer_list() {
        for platform in Platform::ALL {
            let adapter = adapter_for(platform);
            assert!(!adapter.strategies().is_empty());
            assert!(!adapter.title_probes().is_empty());
            assert!(!adapter.composer_selectors().is_empty());
        }
    }
}
