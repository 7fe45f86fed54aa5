//! Handoff integration tests: publish on one page, deliver on the next
mod common;

use std::time::Duration;

use scraper::Html;

use ai_context_bridge::bridge::{Bridge, DocumentSource};
use ai_context_bridge::error::BridgeError;
use ai_context_bridge::models::Platform;

use common::{PageBuilder, claude_conversation, data_dir};

/// Serves a fixed sequence of page snapshots, like a page that is still
/// rendering its composer.
struct Sequence {
    pages: Vec<String>,
    served: usize,
}

impl Sequence {
    fn new(pages: Vec<String>) -> Self {
        Self { pages, served: 0 }
    }
}

impl DocumentSource for Sequence {
    fn fetch(&mut self) -> Option<Html> {
        let page = self.pages.get(self.served.min(self.pages.len() - 1))?;
        self.served += 1;
        Some(Html::parse_document(page))
    }
}

#[test]
fn test_send_then_deliver_across_bridge_instances() {
    let dir = data_dir();

    // Origin page: capture and publish
    let published = {
        let mut origin = Bridge::open(dir.path()).unwrap();
        let doc = Html::parse_document(&claude_conversation());
        origin
            .send_to_platform(Platform::Claude, &doc, "https://claude.ai/chat/1", Platform::Gemini)
            .unwrap()
    };
    assert_eq!(published.open_url, "https://gemini.google.com/app");

    // Destination page: a separate process picks the handoff up
    let destination = Bridge::open(dir.path()).unwrap();
    let mut source = Sequence::new(vec![PageBuilder::gemini().composer().build()]);

    let injection = destination
        .deliver_pending(
            Platform::Gemini,
            &mut source,
            Duration::from_millis(100),
            Duration::from_millis(10),
        )
        .unwrap()
        .unwrap();

    assert_eq!(injection.selector, ".ql-editor");
    assert!(injection.text.starts_with("[Previous conversation from Claude]"));
    assert!(injection.text.contains("Why does this borrow fail?"));
}

#[test]
fn test_delivery_happens_exactly_once() {
    let dir = data_dir();
    let mut bridge = Bridge::open(dir.path()).unwrap();

    let doc = Html::parse_document(&claude_conversation());
    bridge
        .send_to_platform(Platform::Claude, &doc, "", Platform::Chatgpt)
        .unwrap();

    let page = PageBuilder::chatgpt().composer().build();
    let mut first = Sequence::new(vec![page.clone()]);
    let mut second = Sequence::new(vec![page]);
    let timeout = Duration::from_millis(100);
    let interval = Duration::from_millis(10);

    let delivered = bridge
        .deliver_pending(Platform::Chatgpt, &mut first, timeout, interval)
        .unwrap();
    assert!(delivered.is_some());

    // A reload of the destination page finds nothing
    let again = bridge
        .deliver_pending(Platform::Chatgpt, &mut second, timeout, interval)
        .unwrap();
    assert!(again.is_none());
}

#[test]
fn test_wrong_platform_does_not_consume() {
    let dir = data_dir();
    let mut bridge = Bridge::open(dir.path()).unwrap();

    let doc = Html::parse_document(&claude_conversation());
    bridge
        .send_to_platform(Platform::Claude, &doc, "", Platform::Perplexity)
        .unwrap();

    let mut gemini_page = Sequence::new(vec![PageBuilder::gemini().composer().build()]);
    let timeout = Duration::from_millis(100);
    let interval = Duration::from_millis(10);

    // Gemini loads first but the handoff is addressed to Perplexity
    let nothing = bridge
        .deliver_pending(Platform::Gemini, &mut gemini_page, timeout, interval)
        .unwrap();
    assert!(nothing.is_none());

    let mut perplexity_page =
        Sequence::new(vec![PageBuilder::perplexity().composer().build()]);
    let delivered = bridge
        .deliver_pending(Platform::Perplexity, &mut perplexity_page, timeout, interval)
        .unwrap();
    assert!(delivered.is_some());
}

#[test]
fn test_composer_appearing_late_is_waited_for() {
    let dir = data_dir();
    let mut bridge = Bridge::open(dir.path()).unwrap();

    let doc = Html::parse_document(&claude_conversation());
    bridge
        .send_to_platform(Platform::Claude, &doc, "", Platform::Chatgpt)
        .unwrap();

    // Two composer-less render frames, then the real page
    let loading = PageBuilder::chatgpt().raw("<div>loading</div>").build();
    let ready = PageBuilder::chatgpt().composer().build();
    let mut source = Sequence::new(vec![loading.clone(), loading, ready]);

    let injection = bridge
        .deliver_pending(
            Platform::Chatgpt,
            &mut source,
            Duration::from_millis(500),
            Duration::from_millis(5),
        )
        .unwrap()
        .unwrap();

    assert_eq!(injection.selector, "#prompt-textarea");
    assert!(source.served >= 3);
}

#[test]
fn test_composer_never_appearing_reports_input_not_found() {
    let dir = data_dir();
    let mut bridge = Bridge::open(dir.path()).unwrap();

    let doc = Html::parse_document(&claude_conversation());
    bridge
        .send_to_platform(Platform::Claude, &doc, "", Platform::Chatgpt)
        .unwrap();

    let mut source =
        Sequence::new(vec![PageBuilder::chatgpt().raw("<div>loading</div>").build()]);

    let err = bridge
        .deliver_pending(
            Platform::Chatgpt,
            &mut source,
            Duration::from_millis(30),
            Duration::from_millis(5),
        )
        .unwrap_err();

    assert!(matches!(err, BridgeError::InputNotFound));
    // The handoff was consumed, but the context itself is still stored
    assert!(bridge.store().get_latest().is_some());
}

#[test]
fn test_sending_empty_page_publishes_nothing() {
    let dir = data_dir();
    let mut bridge = Bridge::open(dir.path()).unwrap();

    let doc = Html::parse_document("<p>marketing page</p>");
    let err = bridge
        .send_to_platform(Platform::Claude, &doc, "", Platform::Gemini)
        .unwrap_err();

    assert!(matches!(err, BridgeError::NoMessagesFound));
    assert!(bridge.consume_pending(Platform::Gemini).unwrap().is_none());
}
