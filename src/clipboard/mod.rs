//! System clipboard output for formatted contexts
//!
//! When no driver is attached to apply an injection plan, the formatted
//! conversation can be put on the clipboard for a manual paste instead.

use anyhow::{Context as _, Result};
use arboard::Clipboard;

/// Upper bound on clipboard payloads; a full 50-message conversation stays
/// far below this
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Clipboard seam, so tests run without a system clipboard
trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl SystemClipboard {
    fn new() -> Result<Self> {
        Ok(Self(Clipboard::new().context("Failed to initialize system clipboard")?))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to write to clipboard")?;
        Ok(())
    }
}

fn validate(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Nothing to copy: formatted context is empty");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        anyhow::bail!(
            "Formatted context too large for the clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_BYTES
        );
    }
    Ok(())
}

#[cfg(test)]
fn copy_with_sink(text: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    validate(text)?;
    sink.set_text(text)
}

/// Copy a formatted context to the system clipboard.
///
/// # Errors
///
/// Fails on empty or oversized text, or when no system clipboard is
/// available (headless environments).
pub fn copy_formatted_context(text: &str) -> Result<()> {
    validate(text)?;
    SystemClipboard::new()?.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copies_text_to_sink() {
        let mut mock = MockClipboard::default();
        copy_with_sink("**User:** Hi", &mut mock).unwrap();
        assert_eq!(mock.text.as_deref(), Some("**User:** Hi"));
    }

    #[test]
    fn test_rejects_empty_text() {
        let mut mock = MockClipboard::default();
        assert!(copy_with_sink("", &mut mock).is_err());
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_rejects_oversized_text() {
        let mut mock = MockClipboard::default();
        let huge = "x".repeat(MAX_CLIPBOARD_BYTES + 1);
        let err = copy_with_sink(&huge, &mut mock).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut mock = MockClipboard { fail: true, ..Default::default() };
        assert!(copy_with_sink("hello", &mut mock).is_err());
    }
}
