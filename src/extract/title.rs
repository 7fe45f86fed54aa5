use scraper::{Html, Selector};

use super::cascade::visible_text;
use crate::models::{Message, Role};
use crate::parsers::generate_title;

/// One source a conversation title can come from, tried in adapter priority
/// order. Returns the first probe yielding non-empty text.
#[derive(Debug, Clone, Copy)]
pub enum TitleProbe {
    /// A page-chrome title element; values in `reject` (typically the bare
    /// platform name) do not count as a title
    Chrome { selector: &'static str, reject: &'static [&'static str] },

    /// The document `<title>`, with platform-name suffixes stripped
    DocumentTitle { strip: &'static [&'static str], reject: &'static [&'static str] },

    /// The sidebar's active-conversation indicator
    SidebarActive { selector: &'static str },

    /// Synthesized from the first user message (first line, 50 chars)
    FirstUserMessage,
}

/// Execute a probe list against a document. `messages` supplies the
/// extracted conversation lazily, only when a [`TitleProbe::FirstUserMessage`]
/// probe is reached.
pub fn run_probes(
    doc: &Html,
    probes: &[TitleProbe],
    mut messages: impl FnMut() -> Vec<Message>,
) -> Option<String> {
    for probe in probes {
        let found = match probe {
            TitleProbe::Chrome { selector, reject } => {
                first_text(doc, selector).filter(|t| !reject.contains(&t.as_str()))
            }
            TitleProbe::SidebarActive { selector } => first_text(doc, selector),
            TitleProbe::DocumentTitle { strip, reject } => {
                let mut title = first_text(doc, "title").unwrap_or_default();
                for suffix in *strip {
                    title = title.replace(suffix, "");
                }
                let title = title.trim().to_string();
                if title.is_empty() || reject.contains(&title.as_str()) {
                    None
                } else {
                    Some(title)
                }
            }
            TitleProbe::FirstUserMessage => {
                let msgs = messages();
                if msgs.iter().any(|m| m.role == Role::User) {
                    Some(generate_title(&msgs))
                } else {
                    None
                }
            }
        };

        if let Some(title) = found {
            return Some(title);
        }
    }

    None
}

fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel).map(|el| visible_text(&el)).find(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBES: &[TitleProbe] = &[
        TitleProbe::Chrome { selector: ".conversation-title", reject: &["Gemini"] },
        TitleProbe::DocumentTitle { strip: &[" - Gemini"], reject: &["Gemini"] },
        TitleProbe::FirstUserMessage,
    ];

    fn no_messages() -> Vec<Message> {
        Vec::new()
    }

    #[test]
    fn test_chrome_element_wins() {
        let doc = Html::parse_document(
            r#"<head><title>Other - Gemini</title></head>
               <body><div class="conversation-title">Rust lifetimes</div></body>"#,
        );
        assert_eq!(run_probes(&doc, PROBES, no_messages), Some("Rust lifetimes".to_string()));
    }

    #[test]
    fn test_document_title_strips_suffix() {
        let doc = Html::parse_document("<head><title>Rust lifetimes - Gemini</title></head>");
        assert_eq!(run_probes(&doc, PROBES, no_messages), Some("Rust lifetimes".to_string()));
    }

    #[test]
    fn test_bare_platform_name_is_rejected() {
        let doc = Html::parse_document("<head><title>Gemini</title></head>");
        assert_eq!(run_probes(&doc, PROBES, no_messages), None);
    }

    #[test]
    fn test_falls_back_to_first_user_message() {
        let doc = Html::parse_document("<head><title>Gemini</title></head>");
        let title = run_probes(&doc, PROBES, || {
            vec![Message::new(Role::User, "Explain borrow checking")]
        });
        assert_eq!(title, Some("Explain borrow checking".to_string()));
    }

    #[test]
    fn test_no_user_message_yields_none() {
        let doc = Html::parse_document("<body></body>");
        let title =
            run_probes(&doc, PROBES, || vec![Message::new(Role::Assistant, "Welcome back")]);
        assert_eq!(title, None);
    }
}
