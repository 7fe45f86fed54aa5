use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// One entry in an adapter's composer priority list.
#[derive(Debug, Clone, Copy)]
pub struct ComposerSelector {
    pub selector: &'static str,
    /// Accept only editable matches (textarea/input or contenteditable).
    /// Needed where the selector list includes loose class-substring
    /// patterns that also match static chrome.
    pub editable_only: bool,
}

impl ComposerSelector {
    pub const fn new(selector: &'static str) -> Self {
        Self { selector, editable_only: false }
    }

    pub const fn editable(selector: &'static str) -> Self {
        Self { selector, editable_only: true }
    }
}

/// How text must be written so the host page's reactive state notices it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InjectionMechanism {
    /// Plain value assignment plus an input event (textarea / input)
    SetValue,
    /// Replace child nodes with a text paragraph and dispatch a synthetic
    /// input event (contenteditable / rich-text editors)
    ReplaceContent,
}

/// A concrete injection plan: which element to write to and how.
///
/// The engine never submits the message; applying the plan leaves the text
/// in the composer for the user to confirm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injection {
    /// The selector that located the composer
    pub selector: String,
    /// Tag name of the matched element
    pub element: String,
    pub mechanism: InjectionMechanism,
    pub text: String,
}

/// Locate the platform's composer via its selector priority list and build
/// an injection plan for `text`.
///
/// # Errors
///
/// Returns [`BridgeError::InputNotFound`] when no selector matches an
/// acceptable element.
pub fn plan_injection(
    doc: &Html,
    selectors: &[ComposerSelector],
    text: &str,
) -> Result<Injection> {
    for entry in selectors {
        let Ok(sel) = Selector::parse(entry.selector) else { continue };

        let found = doc.select(&sel).find(|el| !entry.editable_only || is_editable(el));
        if let Some(el) = found {
            return Ok(Injection {
                selector: entry.selector.to_string(),
                element: el.value().name().to_string(),
                mechanism: mechanism_for(&el),
                text: text.to_string(),
            });
        }
    }

    Err(BridgeError::InputNotFound)
}

fn is_editable(el: &ElementRef<'_>) -> bool {
    let tag = el.value().name();
    tag == "textarea"
        || tag == "input"
        || el.value().attr("contenteditable").is_some_and(|v| v != "false")
}

fn mechanism_for(el: &ElementRef<'_>) -> InjectionMechanism {
    match el.value().name() {
        "textarea" | "input" => InjectionMechanism::SetValue,
        _ => InjectionMechanism::ReplaceContent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTORS: &[ComposerSelector] = &[
        ComposerSelector::new("#prompt-box"),
        ComposerSelector::new("textarea"),
        ComposerSelector::editable("[class*=\"input\"]"),
    ];

    #[test]
    fn test_priority_order_is_respected() {
        let doc = Html::parse_document(
            r#"<textarea></textarea><div id="prompt-box" contenteditable="true"></div>"#,
        );
        let plan = plan_injection(&doc, SELECTORS, "hello").unwrap();
        assert_eq!(plan.selector, "#prompt-box");
        assert_eq!(plan.mechanism, InjectionMechanism::ReplaceContent);
    }

    #[test]
    fn test_textarea_uses_value_assignment() {
        let doc = Html::parse_document("<textarea placeholder=\"Ask anything\"></textarea>");
        let plan = plan_injection(&doc, SELECTORS, "hello").unwrap();
        assert_eq!(plan.element, "textarea");
        assert_eq!(plan.mechanism, InjectionMechanism::SetValue);
        assert_eq!(plan.text, "hello");
    }

    #[test]
    fn test_editable_only_skips_static_chrome() {
        // `.input-hint` matches the loose pattern but is not editable
        let doc = Html::parse_document(
            r#"<div class="input-hint">tips</div><div class="input-area" contenteditable="true"></div>"#,
        );
        let plan = plan_injection(&doc, &[SELECTORS[2]], "hello").unwrap();
        assert_eq!(plan.mechanism, InjectionMechanism::ReplaceContent);
    }

    #[test]
    fn test_no_match_is_input_not_found() {
        let doc = Html::parse_document("<p>static page</p>");
        let err = plan_injection(&doc, SELECTORS, "hello").unwrap_err();
        assert!(matches!(err, BridgeError::InputNotFound));
    }
}
