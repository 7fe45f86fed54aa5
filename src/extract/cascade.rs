use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use super::strategy::{ExtractionStrategy, StrategyKind};
use crate::models::{Message, Role};
use crate::parsers::normalize_role;

/// Result of running an extraction cascade.
///
/// `strategies_tried` counts evaluated strategies so tests can verify the
/// first-success-wins short-circuit.
#[derive(Debug, Clone)]
pub struct CascadeOutcome {
    pub messages: Vec<Message>,
    /// Name of the strategy that matched, if any
    pub matched: Option<&'static str>,
    pub strategies_tried: usize,
}

/// Run an adapter's strategy cascade against a parsed document.
///
/// Strategies are tried in priority order; a strategy succeeds as soon as it
/// yields at least one user or assistant node, and later strategies are not
/// evaluated. The matched nodes are already in document order (the document
/// is walked with a combined selector, so traversal order is document
/// order), their visible text is trimmed, and empty entries are dropped.
///
/// An exhausted cascade yields an empty message list - a valid result, not
/// an error. This function never panics on malformed documents.
pub fn run_cascade(doc: &Html, strategies: &[ExtractionStrategy]) -> CascadeOutcome {
    for (index, strategy) in strategies.iter().enumerate() {
        let candidates = apply_strategy(doc, &strategy.kind);
        if candidates.is_empty() {
            continue;
        }

        let messages = candidates
            .into_iter()
            .filter_map(|(role, text)| {
                let content = text.trim();
                if content.is_empty() { None } else { Some(Message::new(role, content)) }
            })
            .collect();

        return CascadeOutcome {
            messages,
            matched: Some(strategy.name),
            strategies_tried: index + 1,
        };
    }

    CascadeOutcome { messages: Vec::new(), matched: None, strategies_tried: strategies.len() }
}

/// Collect `(role, raw text)` candidates for one strategy, in document order.
/// An empty vec means the strategy found no nodes and the cascade moves on.
fn apply_strategy(doc: &Html, kind: &StrategyKind) -> Vec<(Role, String)> {
    match kind {
        StrategyKind::RoleAttribute { selector, attribute, content } => {
            let Ok(sel) = Selector::parse(selector) else { return Vec::new() };
            let content_sel = content.and_then(|c| Selector::parse(c).ok());

            doc.select(&sel)
                .filter_map(|el| {
                    let role = normalize_role(el.value().attr(attribute)?);
                    if !matches!(role, Role::User | Role::Assistant) {
                        return None;
                    }
                    let text = match &content_sel {
                        Some(inner) => {
                            el.select(inner).next().map(|c| visible_text(&c)).unwrap_or_default()
                        }
                        None => visible_text(&el),
                    };
                    Some((role, text))
                })
                .collect()
        }

        StrategyKind::AttributeSubstring { selector, attribute, user_marker, assistant_markers } => {
            let Ok(sel) = Selector::parse(selector) else { return Vec::new() };

            doc.select(&sel)
                .filter_map(|el| {
                    let value = el.value().attr(attribute)?;
                    let role = if value.contains(user_marker) {
                        Role::User
                    } else if assistant_markers.iter().any(|m| value.contains(m)) {
                        Role::Assistant
                    } else {
                        return None;
                    };
                    Some((role, visible_text(&el)))
                })
                .collect()
        }

        StrategyKind::RolePair { user, assistant } => merge_by_position(doc, user, assistant, 0),

        StrategyKind::PairedBlocks { query, answer, min_answer_len } => {
            merge_by_position(doc, query, answer, *min_answer_len)
        }

        StrategyKind::AlternatingTurns { selector, min_len } => {
            let Ok(sel) = Selector::parse(selector) else { return Vec::new() };
            let mut role = Role::User;
            let mut candidates = Vec::new();

            for el in doc.select(&sel) {
                let text = visible_text(&el);
                if text.len() <= *min_len {
                    continue;
                }
                candidates.push((role.clone(), text));
                role = if role == Role::User { Role::Assistant } else { Role::User };
            }
            candidates
        }
    }
}

/// Walk the document once with the union of both selector groups, so user
/// and assistant nodes come out interleaved in document order rather than in
/// per-query order. `min_assistant_len` gates assistant blocks (0 = keep all
/// non-empty).
fn merge_by_position(
    doc: &Html,
    user: &str,
    assistant: &str,
    min_assistant_len: usize,
) -> Vec<(Role, String)> {
    let combined = format!("{user}, {assistant}");
    let (Ok(combined_sel), Ok(user_sel)) = (Selector::parse(&combined), Selector::parse(user))
    else {
        return Vec::new();
    };

    // A node matching both groups counts as user
    let user_nodes: HashSet<_> = doc.select(&user_sel).map(|el| el.id()).collect();

    doc.select(&combined_sel)
        .filter_map(|el| {
            if user_nodes.contains(&el.id()) {
                Some((Role::User, visible_text(&el)))
            } else {
                let text = visible_text(&el);
                if min_assistant_len > 0 && text.len() <= min_assistant_len {
                    None
                } else {
                    Some((Role::Assistant, text))
                }
            }
        })
        .collect()
}

/// Visible text of an element: concatenated text nodes, outer whitespace
/// trimmed by the caller.
pub(crate) fn visible_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
