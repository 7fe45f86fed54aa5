use crate::models::{Context, Message, Role};

/// Titles synthesized from the first user message are capped at 50 chars
const TITLE_MAX_CHARS: usize = 50;

/// Rough token estimate used when truncating for a destination context window
const CHARS_PER_TOKEN: usize = 4;

/// Format a captured context as the text block injected into a destination
/// composer. The destination model sees the source platform, each turn
/// labelled by role, and a continuation prompt.
pub fn format_for_injection(context: &Context) -> String {
    let mut out = format!("[Previous conversation from {}]\n\n", context.source.display_name());

    let body = context
        .messages
        .iter()
        .map(|msg| format!("**{}:** {}", msg.role.label(), msg.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");
    out.push_str(&body);

    out.push_str("\n\n[End of previous context. Please continue helping with this topic.]");
    out
}

/// Derive a title from the first user message: its first line, truncated to
/// 50 characters with an ellipsis when longer.
pub fn generate_title(messages: &[Message]) -> String {
    let Some(first_user) = messages.iter().find(|m| m.role == Role::User) else {
        return "Untitled Conversation".to_string();
    };

    let first_line = first_user.content.lines().next().unwrap_or_default().trim();
    truncate_chars(first_line, TITLE_MAX_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

/// Summary counts shown by the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub total_characters: usize,
}

pub fn conversation_stats(messages: &[Message]) -> ConversationStats {
    ConversationStats {
        total_messages: messages.len(),
        user_messages: messages.iter().filter(|m| m.role == Role::User).count(),
        assistant_messages: messages.iter().filter(|m| m.role == Role::Assistant).count(),
        total_characters: messages.iter().map(|m| m.content.len()).sum(),
    }
}

/// Keep the most recent messages that fit a rough token budget
/// (~4 chars per token). The tail of the conversation survives; older
/// messages are dropped first.
pub fn truncate_to_token_limit(messages: &[Message], max_tokens: usize) -> Vec<Message> {
    let max_chars = max_tokens * CHARS_PER_TOKEN;
    let mut total = 0;
    let mut kept = Vec::new();

    for msg in messages.iter().rev() {
        let len = msg.content.len();
        if total + len > max_chars {
            break;
        }
        total += len;
        kept.push(msg.clone());
    }

    kept.reverse();
    kept
}
