use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four supported AI chat sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Chatgpt,
    Claude,
    Gemini,
    Perplexity,
}

impl Platform {
    pub const ALL: [Platform; 4] =
        [Platform::Chatgpt, Platform::Claude, Platform::Gemini, Platform::Perplexity];

    /// Stable identifier used in storage and the request protocol
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "chatgpt",
            Platform::Claude => "claude",
            Platform::Gemini => "gemini",
            Platform::Perplexity => "perplexity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "ChatGPT",
            Platform::Claude => "Claude",
            Platform::Gemini => "Gemini",
            Platform::Perplexity => "Perplexity",
        }
    }

    /// Canonical "new conversation" URL opened by the handoff flow
    pub fn new_chat_url(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "https://chatgpt.com/",
            Platform::Claude => "https://claude.ai/new",
            Platform::Gemini => "https://gemini.google.com/app",
            Platform::Perplexity => "https://www.perplexity.ai/",
        }
    }

    /// Host domains this platform is served from
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            Platform::Chatgpt => &["chat.openai.com", "chatgpt.com"],
            Platform::Claude => &["claude.ai"],
            Platform::Gemini => &["gemini.google.com"],
            Platform::Perplexity => &["www.perplexity.ai", "perplexity.ai"],
        }
    }

    /// Detect the platform serving a page URL, by hostname match
    pub fn detect(url: &str) -> Option<Platform> {
        let rest = url.split("://").nth(1).unwrap_or(url);
        let hostname = rest.split(['/', '?', '#']).next().unwrap_or(rest);

        Platform::ALL
            .into_iter()
            .find(|p| p.domains().iter().any(|domain| hostname.contains(domain)))
    }

    /// The other three platforms, as "send to" targets
    pub fn others(&self) -> impl Iterator<Item = Platform> + '_ {
        Platform::ALL.into_iter().filter(move |p| p != self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chatgpt" => Ok(Platform::Chatgpt),
            "claude" => Ok(Platform::Claude),
            "gemini" => Ok(Platform::Gemini),
            "perplexity" => Ok(Platform::Perplexity),
            other => Err(format!(
                "unknown platform '{other}' (expected chatgpt, claude, gemini, or perplexity)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_url() {
        assert_eq!(Platform::detect("https://chatgpt.com/c/abc"), Some(Platform::Chatgpt));
        assert_eq!(Platform::detect("https://chat.openai.com/"), Some(Platform::Chatgpt));
        assert_eq!(Platform::detect("https://claude.ai/chat/123"), Some(Platform::Claude));
        assert_eq!(Platform::detect("https://gemini.google.com/app"), Some(Platform::Gemini));
        assert_eq!(Platform::detect("https://www.perplexity.ai/search"), Some(Platform::Perplexity));
        assert_eq!(Platform::detect("https://example.com/"), None);
    }

    #[test]
    fn test_detect_ignores_path_matches() {
        assert_eq!(Platform::detect("https://example.com/claude.ai"), None);
    }

    #[test]
    fn test_id_round_trips_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.id().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        assert_eq!(serde_json::to_string(&Platform::Chatgpt).unwrap(), "\"chatgpt\"");
        let p: Platform = serde_json::from_str("\"perplexity\"").unwrap();
        assert_eq!(p, Platform::Perplexity);
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = Platform::Claude.others().collect();
        assert_eq!(others.len(), 3);
        assert!(!others.contains(&Platform::Claude));
    }
}
