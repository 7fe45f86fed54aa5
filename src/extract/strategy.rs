/// One entry in an adapter's extraction cascade.
///
/// Strategies are ordered most-specific-first: stable attribute-based
/// selectors, then class-name selectors, then structural heuristics that
/// survive markup churn at the cost of precision.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionStrategy {
    /// Short name used in diagnostics and cascade instrumentation
    pub name: &'static str,
    pub kind: StrategyKind,
}

/// How a strategy finds user and assistant nodes. Pure configuration data;
/// execution lives in [`super::cascade`].
#[derive(Debug, Clone, Copy)]
pub enum StrategyKind {
    /// One node set; the role is the literal value of an attribute
    /// (e.g. ChatGPT's `data-message-author-role`). Message text is read
    /// from an inner content element when `content` is set.
    RoleAttribute {
        selector: &'static str,
        attribute: &'static str,
        content: Option<&'static str>,
    },

    /// One node set; the role is inferred from substrings of an attribute
    /// value (e.g. Claude's `data-testid` values containing "user" or
    /// "claude"). The user marker is checked first; unmarked nodes are
    /// skipped.
    AttributeSubstring {
        selector: &'static str,
        attribute: &'static str,
        user_marker: &'static str,
        assistant_markers: &'static [&'static str],
    },

    /// Separate user and assistant selector groups, merged into one sequence
    /// by document position.
    RolePair { user: &'static str, assistant: &'static str },

    /// Question/answer blocks merged by document position, with a minimum
    /// length gate on answers to skip chrome that matches the loose
    /// answer selectors.
    PairedBlocks {
        query: &'static str,
        answer: &'static str,
        min_answer_len: usize,
    },

    /// Structural last resort: matched blocks alternate user/assistant in
    /// document order, starting with user. Blocks with trimmed text no
    /// longer than `min_len` are skipped and do not flip the parity.
    AlternatingTurns { selector: &'static str, min_len: usize },
}
