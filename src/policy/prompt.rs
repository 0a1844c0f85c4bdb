//! Classification of free-text engine prompts.
//!
//! The engine asks questions in plain English. Matching is by substring on
//! the lowercased text, checked in the order of `PromptKind`'s variants.

/// What a prompt is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// Declare attackers.
    Attackers,
    /// Declare blockers.
    Blockers,
    /// Choose a spell or ability target.
    Target,
    /// Choose cards to discard.
    Discard,
    /// Pick a creature for some other effect.
    WhichCreature,
    /// Anything else; answered with an empty line.
    Other,
}

impl PromptKind {
    /// Classify prompt text.
    ///
    /// ```
    /// use rust_ccg_agent::policy::PromptKind;
    ///
    /// assert_eq!(PromptKind::classify("Declare attackers:"), PromptKind::Attackers);
    /// assert_eq!(PromptKind::classify("Choose a target for Lightning Bolt"), PromptKind::Target);
    /// assert_eq!(PromptKind::classify("Mulligan?"), PromptKind::Other);
    /// ```
    #[must_use]
    pub fn classify(prompt: &str) -> Self {
        let text = prompt.to_lowercase();

        if text.contains("attackers") || (text.contains("attack") && text.contains("creature")) {
            PromptKind::Attackers
        } else if text.contains("blockers") || text.contains("block with") {
            PromptKind::Blockers
        } else if text.contains("choose a target") || text.contains("select a target") {
            PromptKind::Target
        } else if text.contains("which cards would you like to discard") {
            PromptKind::Discard
        } else if text.contains("which creature") {
            PromptKind::WhichCreature
        } else {
            PromptKind::Other
        }
    }
}
