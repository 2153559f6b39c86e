//! Search results.

/// Text shown when a search came back without any items.
pub const NO_RESULTS_MESSAGE: &str = "I couldn't find relevant results.";

/// What a web search produced. Never stored in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Snippet of the first result item.
    Snippet(String),
    NoResults,
}

impl SearchOutcome {
    /// Render as the text shown to the user.
    pub fn into_text(self) -> String {
        match self {
            Self::Snippet(text) => text,
            Self::NoResults => NO_RESULTS_MESSAGE.to_string(),
        }
    }
}
