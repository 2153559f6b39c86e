//! Error classification and recovery hints.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    Io,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CheckCredentials,
    CheckConfiguration,
    IncreaseTimeout,
    TryAgainLater,
    None,
}

impl RecoverySuggestion {
    /// Short user-facing hint, if there is anything useful to say.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CheckCredentials => Some("check GEMINI_API_KEY / SEARCH_API_KEY"),
            Self::CheckConfiguration => Some("check your .env file or environment"),
            Self::IncreaseTimeout => Some("raise ASSISTANT_TIMEOUT_SECS"),
            Self::TryAgainLater => Some("try again in a moment"),
            Self::None => None,
        }
    }
}
