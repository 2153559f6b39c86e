//! Capability traits and their HTTP implementations.

pub mod gemini;
pub mod http;
pub mod search;

pub use gemini::GeminiProvider;
pub use search::GoogleSearchProvider;

use async_trait::async_trait;

use crate::error::AssistantError;
use crate::types::{SearchOutcome, Turn};

/// Language-model capability: turns the full history into the next reply.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate the model's next turn given the history, oldest first.
    async fn generate(&self, history: &[Turn]) -> Result<String, AssistantError>;
}

/// Web-search capability.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome, AssistantError>;
}
