//! The conversational agent.

use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::provider::{GeminiProvider, GoogleSearchProvider, ModelProvider, SearchProvider};
use crate::types::Turn;

use super::conversation::Conversation;
use super::router::{self, Route};

/// Which capability produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRoute {
    Model,
    Search(Route),
}

/// Text answer for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub route: ReplyRoute,
}

/// Answers user inputs, keeping model-routed exchanges in history.
pub struct Agent {
    model: Box<dyn ModelProvider>,
    search: Box<dyn SearchProvider>,
    conversation: Conversation,
}

impl Agent {
    /// Create an agent over the given capabilities.
    pub fn new(model: Box<dyn ModelProvider>, search: Box<dyn SearchProvider>) -> Self {
        Self {
            model,
            search,
            conversation: Conversation::new(),
        }
    }

    /// Create an agent backed by Gemini and Google Custom Search.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        Ok(Self::new(
            Box::new(GeminiProvider::new(config)?),
            Box::new(GoogleSearchProvider::new(config)?),
        ))
    }

    /// Answer one input.
    ///
    /// Search-routed inputs never touch history, and search failures come
    /// back as reply text. For everything else the user turn and the model
    /// turn are appended together; if the model call fails the user turn is
    /// removed again and the error is returned.
    pub async fn ask(&mut self, text: &str) -> Result<Reply, AssistantError> {
        if let Some(route) = router::route(text) {
            debug!(%route, "search-routed input");
            return Ok(Reply {
                text: self.search_text(route.query(text)).await,
                route: ReplyRoute::Search(route),
            });
        }

        self.conversation.add_user_turn(text);

        match self.model.generate(self.conversation.turns()).await {
            Ok(answer) => {
                self.conversation.add_model_turn(answer.clone());
                Ok(Reply {
                    text: answer,
                    route: ReplyRoute::Model,
                })
            }
            Err(err) => {
                self.conversation.pop();
                warn!(model = self.model.model_id(), error = %err, "model call failed");
                Err(err)
            }
        }
    }

    async fn search_text(&self, query: &str) -> String {
        match self.search.search(query).await {
            Ok(outcome) => outcome.into_text(),
            Err(err) => {
                warn!(error = %err, "search failed");
                format!("Search error: {err}")
            }
        }
    }

    /// Get the conversation history, oldest first.
    pub fn history(&self) -> &[Turn] {
        self.conversation.turns()
    }

    /// Clear conversation history.
    pub fn clear(&mut self) {
        self.conversation.clear();
    }
}
