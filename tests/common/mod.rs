//! Shared test helpers and mock capabilities.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gemini_assistant::agent::Agent;
use gemini_assistant::error::AssistantError;
use gemini_assistant::provider::{ModelProvider, SearchProvider};
use gemini_assistant::types::{SearchOutcome, Turn};

/// A mock model that returns canned replies and records every history it saw.
#[derive(Clone, Default)]
pub struct MockModel {
    replies: Arc<Mutex<VecDeque<Result<String, AssistantError>>>>,
    requests: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, err: AssistantError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<Vec<Turn>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelProvider for MockModel {
    fn model_id(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, history: &[Turn]) -> Result<String, AssistantError> {
        self.requests.lock().unwrap().push(history.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }
}

/// A mock search capability that records queries.
#[derive(Clone, Default)]
pub struct MockSearch {
    outcomes: Arc<Mutex<VecDeque<Result<SearchOutcome, AssistantError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_snippet(&self, text: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(SearchOutcome::Snippet(text.to_string())));
    }

    pub fn queue_no_results(&self) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(SearchOutcome::NoResults));
    }

    pub fn queue_error(&self, err: AssistantError) {
        self.outcomes.lock().unwrap().push_back(Err(err));
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str) -> Result<SearchOutcome, AssistantError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchOutcome::Snippet("Mock snippet".to_string())))
    }
}

/// Build an agent over fresh mocks, returning handles to inspect them.
pub fn mock_agent() -> (Agent, MockModel, MockSearch) {
    let model = MockModel::new();
    let search = MockSearch::new();
    let agent = Agent::new(Box::new(model.clone()), Box::new(search.clone()));
    (agent, model, search)
}
