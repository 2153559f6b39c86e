//! Conversation history.

use crate::types::Turn;

/// Ordered turn history for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user turn.
    pub fn add_user_turn(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Add a model turn.
    pub fn add_model_turn(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model(text));
    }

    /// Remove and return the most recent turn.
    pub fn pop(&mut self) -> Option<Turn> {
        self.turns.pop()
    }

    /// Get all turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Clear all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
