//! Core types shared by the agent and the providers.

pub mod message;
pub mod search;

pub use message::*;
pub use search::*;
