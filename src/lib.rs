//! gemini-assistant — a terminal chat assistant for Google Gemini.
//!
//! Each input is either answered by the model, with the whole conversation
//! replayed as context, or, for Bitcoin price and weather questions, by the
//! first snippet of a Google Custom Search query. Search-routed exchanges are
//! not remembered.
//!
//! ```no_run
//! use gemini_assistant::agent::Agent;
//! use gemini_assistant::config::AssistantConfig;
//!
//! # async fn example() -> gemini_assistant::error::Result<()> {
//! let config = AssistantConfig::from_env()?;
//! let mut agent = Agent::from_config(&config)?;
//! let reply = agent.ask("Hello!").await?;
//! println!("{}", reply.text);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod types;
