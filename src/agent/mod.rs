//! Agent system: routing, conversation memory, and the ask/clear contract.

#[allow(clippy::module_inception)]
pub mod agent;
pub mod conversation;
pub mod router;

pub use agent::{Agent, Reply, ReplyRoute};
pub use conversation::Conversation;
pub use router::Route;
