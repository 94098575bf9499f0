//! # YugAI Core
//!
//! Rule-based brain for the YugAI portfolio chatbot.
//! Free text goes in, a canned reply comes out:
//! normalize, match keywords in priority order, pick a reply.
//!
//! ## Components
//! - `normalizer`: case folding, punctuation stripping, whitespace collapse
//! - `intent`: ordered first-match keyword classifier
//! - `responses`: reply table with uniform random selection
//! - `profile`: engine configuration plus one-time validation
//! - `engine`: the one-call-per-turn orchestrator
//! - `reply`: the turn structure handed back to the page script
//! - `error`: validation failures, the only errors the crate has
//!
//! The crate is synchronous and total: every input, empty or adversarial,
//! maps to a defined output. The UI host owns all presentation, including
//! the typing pause before a reply is rendered.

pub mod engine;
pub mod error;
pub mod intent;
pub mod normalizer;
pub mod profile;
pub mod reply;
pub mod responses;

// Re-export main types for convenience
pub use engine::{ChatEngine, TYPING_DELAY};
pub use error::EngineError;
pub use intent::{builtin_rules, Intent, IntentClassifier, KeywordRule};
pub use normalizer::normalize;
pub use profile::BotProfile;
pub use reply::ChatReply;
pub use responses::{ResponseSelector, ResponseTable};

#[cfg(test)]
mod tests;
