//! Engine-wide error type.
//!
//! Only profile validation can fail. The runtime path (classify, select,
//! reply) is total: every invariant it leans on is checked once when the
//! engine is built, so a profile that validates can never make a later
//! call error or panic.

use thiserror::Error;

use crate::intent::Intent;

/// Errors raised while validating a [`crate::profile::BotProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Represents a rule that dispatches to `unknown`, which is reserved
    /// as the catch-all and must never be a match target.
    #[error("Keyword rule targets the reserved 'unknown' intent")]
    RuleTargetsUnknown,

    /// Represents a rule with no triggers, which could never fire.
    #[error("Rule for intent '{0}' has no triggers")]
    EmptyRule(Intent),

    /// Represents a trigger that normalizes to the empty string and would
    /// therefore match every message.
    #[error("Trigger '{trigger}' for intent '{intent}' normalizes to nothing")]
    EmptyTrigger { intent: Intent, trigger: String },

    /// Represents a ruled intent with no responses to draw from.
    #[error("No responses defined for intent '{0}'")]
    MissingResponses(Intent),

    /// Represents a response table without the `unknown` entry that every
    /// lookup falls back to.
    #[error("Response table has no fallback entry for the 'unknown' intent")]
    MissingFallback,

    /// Represents a blank string inside a response list.
    #[error("Intent '{0}' has an empty response string")]
    EmptyResponse(Intent),
}
