//! Bot configuration.
//!
//! A [`BotProfile`] bundles the keyword rules and reply table an engine is
//! built from. The default profile is the compiled-in portfolio data.
//! Profiles are plain data and serializable, so a host can ship its own,
//! but every profile is validated once at engine construction and is
//! read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::intent::{builtin_rules, Intent, KeywordRule};
use crate::normalizer::normalize;
use crate::responses::ResponseTable;

/// Keyword rules plus reply table, the unit of engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotProfile {
    /// Dispatch rules in priority order. Order is behavior: the first
    /// matching rule wins.
    pub rules: Vec<KeywordRule>,
    /// Replies per intent, the `unknown` fallback included.
    pub responses: ResponseTable,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self {
            rules: builtin_rules(),
            responses: ResponseTable::builtin(),
        }
    }
}

impl BotProfile {
    /// Check the invariants the runtime path relies on.
    ///
    /// Rules must target real intents and carry at least one trigger that
    /// survives normalization; the table must hold the `unknown` fallback,
    /// a non-empty entry for every ruled intent, and no blank reply
    /// strings. Rejecting an empty-normalizing trigger here matters most:
    /// the classifier matches by substring containment, and every string
    /// contains the empty string.
    pub fn validate(&self) -> Result<(), EngineError> {
        for rule in &self.rules {
            if rule.intent == Intent::Unknown {
                return Err(EngineError::RuleTargetsUnknown);
            }
            if rule.triggers.is_empty() {
                return Err(EngineError::EmptyRule(rule.intent));
            }
            for trigger in &rule.triggers {
                if normalize(trigger).is_empty() {
                    return Err(EngineError::EmptyTrigger {
                        intent: rule.intent,
                        trigger: trigger.clone(),
                    });
                }
            }
        }

        if !self
            .responses
            .get(Intent::Unknown)
            .is_some_and(|replies| !replies.is_empty())
        {
            return Err(EngineError::MissingFallback);
        }

        for rule in &self.rules {
            if !self
                .responses
                .get(rule.intent)
                .is_some_and(|replies| !replies.is_empty())
            {
                return Err(EngineError::MissingResponses(rule.intent));
            }
        }

        for intent in self.responses.intents() {
            let blank = self
                .responses
                .get(intent)
                .map(|replies| replies.iter().any(|r| r.trim().is_empty()))
                .unwrap_or(false);
            if blank {
                return Err(EngineError::EmptyResponse(intent));
            }
        }

        Ok(())
    }
}
