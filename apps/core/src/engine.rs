//! Chat engine.
//!
//! The one call the page script makes per user action: reject empty
//! input, classify, select a reply, hand back a [`ChatReply`]. Synchronous
//! end to end. The "thinking" pause before a reply is rendered belongs to
//! the host and is published here only as a suggested constant.

use chrono::Utc;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::EngineError;
use crate::intent::IntentClassifier;
use crate::profile::BotProfile;
use crate::reply::ChatReply;
use crate::responses::ResponseSelector;

/// Suggested pause between showing the typing indicator and rendering the
/// reply. Presentation only: [`ChatEngine::reply`] never sleeps.
pub const TYPING_DELAY: Duration = Duration::from_millis(800);

/// Classifier and selector behind a single call.
pub struct ChatEngine {
    classifier: IntentClassifier,
    selector: ResponseSelector,
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatEngine {
    /// Engine over the built-in portfolio profile.
    pub fn new() -> Self {
        // The built-in profile satisfies validate(), pinned by test.
        Self::from_profile(BotProfile::default())
    }

    /// Engine over a custom profile.
    ///
    /// The profile is validated once here and read-only afterwards; a
    /// profile that passes can never make a later call fail.
    pub fn with_profile(profile: BotProfile) -> Result<Self, EngineError> {
        profile.validate()?;
        Ok(Self::from_profile(profile))
    }

    fn from_profile(profile: BotProfile) -> Self {
        let BotProfile { rules, responses } = profile;
        info!(
            "chat engine ready: {} rules, {} response entries",
            rules.len(),
            responses.len()
        );
        Self {
            classifier: IntentClassifier::with_rules(rules),
            selector: ResponseSelector::with_table(responses),
        }
    }

    /// Run one turn with the thread-local generator.
    pub fn reply(&self, message: &str) -> Option<ChatReply> {
        self.reply_with(message, &mut rand::thread_rng())
    }

    /// Run one turn with the supplied random source.
    ///
    /// Input that is empty after trimming is ignored without touching the
    /// classifier, matching the page's send handler. Everything else
    /// produces a reply: unmatched text resolves to the unknown intent and
    /// its fallback response.
    pub fn reply_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Option<ChatReply> {
        if message.trim().is_empty() {
            return None;
        }

        let start = Instant::now();
        let intent = self.classifier.classify(message);
        let response = self.selector.select_with(intent, rng).to_string();
        let processing_time_ms = start.elapsed().as_millis() as u64;

        let reply = ChatReply {
            message: message.to_string(),
            intent,
            response,
            processing_time_ms,
            timestamp: Utc::now(),
        };
        debug!("turn complete: {}", reply.summary());

        Some(reply)
    }

    /// The classifier, for hosts that only need the label.
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// The selector, for hosts that already hold a label.
    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }
}
