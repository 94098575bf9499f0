//! Chat turn output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// One completed conversation turn.
///
/// Carries everything the page script needs to render a bot message.
/// Turns are not persisted and later turns never reference earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Raw visitor input, as received.
    pub message: String,
    /// Detected intent.
    pub intent: Intent,
    /// Selected reply, links and emoji verbatim.
    pub response: String,
    /// Time spent classifying and selecting, in milliseconds.
    pub processing_time_ms: u64,
    /// When the turn completed.
    pub timestamp: DateTime<Utc>,
}

impl ChatReply {
    /// Serialize the turn for the page script.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One-line form for log output.
    pub fn summary(&self) -> String {
        format!(
            "intent={} response_len={} took={}ms",
            self.intent,
            self.response.len(),
            self.processing_time_ms
        )
    }
}
