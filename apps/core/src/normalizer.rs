//! Text normalization.
//!
//! Canonicalizes free text before keyword matching: case folding,
//! punctuation removal, whitespace collapse. Rule triggers pass through the
//! same function at engine construction, so triggers and input always live
//! in the same canonical space.

use regex::Regex;
use std::sync::LazyLock;

// Compile patterns once at startup.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: non-word pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace pattern"));

/// Normalize text for trigger matching.
///
/// Lowercases, deletes every character that is neither a word character nor
/// whitespace, collapses whitespace runs to a single space, and trims the
/// ends. Word characters follow the regex crate's Unicode `\w`, so accented
/// letters survive while punctuation, symbols, and emoji are stripped.
///
/// Total and idempotent: every input maps to a defined output, and
/// normalizing twice equals normalizing once.
///
/// Stripped characters are deleted outright, not replaced by a space, and
/// stripping happens before the whitespace collapse. Both points are
/// load-bearing: `"S&P 500"` must come out as `"sp 500"` (the stored
/// trigger), and `"door-dash"` comes out as `"doordash"`, which the
/// `"door dash"` trigger deliberately does not match.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
