//! Intent classification.
//!
//! An ordered keyword-rule table walked top to bottom against normalized
//! input. Matching is plain substring containment, no word boundaries, and
//! the first rule that fires wins. Rule order is therefore part of the
//! behavior, not an implementation detail: specific project topics sit
//! above the generic project rule, and greetings sit last because their
//! triggers are short enough to hide inside other words.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalizer::normalize;

/// What a visitor message is asking about.
///
/// Closed set: one label per portfolio topic plus [`Intent::Unknown`] as
/// the catch-all. Serialized labels are the wire names the page script
/// keys on, hence the camelCase rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Small talk openers.
    Greeting,
    /// Overview of the most recent projects.
    RecentProjects,
    /// The Internship Tracker web app.
    Internship,
    /// The Restaurant Management System course project.
    Restaurant,
    /// Yippi, the course notes platform.
    Yippi,
    /// The S&P 500 Explorer analysis project.
    Sp500,
    /// Teaching assistant experience.
    Teaching,
    /// Languages, frameworks, and tooling.
    Skills,
    /// GitHub profile and repositories.
    Github,
    /// Email and LinkedIn details.
    Contact,
    /// Nothing matched.
    Unknown,
}

impl Intent {
    /// Wire label for the intent, identical to its serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::RecentProjects => "recentProjects",
            Intent::Internship => "internship",
            Intent::Restaurant => "restaurant",
            Intent::Yippi => "yippi",
            Intent::Sp500 => "sp500",
            Intent::Teaching => "teaching",
            Intent::Skills => "skills",
            Intent::Github => "github",
            Intent::Contact => "contact",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One dispatch rule: the intent and the trigger substrings that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub intent: Intent,
    pub triggers: Vec<String>,
}

impl KeywordRule {
    pub fn new(intent: Intent, triggers: &[&str]) -> Self {
        Self {
            intent,
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Built-in rules in evaluation order.
///
/// Specific project topics come first so that, say, "internship tracker"
/// never falls through to the generic project rule. Greetings are last:
/// "hi" is a substring of ordinary words ("this", "which"), so every other
/// category gets a chance before a greeting fires.
const BUILTIN_RULES: &[(Intent, &[&str])] = &[
    (Intent::Internship, &["internship tracker", "tracker"]),
    (Intent::Restaurant, &["restaurant", "food", "door dash"]),
    (Intent::Yippi, &["yippi", "notes", "course"]),
    (Intent::Sp500, &["sp 500", "stock", "market"]),
    (Intent::RecentProjects, &["project", "build", "made"]),
    (Intent::Teaching, &["teach", "assistant", "ta"]),
    (
        Intent::Skills,
        &[
            "skill",
            "technology",
            "tools",
            "python",
            "java",
            "react",
            "flask",
            "sql",
            "docker",
            "tensorflow",
            "pandas",
        ],
    ),
    (Intent::Contact, &["contact", "email", "reach", "linkedin"]),
    (Intent::Github, &["github", "repository", "repo"]),
    (Intent::Greeting, &["hello", "hi", "hey"]),
];

/// The built-in portfolio rule list, in evaluation order.
pub fn builtin_rules() -> Vec<KeywordRule> {
    BUILTIN_RULES
        .iter()
        .map(|(intent, triggers)| KeywordRule::new(*intent, triggers))
        .collect()
}

/// First-match-wins classifier over an ordered rule list.
pub struct IntentClassifier {
    rules: Vec<KeywordRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Classifier over the built-in portfolio rules.
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    /// Classifier over a custom rule list, evaluated in the given order.
    ///
    /// Triggers are canonicalized through [`normalize`] here, once, so a
    /// trigger written as `"S&P 500"` is stored as `"sp 500"` and matches
    /// exactly what input text is reduced to.
    ///
    /// No validation happens here. A trigger that normalizes to the empty
    /// string turns its rule into a match-everything rule, since every
    /// message contains the empty string;
    /// [`crate::profile::BotProfile::validate`] rejects such triggers
    /// before an engine is built on them.
    pub fn with_rules(rules: Vec<KeywordRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| KeywordRule {
                intent: rule.intent,
                triggers: rule.triggers.iter().map(|t| normalize(t)).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Rules in evaluation order, triggers already canonicalized.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify a visitor message.
    ///
    /// Walks the rule list in order against the normalized message and
    /// returns the first intent whose trigger appears as a substring.
    /// Total: input that normalizes to nothing, or matches nothing, comes
    /// back as [`Intent::Unknown`].
    pub fn classify(&self, message: &str) -> Intent {
        let msg = normalize(message);
        if msg.is_empty() {
            return Intent::Unknown;
        }

        for rule in &self.rules {
            if rule.triggers.iter().any(|t| msg.contains(t.as_str())) {
                return rule.intent;
            }
        }

        Intent::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matches_serialized_form() {
        for intent in [
            Intent::Greeting,
            Intent::RecentProjects,
            Intent::Internship,
            Intent::Restaurant,
            Intent::Yippi,
            Intent::Sp500,
            Intent::Teaching,
            Intent::Skills,
            Intent::Github,
            Intent::Contact,
            Intent::Unknown,
        ] {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.label()));
            assert_eq!(format!("{}", intent), intent.label());
        }
    }

    #[test]
    fn test_classify_each_category() {
        let classifier = IntentClassifier::new();
        let cases = [
            ("hello", Intent::Greeting),
            ("tell me about the internship tracker", Intent::Internship),
            ("the restaurant system", Intent::Restaurant),
            ("what is yippi", Intent::Yippi),
            ("sp 500 explorer", Intent::Sp500),
            ("your recent projects", Intent::RecentProjects),
            ("are you a teaching assistant", Intent::Teaching),
            ("what skills do you have", Intent::Skills),
            ("show me your github", Intent::Github),
            ("email me please", Intent::Contact),
            ("qqqq zzzz", Intent::Unknown),
        ];

        for (input, expected) in cases {
            assert_eq!(
                classifier.classify(input),
                expected,
                "wrong intent for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        let classifier = IntentClassifier::new();

        // "tracker" (rule 1) beats "project" (rule 5).
        assert_eq!(
            classifier.classify("is the tracker your best project?"),
            Intent::Internship
        );
        // "course" (rule 3) beats "teach" (rule 6).
        assert_eq!(
            classifier.classify("which course do you teach?"),
            Intent::Yippi
        );
        // "stock" (rule 4) beats "hello" (last rule).
        assert_eq!(
            classifier.classify("hello, any stock analysis?"),
            Intent::Sp500
        );
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        let classifier = IntentClassifier::new();

        // "hi" inside "this".
        assert_eq!(classifier.classify("this is a test"), Intent::Greeting);
        // "ta" inside "contact", and the teaching rule sits earlier than
        // the contact rule, so asking to "contact" resolves to teaching.
        assert_eq!(classifier.classify("contact"), Intent::Teaching);
    }

    #[test]
    fn test_unmatched_and_empty_input_is_unknown() {
        let classifier = IntentClassifier::new();
        for input in ["", "   ", "?!", "🤔", "zzz qqq"] {
            assert_eq!(
                classifier.classify(input),
                Intent::Unknown,
                "expected unknown for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_custom_rules_are_canonicalized() {
        let rules = vec![KeywordRule::new(Intent::Sp500, &["S&P 500"])];
        let classifier = IntentClassifier::with_rules(rules);

        assert_eq!(classifier.rules()[0].triggers, vec!["sp 500".to_string()]);
        assert_eq!(classifier.classify("thoughts on the S&P 500?"), Intent::Sp500);
    }

    #[test]
    fn test_empty_normalized_trigger_matches_every_message() {
        // with_rules does not validate. "?!" normalizes to "", and every
        // non-empty message contains "", so the rule fires on everything;
        // empty input still short-circuits to unknown. Engine construction
        // rejects such triggers through BotProfile::validate.
        let rules = vec![KeywordRule::new(Intent::Greeting, &["?!"])];
        let classifier = IntentClassifier::with_rules(rules);

        assert_eq!(classifier.classify("absolutely anything"), Intent::Greeting);
        assert_eq!(classifier.classify("qqqq zzzz"), Intent::Greeting);
        assert_eq!(classifier.classify("   "), Intent::Unknown);
    }
}
