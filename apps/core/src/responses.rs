//! Canned response selection.
//!
//! Maps a detected intent to one of its literal reply strings. Entries
//! with several variants are drawn uniformly at random; the random source
//! is injectable so tests can pin the draw. Lookups for intents the table
//! does not carry fall back to the `unknown` entry, keeping selection
//! total.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::intent::Intent;

/// Canned replies for one intent.
struct ResponseTemplate {
    intent: Intent,
    replies: &'static [&'static str],
}

/// Last-resort reply, doubling as the single `unknown` table entry.
const FALLBACK_RESPONSE: &str =
    "Hmm, I’m not sure about that 🤔. Try asking about Yug’s projects, teaching, skills, or GitHub!";

/// Built-in reply table. Strings are shipped verbatim, links, emoji, and
/// punctuation included, because the page renders them as-is.
const RESPONSE_TEMPLATES: &[ResponseTemplate] = &[
    ResponseTemplate {
        intent: Intent::Greeting,
        replies: &[
            "Hey there 👋 I’m YugAI — your guide to all things Yug!",
            "Hi! I'm YugAI, here to help you explore Yug's projects, skills, and more.",
        ],
    },
    ResponseTemplate {
        intent: Intent::RecentProjects,
        replies: &[
            "Yug's most recent projects are the Internship Tracker and Restaurant Management System — both built in 2025! 🚀",
            "Yug recently built the Internship Tracker (a web app for managing internship applications) and a Restaurant Management System for his OOP class 🍔.",
        ],
    },
    ResponseTemplate {
        intent: Intent::Internship,
        replies: &[
            "The Internship Tracker helps users track internship applications. It’s live here 🌐 https://yug-more.github.io/Internship-Tracker/ and on GitHub 💻 https://github.com/Yug-More/Internship-Tracker",
        ],
    },
    ResponseTemplate {
        intent: Intent::Restaurant,
        replies: &[
            "Yug created a Restaurant Management System for his Object-Oriented Programming course. It simulates a DoorDash-style ordering system 🍽️. Check it out here: https://github.com/Ab2d248/CS151Fall25_RestaurantManagement",
        ],
    },
    ResponseTemplate {
        intent: Intent::Yippi,
        replies: &[
            "Yug built Yippi 📚 — a full-stack web app for students to upload and access course notes using Node.js, MySQL, and JavaScript.",
        ],
    },
    ResponseTemplate {
        intent: Intent::Sp500,
        replies: &[
            "The S&P 500 Explorer 📊 analyzes data from 500+ companies, performing ANOVA, regression, and visualization using Python, Pandas, and Matplotlib.",
        ],
    },
    ResponseTemplate {
        intent: Intent::Teaching,
        replies: &[
            "Yug is a Teaching Assistant for both Python and Java at San Jose State University, mentoring 400+ students over multiple semesters 👨‍🏫.",
        ],
    },
    ResponseTemplate {
        intent: Intent::Skills,
        replies: &[
            "Yug is skilled in Python 🐍, Java ☕, React ⚛️, Flask 🔥, SQL 🗄️, and Data Analytics 📊. He also works with Docker, TensorFlow, and Pandas.",
        ],
    },
    ResponseTemplate {
        intent: Intent::Github,
        replies: &[
            "You can explore Yug’s GitHub profile here 💻 https://github.com/Yug-More — it’s packed with cool projects!",
        ],
    },
    ResponseTemplate {
        intent: Intent::Contact,
        replies: &[
            "You can reach Yug via 📧 yugmore20@gmail.com or connect on 💼 LinkedIn: https://linkedin.com/in/yugmore13",
        ],
    },
    ResponseTemplate {
        intent: Intent::Unknown,
        replies: &[FALLBACK_RESPONSE],
    },
];

/// Mapping from intent to its reply list.
///
/// Read-only after construction. The built-in table carries every intent,
/// `unknown` included; custom tables go through
/// [`crate::profile::BotProfile::validate`] before an engine is built on
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTable(HashMap<Intent, Vec<String>>);

impl Default for ResponseTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseTable {
    /// The built-in portfolio replies.
    pub fn builtin() -> Self {
        let entries = RESPONSE_TEMPLATES
            .iter()
            .map(|template| {
                let replies = template.replies.iter().map(|r| r.to_string()).collect();
                (template.intent, replies)
            })
            .collect();
        Self(entries)
    }

    /// Table over custom entries.
    pub fn from_entries(entries: HashMap<Intent, Vec<String>>) -> Self {
        Self(entries)
    }

    /// Replies for an intent, without fallback. Validation uses this to
    /// tell a missing entry apart from a present one.
    pub fn get(&self, intent: Intent) -> Option<&[String]> {
        self.0.get(&intent).map(Vec::as_slice)
    }

    /// Replies for an intent, falling back to the `unknown` entry when the
    /// intent is unmapped or mapped to nothing.
    pub fn entry(&self, intent: Intent) -> &[String] {
        match self.0.get(&intent) {
            Some(replies) if !replies.is_empty() => replies,
            _ => self
                .0
                .get(&Intent::Unknown)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Intents the table has entries for, in no particular order.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.0.keys().copied()
    }

    /// Number of intents with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Uniform random choice over a [`ResponseTable`].
pub struct ResponseSelector {
    table: ResponseTable,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    /// Selector over the built-in replies.
    pub fn new() -> Self {
        Self::with_table(ResponseTable::builtin())
    }

    /// Selector over a custom table.
    pub fn with_table(table: ResponseTable) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Pick a reply for the intent with the thread-local generator.
    pub fn select(&self, intent: Intent) -> &str {
        self.select_with(intent, &mut rand::thread_rng())
    }

    /// Pick a reply for the intent with the supplied random source.
    ///
    /// Uniform over the entry's replies; a single-element entry is picked
    /// deterministically. Unmapped intents resolve through the `unknown`
    /// entry, and a table with no usable entry at all still yields the
    /// compiled-in fallback string, so selection never fails.
    pub fn select_with<R: Rng + ?Sized>(&self, intent: Intent, rng: &mut R) -> &str {
        self.table
            .entry(intent)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_RESPONSE)
    }
}
