//! The quote record

use serde::{Deserialize, Serialize};

/// A single quote. `text` doubles as the identity key for merge dedup
/// (case-sensitive exact match); see DESIGN.md for why there is no
/// synthetic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Default quotes used when a vault has no persisted list yet.
    pub fn seed_list() -> Vec<Quote> {
        vec![
            Quote::new(
                "The only way to do great work is to love what you do.",
                "motivation",
            ),
            Quote::new("Simplicity is the ultimate sophistication.", "design"),
            Quote::new(
                "Programs must be written for people to read, and only incidentally for machines to execute.",
                "programming",
            ),
            Quote::new("Well begun is half done.", "wisdom"),
        ]
    }
}
