use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::fold;

/// Single vocabulary item taught by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    term: String,
    translation: String,
    pronunciation: String,
    usage: String,
    example: String,
}

impl VocabularyEntry {
    pub fn new(
        term: impl Into<String>,
        translation: impl Into<String>,
        pronunciation: impl Into<String>,
        usage: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            pronunciation: pronunciation.into(),
            usage: usage.into(),
            example: example.into(),
        }
    }

    /// The word or phrase being taught
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Meaning in the reference language
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Informal phonetic respelling
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// Free-text note on when the term is used
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    /// Whether the usage note contains `marker`, ignoring case
    pub fn has_category(&self, marker: &str) -> bool {
        fold(&self.usage).contains(&fold(marker))
    }

    /// Field names paired with their values, in declaration order
    pub(crate) fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("term", self.term.as_str()),
            ("translation", self.translation.as_str()),
            ("pronunciation", self.pronunciation.as_str()),
            ("usage", self.usage.as_str()),
            ("example", self.example.as_str()),
        ]
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.translation)
    }
}
