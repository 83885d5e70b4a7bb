//! Chamorro vocabulary: the built-in word list and read-only queries over it.

use std::sync::LazyLock;

use hafa_config::format::FormatConfig;
use hafa_core::{Catalog, ConfiguredFormatter, EntryFormatter, VocabularyEntry};

pub mod loader;
pub mod words;

#[cfg(test)]
mod tests;

pub use loader::ChamorroLoader;

// Built on first use; a broken word list fails here rather than in a query.
static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    ChamorroLoader::load_embedded()
        .unwrap_or_else(|e| panic!("embedded Chamorro vocabulary is invalid: {e}"))
});

/// The process-wide Chamorro catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Random word, e.g. for a "word of the day"
pub fn random_entry() -> &'static VocabularyEntry {
    CATALOG.random_entry()
}

/// Random word rendered as a display card
pub fn format_entry() -> String {
    CATALOG.format_entry()
}

/// Random word rendered with the given display options
pub fn format_entry_with_config(config: &FormatConfig) -> String {
    ConfiguredFormatter::new(config.clone()).format(random_entry())
}

pub fn all_entries() -> &'static [VocabularyEntry] {
    CATALOG.all_entries()
}

pub fn count() -> usize {
    CATALOG.count()
}

/// Words whose Chamorro term or English translation contains `term`, ignoring case
pub fn search(term: &str) -> Vec<&'static VocabularyEntry> {
    CATALOG.search(term)
}

pub fn random_greeting_entry() -> Option<&'static VocabularyEntry> {
    CATALOG.random_greeting_entry()
}
