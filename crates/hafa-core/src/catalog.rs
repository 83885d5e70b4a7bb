use rand::Rng;
use rand::seq::SliceRandom;

use crate::entry::VocabularyEntry;
use crate::error::{CatalogError, Result};
use crate::format::{DefaultFormatter, EntryFormatter};
use crate::search::matches;

/// Usage-note marker for the greeting category
pub const GREETING_MARKER: &str = "greeting";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// Fixed, ordered collection of vocabulary entries
///
/// Entries are validated once in [`Catalog::new`] and never change afterwards,
/// so every query is a plain read and the catalog can be shared across threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    language: String,
    entries: Vec<VocabularyEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty tables and entries with blank fields
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        entries: Vec<VocabularyEntry>,
    ) -> Result<Self> {
        let name = name.into();

        if entries.is_empty() {
            return Err(CatalogError::Empty { name });
        }

        for (index, entry) in entries.iter().enumerate() {
            if let Some((field, _)) = entry
                .fields()
                .into_iter()
                .find(|(_, value)| value.trim().is_empty())
            {
                return Err(CatalogError::MissingField { index, field });
            }
        }

        Ok(Self {
            name,
            language: language.into(),
            entries,
        })
    }

    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            name: self.name.clone(),
            language: self.language.clone(),
            entry_count: self.entries.len(),
        }
    }

    /// Every entry, in insertion order
    pub fn all_entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Uniformly random entry
    pub fn random_entry(&self) -> &VocabularyEntry {
        self.random_entry_with(&mut rand::thread_rng())
    }

    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &VocabularyEntry {
        // Non-empty since construction
        let index = rng.gen_range(0..self.entries.len());
        &self.entries[index]
    }

    /// Random entry rendered with the default layout
    pub fn format_entry(&self) -> String {
        self.format_entry_with(&mut rand::thread_rng(), &DefaultFormatter)
    }

    pub fn format_entry_with<R, F>(&self, rng: &mut R, formatter: &F) -> String
    where
        R: Rng + ?Sized,
        F: EntryFormatter + ?Sized,
    {
        formatter.format(self.random_entry_with(rng))
    }

    /// Case-insensitive substring search over term and translation
    ///
    /// Results keep catalog order. An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&VocabularyEntry> {
        let results: Vec<&VocabularyEntry> = self
            .entries
            .iter()
            .filter(|e| matches(e.term(), query) || matches(e.translation(), query))
            .collect();

        tracing::debug!("search {:?} matched {} of {}", query, results.len(), self.count());
        results
    }

    /// Entries whose usage note contains `marker`, in catalog order
    pub fn entries_in_category(&self, marker: &str) -> Vec<&VocabularyEntry> {
        self.entries
            .iter()
            .filter(|e| e.has_category(marker))
            .collect()
    }

    pub fn random_in_category(&self, marker: &str) -> Option<&VocabularyEntry> {
        self.random_in_category_with(marker, &mut rand::thread_rng())
    }

    pub fn random_in_category_with<R: Rng + ?Sized>(
        &self,
        marker: &str,
        rng: &mut R,
    ) -> Option<&VocabularyEntry> {
        let candidates = self.entries_in_category(marker);
        tracing::debug!("category {:?} has {} entries", marker, candidates.len());

        let picked = candidates.choose(rng).copied();
        if picked.is_none() {
            tracing::warn!("No entries in category {:?} of catalog '{}'", marker, self.name);
        }
        picked
    }

    /// Random entry from the greeting category, `None` if there are none
    pub fn random_greeting_entry(&self) -> Option<&VocabularyEntry> {
        self.random_in_category(GREETING_MARKER)
    }

    pub fn random_greeting_entry_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&VocabularyEntry> {
        self.random_in_category_with(GREETING_MARKER, rng)
    }
}
