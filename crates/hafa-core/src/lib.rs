pub mod catalog;
pub mod entry;
pub mod error;
pub mod format;
pub mod search;

pub use catalog::{Catalog, CatalogMetadata, GREETING_MARKER};
pub use entry::VocabularyEntry;
pub use error::{CatalogError, Result};
pub use format::{ConfiguredFormatter, DefaultFormatter, EntryFormatter};
