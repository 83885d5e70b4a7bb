use hafa_core::{Catalog, Result};

use crate::words::reference_entries;

pub const CATALOG_NAME: &str = "Chamorro";
/// ISO 639-1 code
pub const LANGUAGE_CODE: &str = "ch";

pub struct ChamorroLoader;

impl ChamorroLoader {
    /// Build the catalog from the embedded word list
    pub fn load_embedded() -> Result<Catalog> {
        tracing::info!("Loading embedded Chamorro vocabulary...");
        let catalog = Catalog::new(CATALOG_NAME, LANGUAGE_CODE, reference_entries())?;
        tracing::info!("Loaded {} vocabulary entries", catalog.count());
        Ok(catalog)
    }
}
