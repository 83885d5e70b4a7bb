pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog '{name}' has no entries")]
    Empty { name: String },

    #[error("Entry {index} has an empty '{field}' field")]
    MissingField { index: usize, field: &'static str },
}
