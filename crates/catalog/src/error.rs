//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Two items share an id
    #[error("Duplicate menu item id: {0}")]
    DuplicateId(u32),

    /// Unknown category name
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown sort key
    #[error("Unknown sort key: {0} (expected popular, price-asc, price-desc or time)")]
    UnknownSort(String),

    /// Unknown veg mode
    #[error("Unknown veg mode: {0} (expected All, Veg or Non-Veg)")]
    UnknownVegMode(String),

    /// Selection refers to a variant or add-on the item does not offer
    #[error("Item {item_id} has no {kind} named {name:?}")]
    UnknownOption {
        /// Menu item id
        item_id: u32,
        /// "variant" or "add-on"
        kind: &'static str,
        /// Requested name
        name: String,
    },
}
