//! Error types for the cart crate.

use thiserror::Error;

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;

/// Errors that can occur while changing or checking out the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisting the cart or preferences failed
    #[error("Storage error: {0}")]
    Storage(#[from] cafe_core::Error),

    /// Checkout form is incomplete
    #[error("Cannot place order: {}", .0.join("; "))]
    Incomplete(Vec<String>),

    /// Tip percentage not offered
    #[error("Tip of {0}% is not one of the offered options")]
    InvalidTip(u32),

    /// Unknown flavor note name
    #[error("Unknown flavor note: {0}")]
    UnknownNote(String),
}
