//! Unified error handling.
//!
//! Cart operations themselves never fail: unknown IDs are no-ops, a guest
//! `add` is reported through the notifier, and storage problems are logged.
//! `CartError` covers the fallible edges around the store: loading config,
//! opening a backing store, and building line items from user input.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Line item input was invalid.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] naked_pineapple_core::LineItemError),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use naked_pineapple_core::LineItemError;

    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::BadRequest("price must be a number".to_string());
        assert_eq!(err.to_string(), "Bad request: price must be a number");

        let err = CartError::from(LineItemError::EmptyId);
        assert_eq!(err.to_string(), "Invalid item: item id cannot be empty");
    }
}
