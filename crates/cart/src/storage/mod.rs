//! Key-value persistence for carts.
//!
//! The cart store only needs four string operations from its backing store,
//! modelled on a browser's `localStorage`: get, set, remove and list keys.
//! Carts are saved one key per shopper, under [`storage_key`].
//!
//! # Backends
//!
//! - [`MemoryStore`] - `BTreeMap` in memory, for tests and embedding
//! - [`FileStore`] - a single JSON object on disk, used by the CLI

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use naked_pineapple_core::IdentityId;
use thiserror::Error;

/// Prefix shared by every persisted cart key.
pub const CART_KEY_PREFIX: &str = "cart:";

/// Key a shopper's cart is persisted under: `cart:<identity>`.
///
/// ```rust
/// use naked_pineapple_cart::storage_key;
/// use naked_pineapple_core::IdentityId;
///
/// assert_eq!(storage_key(&IdentityId::new("42")), "cart:42");
/// ```
#[must_use]
pub fn storage_key(identity: &IdentityId) -> String {
    format!("{CART_KEY_PREFIX}{identity}")
}

/// Whether a key belongs to a persisted cart.
#[must_use]
pub fn is_cart_key(key: &str) -> bool {
    key.starts_with(CART_KEY_PREFIX)
}

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value was readable but not a valid cart.
    #[error("corrupt value under {key}: {reason}")]
    Corrupt {
        /// Key holding the bad value.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// String key-value store the cart persists to.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Every key currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).list_keys()
    }
}
