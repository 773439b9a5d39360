//! Key/value persistence for catalog and preferences.
//!
//! The shop persists two values: the product list and the theme flag. Both
//! live behind the [`LocalStore`] trait so the catalog store can be handed
//! a real data directory in production and an in-memory map in tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage keys.
pub mod keys {
    /// Key for the serialized product list.
    pub const PRODUCTS: &str = "elyosr_products";

    /// Key for the theme flag (`"dark"` / `"light"`).
    pub const THEME: &str = "elyosr_theme";
}

/// Errors from a [`LocalStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key contains characters that cannot be stored.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
///
/// Absence of a key is `Ok(None)`, never an error.
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keys are restricted to `[A-Za-z0-9_-]` so they map safely to file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
