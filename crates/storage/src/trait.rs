use std::sync::Arc;

use thiserror::Error;

use stockroom_core::InventoryError;

/// Storage key for the persisted product list.
pub const PRODUCTS_KEY: &str = "inventory_products";

/// Storage key for the persisted category list.
pub const CATEGORIES_KEY: &str = "inventory_categories";

/// Key-value persistence error.
///
/// These are **infrastructure errors** (IO, lock poisoning) as opposed to
/// domain errors (validation, invariants).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io failure for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,
}

impl From<StorageError> for InventoryError {
    fn from(err: StorageError) -> Self {
        InventoryError::storage(err.to_string())
    }
}

/// String-keyed, string-valued local persistence.
///
/// Semantics the store relies on:
/// - `put` overwrites the full record for a key (no partial updates)
/// - `get` of a never-written key returns `Ok(None)`, not an error
/// - values written by `put` are returned byte-identical by `get`
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (or overwrite) the value stored under `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
