//! Durable key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persisted observables write serialized text through this trait so the
//! browser's localStorage stays an external collaborator: hydrate builds
//! use [`LocalStorage`], everything else (SSR, native tests) uses
//! [`MemoryStore`]. Reads are failure-tolerant; writes surface a
//! [`StorageError`] the caller decides how to absorb.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Failure raised by a durable storage backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached at all (no window, no storage area).
    #[error("durable storage is unavailable")]
    Unavailable,
    /// The backend rejected a write (quota exceeded, access denied).
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// Contract for a durable string-keyed text store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser localStorage backend.
///
/// The storage area is looked up from `window` on every call rather than
/// held, so this stays a plain unit struct usable behind `Arc<dyn _>`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn backing() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(storage) = Self::backing() else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = Self::backing() else {
            return Err(StorageError::Unavailable);
        };
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected(format!("{err:?}")))
    }
}

/// In-memory backend for SSR builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
