//! Durable-storage-backed observable values.
//!
//! ERROR HANDLING
//! ==============
//! Durability is best-effort only. Construction falls back to the caller
//! default when the stored text is absent, unreadable, or undecodable.
//! Write failures are logged and swallowed; the in-memory value and its
//! notification round are never affected by a storage error.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::observe::value::{ObservableValue, WatchToken};
use crate::util::storage::KeyValueStore;

/// An [`ObservableValue`] that hydrates from and writes through a durable
/// key-value store, serialized as JSON text.
///
/// Used for values that must survive a page reload (preferences, the
/// remembered login) without ever blocking an in-memory state transition
/// on the storage layer.
pub struct PersistedObservableValue<T> {
    inner: ObservableValue<T>,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl<T> PersistedObservableValue<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Build the value, hydrating from whatever was last stored under
    /// `key`. Absent keys, read errors, and decode failures all yield
    /// `initial`; construction never fails.
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let start = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(stored) => stored,
                Err(err) => {
                    log::warn!("stored value under {key:?} is not decodable, using default: {err}");
                    initial
                }
            },
            Ok(None) => initial,
            Err(err) => {
                log::warn!("storage read for {key:?} failed, using default: {err}");
                initial
            }
        };
        Self { inner: ObservableValue::new(start), storage, key }
    }

    /// Clone of the currently held value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Register a watcher; see [`ObservableValue::watch`].
    pub fn watch(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> WatchToken {
        self.inner.watch(callback)
    }

    /// Remove a watcher; see [`ObservableValue::remove_watcher`].
    pub fn remove_watcher(&self, token: WatchToken) {
        self.inner.remove_watcher(token)
    }

    /// Replace the value and notify watchers, then write the serialized
    /// value to durable storage. The in-memory value stays authoritative
    /// when the write fails.
    pub fn set_value(&self, next: T) {
        let encoded = serde_json::to_string(&next);
        self.inner.set_value(next);
        match encoded {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&self.key, &raw) {
                    log::warn!("storage write for {:?} failed, in-memory value kept: {err}", self.key);
                }
            }
            Err(err) => {
                log::warn!("value for {:?} could not be serialized: {err}", self.key);
            }
        }
    }

    /// Storage key this value persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
