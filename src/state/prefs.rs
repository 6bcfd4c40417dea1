//! Persisted user preferences.
//!
//! Preferences survive a page reload via durable storage but never block
//! an in-memory transition on a storage failure.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::sync::Arc;

use crate::observe::persisted::PersistedObservableValue;
use crate::util::storage::KeyValueStore;

const DARK_MODE_KEY: &str = "driftbox_dark_mode";
const REMEMBERED_LOGIN_KEY: &str = "driftbox_remembered_login";

/// Durable per-browser preferences.
#[derive(Clone)]
pub struct Preferences {
    /// Whether the dark theme is active.
    pub dark_mode: Arc<PersistedObservableValue<bool>>,
    /// Username pre-filled on the login form ("remember me").
    pub remembered_login: Arc<PersistedObservableValue<Option<String>>>,
}

impl Preferences {
    #[must_use]
    pub fn new(storage: &Arc<dyn KeyValueStore>) -> Self {
        Self {
            dark_mode: Arc::new(PersistedObservableValue::new(
                Arc::clone(storage),
                DARK_MODE_KEY,
                false,
            )),
            remembered_login: Arc::new(PersistedObservableValue::new(
                Arc::clone(storage),
                REMEMBERED_LOGIN_KEY,
                None,
            )),
        }
    }
}
