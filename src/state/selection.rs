//! Decentralized multi-selection coordination for file listings.
//!
//! DESIGN
//! ======
//! Each listing row owns its local `selected` flag; the registry records
//! only the capability to deselect it remotely. Coordinating surfaces (a
//! "clear selection" toolbar button, bulk actions) can then invalidate any
//! subset of selections without subscribing to, or re-rendering on, every
//! individual toggle.
//!
//! Rows must call [`SelectionRegistry::deselect_path`] unconditionally on
//! unmount so the registry never holds a callback belonging to a dead
//! component.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct SelectionEntry {
    is_directory: bool,
    deselect: Box<dyn Fn() + Send + Sync>,
}

/// Counts of selected entries, for toolbar summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub files: usize,
    pub directories: usize,
}

/// Registry mapping each selected path to its remote-deselect callback.
///
/// A path is present exactly while the owning row considers itself
/// selected.
#[derive(Default)]
pub struct SelectionRegistry {
    entries: Mutex<BTreeMap<String, SelectionEntry>>,
}

impl SelectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as selected. `deselect` is owned by the calling row
    /// and flips that row's local selected flag back to false when
    /// invoked. Re-selecting a registered path replaces the entry without
    /// firing the old callback.
    pub fn select_path(
        &self,
        path: impl Into<String>,
        is_directory: bool,
        deselect: impl Fn() + Send + Sync + 'static,
    ) {
        self.lock()
            .insert(path.into(), SelectionEntry { is_directory, deselect: Box::new(deselect) });
    }

    /// Remove `path` from the registry and fire its deselect callback
    /// once. Absent paths are a no-op, so unmount cleanup can call this
    /// unconditionally.
    pub fn deselect_path(&self, path: &str) {
        let removed = self.lock().remove(path);
        if let Some(entry) = removed {
            (entry.deselect)();
        }
    }

    /// Deselect every registered path.
    pub fn clear(&self) {
        let drained = std::mem::take(&mut *self.lock());
        for entry in drained.into_values() {
            (entry.deselect)();
        }
    }

    /// Registered paths in sorted order.
    #[must_use]
    pub fn selected_paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// File/directory counts over the current selection.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        let entries = self.lock();
        let directories = entries.values().filter(|entry| entry.is_directory).count();
        SelectionSummary { files: entries.len() - directories, directories }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, SelectionEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
