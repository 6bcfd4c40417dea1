//! Observable shared-value container.
//!
//! DESIGN
//! ======
//! An `ObservableValue` broadcasts every write to all registered watchers
//! so distant, independently mounted components can react to shared facts
//! (auth status, prompts) without prop-threading. Notification is
//! synchronous and completes before `set_value` returns. The watcher list
//! is snapshotted at the start of each round, so watchers added or removed
//! by a callback take effect from the next round onward.
//!
//! Interior state sits behind `std::sync::Mutex` to satisfy the
//! `Send + Sync` bounds Leptos signals and context impose. In the
//! browser's single-threaded event loop these locks are uncontended.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Opaque handle identifying one registered watcher.
///
/// Tokens are allocated from a monotonic counter and never reused, so no
/// two live registrations share a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchToken(u64);

struct Watcher<T> {
    token: WatchToken,
    callback: Arc<dyn Fn(&T) + Send + Sync>,
}

/// A shared value whose writes are pushed to every registered watcher.
pub struct ObservableValue<T> {
    value: Mutex<T>,
    watchers: Mutex<Vec<Watcher<T>>>,
    next_token: AtomicU64,
}

impl<T: Clone> ObservableValue<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(initial),
            watchers: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(0),
        }
    }

    /// Clone of the currently held value.
    #[must_use]
    pub fn get(&self) -> T {
        lock(&self.value).clone()
    }

    /// Register `callback` to run on every subsequent write.
    ///
    /// Watchers registered while a notification round is in flight are
    /// first invoked on the following round.
    pub fn watch(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> WatchToken {
        let token = WatchToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        lock(&self.watchers).push(Watcher { token, callback: Arc::new(callback) });
        token
    }

    /// Remove the watcher registered under `token`.
    ///
    /// Removing an unknown or already-removed token is a no-op. A removal
    /// issued from inside a callback affects the next round, not the one
    /// currently being delivered.
    pub fn remove_watcher(&self, token: WatchToken) {
        lock(&self.watchers).retain(|watcher| watcher.token != token);
    }

    /// Replace the held value, then notify every registered watcher in
    /// registration order with the new value.
    ///
    /// No equality check is performed: writing a value equal to the
    /// current one still triggers a full notification round. A watcher
    /// that panics is logged and skipped; the remaining watchers in the
    /// round still run.
    pub fn set_value(&self, next: T) {
        *lock(&self.value) = next.clone();

        let round: Vec<_> = lock(&self.watchers)
            .iter()
            .map(|watcher| Arc::clone(&watcher.callback))
            .collect();

        for callback in round {
            if catch_unwind(AssertUnwindSafe(|| callback(&next))).is_err() {
                log::warn!("watcher panicked during notification; remaining watchers still run");
            }
        }
    }

    /// Number of currently registered watchers.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        lock(&self.watchers).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
