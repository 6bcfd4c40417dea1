//! Component bindings for observable values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only sanctioned way component code reads or writes a shared
//! observable. Each call subscribes exactly once for the mounting
//! component and unsubscribes on cleanup, so dead components never leave
//! watchers behind.

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::observe::persisted::PersistedObservableValue;
use crate::observe::value::ObservableValue;

/// Bind an observable to local render state.
///
/// Returns the read half of a signal that tracks every notification, and
/// a setter forwarding to [`ObservableValue::set_value`]. The watcher
/// registered here is removed by `on_cleanup` when the owning component
/// is discarded.
pub fn use_observable<T>(value: &Arc<ObservableValue<T>>) -> (ReadSignal<T>, impl Fn(T) + Clone)
where
    T: Clone + Send + Sync + 'static,
{
    let local = RwSignal::new(value.get());
    let token = value.watch(move |next: &T| local.set(next.clone()));

    let watched = Arc::clone(value);
    on_cleanup(move || watched.remove_watcher(token));

    let target = Arc::clone(value);
    (local.read_only(), move |next: T| target.set_value(next))
}

/// Bind a persisted observable to local render state.
///
/// Same contract as [`use_observable`]; the setter additionally writes
/// through to durable storage.
pub fn use_persisted<T>(value: &Arc<PersistedObservableValue<T>>) -> (ReadSignal<T>, impl Fn(T) + Clone)
where
    T: Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
{
    let local = RwSignal::new(value.get());
    let token = value.watch(move |next: &T| local.set(next.clone()));

    let watched = Arc::clone(value);
    on_cleanup(move || watched.remove_watcher(token));

    let target = Arc::clone(value);
    (local.read_only(), move |next: T| target.set_value(next))
}
