//! Application context construction and Leptos context plumbing.
//!
//! DESIGN
//! ======
//! One `ClientContext` is built at startup and provided through Leptos
//! context instead of module-level singletons, so every holder shares the
//! same prompts, selection registry, and preferences — and each test can
//! build its own isolated context over an in-memory store.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::{expect_context, provide_context};

use crate::state::prefs::Preferences;
use crate::state::selection::SelectionRegistry;
use crate::state::session::SessionPrompts;
use crate::util::storage::KeyValueStore;
#[cfg(feature = "hydrate")]
use crate::util::storage::LocalStorage;
#[cfg(not(feature = "hydrate"))]
use crate::util::storage::MemoryStore;

/// Shared state of the running client, passed by reference to whatever
/// needs it.
#[derive(Clone)]
pub struct ClientContext {
    pub prompts: SessionPrompts,
    pub selection: Arc<SelectionRegistry>,
    pub prefs: Preferences,
}

impl ClientContext {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            prompts: SessionPrompts::new(),
            selection: Arc::new(SelectionRegistry::new()),
            prefs: Preferences::new(&storage),
        }
    }

    /// Build a context over the browser's localStorage, or an in-memory
    /// store when no browser is available.
    #[must_use]
    pub fn from_default_storage() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(LocalStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Arc::new(MemoryStore::new()))
        }
    }

    /// Install this context for the component tree, as the root component
    /// does for each state domain.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Fetch the context installed by [`ClientContext::provide`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a tree that provided a context.
    #[must_use]
    pub fn from_context() -> Self {
        expect_context::<Self>()
    }
}
