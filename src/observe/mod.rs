//! Observable shared-state containers and their component bindings.
//!
//! DESIGN
//! ======
//! `value` holds the in-memory container, `persisted` adds write-through
//! durable storage, and `hook` binds either variant to Leptos render state
//! with mount/unmount subscription hygiene.

pub mod hook;
pub mod persisted;
pub mod value;
