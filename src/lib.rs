//! # driftbox-client
//!
//! Coordination core for the Driftbox file-hosting web client: observable
//! shared state, persisted preferences, decentralized list selection, and
//! the auth-failure interception pipeline.
//!
//! Pages and components live in the host application crate; this crate
//! provides the state and networking layer they share.

pub mod boot;
pub mod net;
pub mod observe;
pub mod state;
pub mod util;
