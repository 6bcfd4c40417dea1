//! Networking modules for the file-hosting REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `interceptor` classifies auth failures into
//! global prompt transitions, and `types` defines the wire schema plus the
//! request-failure union both of them operate on.

pub mod api;
pub mod interceptor;
pub mod types;
