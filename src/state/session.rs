//! Session-level prompt state shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth-failure interceptor writes these observables; modal prompts
//! anywhere in the tree subscribe to them, so an expired session surfaces
//! identically no matter which screen triggered the failing request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::types::PasswordExpiry;
use crate::observe::value::ObservableValue;

/// The three application-wide auth prompts.
///
/// Cloning shares the underlying observables; there is one logical
/// instance per [`crate::state::context::ClientContext`].
#[derive(Clone)]
pub struct SessionPrompts {
    /// The session is no longer valid; prompt for re-authentication.
    pub session_expired: Arc<ObservableValue<bool>>,
    /// A password has expired; prompt routes into the change-password
    /// flow with the account details carried here.
    pub password_expired: Arc<ObservableValue<Option<PasswordExpiry>>>,
    /// The user is authenticated but not allowed to see the resource.
    pub unauthorised: Arc<ObservableValue<bool>>,
}

impl SessionPrompts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_expired: Arc::new(ObservableValue::new(false)),
            password_expired: Arc::new(ObservableValue::new(None)),
            unauthorised: Arc::new(ObservableValue::new(false)),
        }
    }

    /// Reset all prompts, e.g. after a successful re-authentication.
    pub fn clear(&self) {
        self.session_expired.set_value(false);
        self.password_expired.set_value(None);
        self.unauthorised.set_value(false);
    }
}

impl Default for SessionPrompts {
    fn default() -> Self {
        Self::new()
    }
}
