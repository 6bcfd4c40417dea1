//! Auth-failure classification and prompt propagation.
//!
//! DESIGN
//! ======
//! Every page issues requests through the API layer and hands failures to
//! [`intercept`], so 401/403 interpretation lives in exactly one place and
//! session/authorization UX stays uniform across screens. Classification
//! is a pure function over the failure value; the observable writes happen
//! in a thin adapter at the end.
//!
//! ERROR HANDLING
//! ==============
//! A 401 body that does not decode as an [`AuthFailure`] is treated as an
//! expired session rather than an error: the fail-safe default is to ask
//! the user to authenticate again. The interceptor itself never fails.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use crate::net::types::{AuthFailure, AuthFailureCode, PasswordExpiry, RequestError, RequestFailure};
use crate::state::session::SessionPrompts;

/// Result of classifying one failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 401 without a usable body, or any reason other than an expired
    /// password: the session is treated as expired.
    SessionExpired,
    /// 401 whose body names an expired password for a specific account.
    PasswordExpired(PasswordExpiry),
    /// 403: authenticated but not allowed.
    Unauthorised,
    /// Not an authentication failure; the caller handles it locally.
    Unhandled,
}

/// Classify a non-success response into an [`AuthOutcome`].
#[must_use]
pub fn classify(failure: &RequestFailure) -> AuthOutcome {
    match failure.status {
        401 => match serde_json::from_str::<AuthFailure>(&failure.body) {
            Ok(body) if body.reason_code == AuthFailureCode::PasswordExpired => {
                AuthOutcome::PasswordExpired(PasswordExpiry {
                    user_name: body.user_name,
                    message: body.reason,
                })
            }
            _ => AuthOutcome::SessionExpired,
        },
        403 => AuthOutcome::Unauthorised,
        _ => AuthOutcome::Unhandled,
    }
}

/// Resolve a failed request into a global prompt transition.
///
/// Writes at most one of the three prompt observables and returns whether
/// the failure was absorbed. Callers must check the flag: a `false`
/// return means no prompt was raised and the page renders its own local
/// error. Transport-level failures (no response exists) are never
/// absorbed here.
pub fn intercept(prompts: &SessionPrompts, error: &RequestError) -> bool {
    let RequestError::Status(failure) = error else {
        return false;
    };
    match classify(failure) {
        AuthOutcome::SessionExpired => {
            prompts.session_expired.set_value(true);
            true
        }
        AuthOutcome::PasswordExpired(expiry) => {
            prompts.password_expired.set_value(Some(expiry));
            true
        }
        AuthOutcome::Unauthorised => {
            prompts.unauthorised.set_value(true);
            true
        }
        AuthOutcome::Unhandled => false,
    }
}
