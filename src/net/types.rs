//! Wire DTOs and the request-failure union for the client/server boundary.
//!
//! DESIGN
//! ======
//! Failed requests are carried as an explicit [`RequestError`] value
//! rather than a raw response object, so classification logic downstream
//! operates on a stable shape. Deserialization of failure bodies is
//! lenient: unknown reason codes and missing optional fields degrade
//! instead of erroring.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason attached to a 401 response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum AuthFailureCode {
    /// The account's password has expired and must be changed.
    PasswordExpired,
    /// The presented credentials were wrong.
    InvalidCredentials,
    /// The invite key used during registration is not valid.
    InvalidInviteKey,
    /// Any reason code this client version does not recognize.
    #[serde(other)]
    Unknown,
}

/// JSON body the server attaches to authentication failures.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFailure {
    /// Why authentication failed.
    pub reason_code: AuthFailureCode,
    /// Human-readable explanation, if the server supplied one.
    #[serde(default)]
    pub reason: Option<String>,
    /// Account the failure concerns, when it is account-specific.
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Details carried by the password-expired prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordExpiry {
    /// Account whose password expired, used to pre-route the
    /// change-password flow.
    pub user_name: Option<String>,
    /// Server-supplied explanation shown in the prompt.
    pub message: Option<String>,
}

/// An HTTP response with a non-success status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestFailure {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw response body text; may or may not decode as [`AuthFailure`].
    pub body: String,
}

/// Failure of a request issued through [`crate::net::api`].
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS,
    /// serialization of the outgoing payload).
    #[error("network error: {0}")]
    Transport(String),
    /// The server responded with a non-success status.
    #[error("request failed with status {}", .0.status)]
    Status(RequestFailure),
}

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: String,
    /// Login / display name.
    pub name: String,
}

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Full path of the entry, unique within the account.
    pub path: String,
    /// Base name shown in listings.
    pub name: String,
    /// Whether this entry is a directory.
    pub is_directory: bool,
    /// Size in bytes; absent for directories.
    pub size: Option<u64>,
}
