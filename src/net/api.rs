//! REST API helpers for communicating with the file-hosting server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success response is returned as [`RequestError::Status`]
//! with its status code and raw body text, so callers can hand it to
//! [`crate::net::interceptor::intercept`] and fall back to local error
//! rendering when the interceptor reports the failure unhandled.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{FileEntry, RequestError, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::redirect::percent_encode_component;

#[cfg(any(test, feature = "hydrate"))]
fn files_endpoint(path: &str) -> String {
    format!("/api/files?path={}", percent_encode_component(path))
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> RequestError {
    RequestError::Transport(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> RequestError {
    RequestError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn status_failure(resp: gloo_net::http::Response) -> RequestError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    RequestError::Status(crate::net::types::RequestFailure { status, body })
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for non-success responses (a 401 here
/// is how an expired session first surfaces) and
/// [`RequestError::Transport`] when no response was produced.
pub async fn fetch_current_user() -> Result<User, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_failure(resp).await);
        }
        resp.json::<User>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(offline())
    }
}

/// Log in with a username and password via `POST /api/auth/login`.
///
/// `remember` asks the server for a long-lived session; the remembered
/// username itself is kept client-side in
/// [`crate::state::prefs::Preferences`].
///
/// # Errors
///
/// Non-success responses surface as [`RequestError::Status`]; a 401 body
/// may carry an `AuthFailure` explaining the rejection.
pub async fn login(user_name: &str, password: &str, remember: bool) -> Result<User, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_name": user_name,
            "password": password,
            "remember": remember,
        });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_failure(resp).await);
        }
        resp.json::<User>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_name, password, remember);
        Err(offline())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Change an account password via `POST /api/auth/change-password`.
///
/// This is the endpoint the password-expired prompt routes into.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for non-success responses and
/// [`RequestError::Transport`] when no response was produced.
pub async fn change_password(
    user_name: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_name": user_name,
            "current_password": current_password,
            "new_password": new_password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/change-password")
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_name, current_password, new_password);
        Err(offline())
    }
}

/// Fetch the listing of one directory from `GET /api/files`.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for non-success responses and
/// [`RequestError::Transport`] when no response was produced.
pub async fn fetch_listing(path: &str) -> Result<Vec<FileEntry>, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&files_endpoint(path))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_failure(resp).await);
        }
        resp.json::<Vec<FileEntry>>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline())
    }
}

/// Delete a file or directory via `DELETE /api/files`.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for non-success responses (callers
/// typically render a 404 locally) and [`RequestError::Transport`] when
/// no response was produced.
pub async fn delete_entry(path: &str) -> Result<(), RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&files_endpoint(path))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline())
    }
}
