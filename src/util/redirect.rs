//! Return-path sanitization for post-login navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login redirects carry the interrupted page in a `then=` query
//! parameter. That value can be attacker-influenced, so every return
//! path goes through [`sanitize_return_path`] before any navigation call
//! consumes it: whatever comes in, only a same-origin path and query can
//! come out.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::fmt::Write as _;

/// Reduce an arbitrary return-path candidate to a same-origin path and
/// query.
///
/// The input is parsed against the application's `origin`
/// (e.g. `"https://host.example"`). Absolute and protocol-relative URLs
/// are stripped of scheme and host, fragments are dropped, and relative
/// inputs are rooted. Empty input yields the empty string.
#[must_use]
pub fn sanitize_return_path(input: &str, origin: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let target = trimmed.split_once('#').map_or(trimmed, |(head, _)| head);
    if target.is_empty() {
        return String::new();
    }

    if let Some(rest) = strip_origin_prefix(target, origin) {
        return rooted(rest);
    }
    if let Some(authority) = target.strip_prefix("//") {
        return after_authority(authority);
    }
    match split_scheme(target) {
        Some((_, rest)) => match rest.strip_prefix("//") {
            Some(authority) => after_authority(authority),
            // Opaque forms like `mailto:` or `javascript:`; the body is
            // demoted to a rooted path.
            None => rooted(rest),
        },
        None => rooted(target),
    }
}

/// Build the login URL for an interrupted navigation, carrying the
/// sanitized return path in the `then=` query parameter. A return path
/// that sanitizes to nothing yields a bare `/login`.
#[must_use]
pub fn login_url_with_return(current: &str, origin: &str) -> String {
    let then = sanitize_return_path(current, origin);
    if then.is_empty() {
        "/login".to_owned()
    } else {
        format!("/login?then={}", percent_encode_component(&then))
    }
}

/// Percent-encode `value` for use as a URL query component. Unreserved
/// characters (RFC 3986) pass through; every other byte is `%XX`-encoded.
#[must_use]
pub fn percent_encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

fn strip_origin_prefix<'a>(target: &'a str, origin: &str) -> Option<&'a str> {
    if origin.is_empty() {
        return None;
    }
    let rest = target.strip_prefix(origin)?;
    if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
        Some(rest)
    } else {
        None
    }
}

/// Split a leading `scheme:` when the colon appears before any `/` or
/// `?` and the scheme is syntactically valid.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    if let Some(stop) = input.find(['/', '?']) {
        if stop < colon {
            return None;
        }
    }
    let scheme = &input[..colon];
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, &input[colon + 1..]))
}

/// Drop the authority (host) part and keep path + query.
fn after_authority(rest: &str) -> String {
    match rest.find(['/', '?']) {
        Some(idx) if rest.as_bytes()[idx] == b'/' => rest[idx..].to_owned(),
        Some(idx) => format!("/{}", &rest[idx..]),
        None => "/".to_owned(),
    }
}

fn rooted(path_and_query: &str) -> String {
    if path_and_query.is_empty() {
        "/".to_owned()
    } else if path_and_query.starts_with('/') {
        path_and_query.to_owned()
    } else {
        format!("/{path_and_query}")
    }
}
