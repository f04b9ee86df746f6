// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Caller credential extraction.
//!
//! Clients send the identity token inside the request (`authToken` body field
//! or query parameter); an `Authorization: Bearer` header is accepted as well.
//! Verification happens in [`crate::services::AuthGuard`].

use axum::http::{header, HeaderMap};

/// Authenticated caller, as established by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

/// Pick the caller's token: an explicit request field wins over the header.
///
/// Blank values count as absent.
pub fn caller_token(headers: &HeaderMap, supplied: Option<&str>) -> Option<String> {
    supplied
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .or_else(|| bearer_token(headers))
        .map(str::to_string)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
