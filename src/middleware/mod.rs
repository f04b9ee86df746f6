// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (caller credentials, response headers).

pub mod auth;
pub mod security;

pub use auth::{caller_token, AuthUser};
