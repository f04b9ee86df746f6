// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity service interface (account creation and token verification).

use crate::error::AppError;
use async_trait::async_trait;

/// Identity verification error categories.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    /// The provider refused the request (e.g. email already registered).
    #[error("{0}")]
    Rejected(String),
    /// The token is malformed, expired, or not issued for this project.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// The provider could not be reached or answered unexpectedly.
    #[error("identity provider unavailable: {0}")]
    Transient(String),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Rejected(reason) => AppError::BadRequest(reason),
            IdentityError::InvalidToken(_) => AppError::InvalidToken,
            IdentityError::Transient(reason) => AppError::Identity(reason),
        }
    }
}

/// External identity provider.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Create an account and return its opaque user ID.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<String, IdentityError>;

    /// Verify an ID token and return the user ID it was issued to.
    async fn verify_token(&self, token: &str) -> Result<String, IdentityError>;
}
