// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authorization checks shared by every mutating or privileged operation.

use crate::db::{DocumentStore, Role};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Professional;
use crate::services::identity::IdentityService;
use std::sync::Arc;

/// A stored resource that belongs to one identity user.
pub trait Owned {
    /// What to call the resource in error messages.
    const KIND: &'static str;

    fn owner_user_id(&self) -> &str;
}

impl Owned for Professional {
    const KIND: &'static str = "Professional";

    fn owner_user_id(&self) -> &str {
        &self.user_id
    }
}

/// Authentication, ownership and role checks.
#[derive(Clone)]
pub struct AuthGuard {
    identity: Arc<dyn IdentityService>,
    store: Arc<dyn DocumentStore>,
}

impl AuthGuard {
    pub fn new(identity: Arc<dyn IdentityService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    /// Resolve the caller from their identity token.
    pub async fn require_auth(&self, token: Option<&str>) -> Result<AuthUser> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::Unauthorized)?;

        let user_id = self.identity.verify_token(token).await.map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AppError::from(e)
        })?;

        Ok(AuthUser { user_id })
    }

    /// Fail unless `resource` exists and belongs to `user`.
    pub fn require_ownership<R: Owned>(
        &self,
        resource: Option<R>,
        resource_id: &str,
        user: &AuthUser,
    ) -> Result<R> {
        let resource =
            resource.ok_or_else(|| AppError::NotFound(format!("{} {}", R::KIND, resource_id)))?;

        if resource.owner_user_id() != user.user_id {
            tracing::warn!(
                user_id = %user.user_id,
                resource = R::KIND,
                resource_id,
                "Blocked access to resource owned by another user"
            );
            return Err(AppError::Forbidden("Not authorized".to_string()));
        }

        Ok(resource)
    }

    /// Fail unless `user` holds `role`.
    pub async fn require_role(&self, user: &AuthUser, role: Role) -> Result<()> {
        if self.store.has_role(&user.user_id, role).await? {
            return Ok(());
        }

        tracing::warn!(user_id = %user.user_id, ?role, "Blocked request lacking role");
        Err(AppError::Forbidden("Not authorized".to_string()))
    }

    pub async fn require_admin(&self, user: &AuthUser) -> Result<()> {
        self.require_role(user, Role::Admin).await
    }
}
