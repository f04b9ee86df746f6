// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Professional registration and profile updates.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{Professional, ProfessionalPatch};
use crate::services::guard::AuthGuard;
use crate::services::identity::IdentityService;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// New account details, already validated by the route.
#[derive(Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Creates and edits professional profiles.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityService>,
    guard: AuthGuard,
}

impl ProfileService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityService>,
        guard: AuthGuard,
    ) -> Self {
        Self {
            store,
            identity,
            guard,
        }
    }

    /// Create the identity account and its empty professional profile.
    ///
    /// Returns the new user ID, which is also the profile's document ID.
    pub async fn register(&self, registration: &Registration, now: DateTime<Utc>) -> Result<String> {
        let user_id = self
            .identity
            .create_account(
                &registration.email,
                &registration.password,
                &registration.name,
            )
            .await?;

        let professional = Professional::new_registration(
            &user_id,
            &registration.email,
            &registration.name,
            &registration.phone,
            now,
        );

        if let Err(e) = self.store.create_professional(&professional).await {
            // The account exists without a profile; it has to be repaired by hand.
            tracing::error!(
                user_id = %user_id,
                error = %e,
                "Account created but professional profile could not be stored"
            );
            return Err(e);
        }

        tracing::info!(user_id = %user_id, "Professional registered");
        Ok(user_id)
    }

    /// Apply `patch` to a profile owned by the caller.
    ///
    /// Returns the recomputed `profileCompleted` flag.
    pub async fn update(
        &self,
        professional_id: &str,
        patch: &ProfessionalPatch,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let user = self.guard.require_auth(token).await?;

        let current = self.store.get_professional(professional_id).await?;
        self.guard
            .require_ownership(current, professional_id, &user)?;

        let updated = self
            .store
            .update_professional(professional_id, patch, now)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Professional {}", professional_id)))?;

        tracing::info!(
            professional_id,
            user_id = %user.user_id,
            profile_completed = updated.profile_completed,
            "Professional profile updated"
        );

        Ok(updated.profile_completed)
    }
}
