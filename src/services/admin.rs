// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Platform-wide counts for the admin dashboard.

use crate::db::DocumentStore;
use crate::error::Result;
use crate::models::PlatformStats;
use crate::services::guard::AuthGuard;
use crate::services::ranking;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn DocumentStore>,
    guard: AuthGuard,
}

impl AdminService {
    pub fn new(store: Arc<dyn DocumentStore>, guard: AuthGuard) -> Self {
        Self { store, guard }
    }

    /// Aggregate counts; featured status is evaluated at `now`, never read back.
    pub async fn stats(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<PlatformStats> {
        let user = self.guard.require_auth(token).await?;
        self.guard.require_admin(&user).await?;

        let professionals = self.store.list_professionals().await?;
        let featured_active_count = professionals
            .iter()
            .filter(|p| ranking::is_featured_active(p, now))
            .count() as u64;

        let stats = PlatformStats {
            total_professionals: professionals.len() as u64,
            featured_active_count,
            total_quotes: self.store.count_quotes().await?,
            total_clicks: self.store.count_clicks().await?,
        };

        tracing::info!(user_id = %user.user_id, ?stats, "Admin stats computed");
        Ok(stats)
    }
}
