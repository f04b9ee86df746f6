// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Professional search: candidate scan, ranking and truncation.

use crate::db::{DocumentStore, ProfessionalQuery};
use crate::error::{AppError, Result};
use crate::services::ranking::{self, RankedProfessional};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Results returned when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Zone values that disable the zone filter ("toda" predates the API).
pub const ALL_ZONES_SENTINELS: [&str; 2] = ["all", "toda"];

/// Validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub category: String,
    /// `None` means every zone.
    pub zone: Option<String>,
    pub limit: usize,
}

impl SearchRequest {
    /// Validate raw query parameters.
    pub fn parse(category: Option<&str>, zone: Option<&str>, limit: Option<&str>) -> Result<Self> {
        let category = non_empty(category);
        let zone = non_empty(zone);
        let (Some(category), Some(zone)) = (category, zone) else {
            return Err(AppError::BadRequest(
                "Both 'rubro' and 'zona' are required".to_string(),
            ));
        };

        let limit = match limit.map(str::trim) {
            None => DEFAULT_SEARCH_LIMIT,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    AppError::BadRequest(format!("'limit' must be a positive integer: {raw:?}"))
                })?,
        };

        let zone = (!ALL_ZONES_SENTINELS.contains(&zone)).then(|| zone.to_string());

        Ok(Self {
            category: category.to_string(),
            zone,
            limit,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Search over listable professionals.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn DocumentStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Rank matching professionals at `now` and return the first `request.limit`.
    pub async fn search(
        &self,
        request: &SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedProfessional>> {
        let query = ProfessionalQuery {
            category: request.category.clone(),
            zone: request.zone.clone(),
        };

        let candidates: Vec<_> = self
            .store
            .find_professionals(&query)
            .await?
            .into_iter()
            .filter(|p| p.is_listable() && p.offers(&request.category))
            .filter(|p| request.zone.as_deref().map_or(true, |zone| p.serves(zone)))
            .filter(|p| {
                if p.user_id.is_empty() {
                    tracing::warn!(professional_id = %p.id, "Skipping professional without userId");
                    return false;
                }
                true
            })
            .collect();

        let scanned = candidates.len();
        let mut ranked = ranking::rank(candidates, now);
        ranked.truncate(request.limit);

        tracing::debug!(
            category = %request.category,
            zone = ?request.zone,
            scanned,
            returned = ranked.len(),
            "Professional search"
        );

        Ok(ranked)
    }
}
