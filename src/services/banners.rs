// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Banner rotation and click tracking.

use crate::db::{BannerQuery, DocumentStore};
use crate::error::{AppError, Result};
use crate::models::{Banner, ClickEvent};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;

/// Placement filters for a banner request.
#[derive(Debug, Clone, Default)]
pub struct BannerRequest {
    pub category: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
}

#[derive(Clone)]
pub struct BannerService {
    store: Arc<dyn DocumentStore>,
    default_click_city: String,
}

impl BannerService {
    pub fn new(store: Arc<dyn DocumentStore>, default_click_city: impl Into<String>) -> Self {
        Self {
            store,
            default_click_city: default_click_city.into(),
        }
    }

    /// Banners that may be shown for `request` at `now`.
    pub async fn eligible_banners(
        &self,
        request: &BannerRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<Banner>> {
        let query = BannerQuery {
            city: request.city.clone(),
            position: request.position.clone(),
        };

        let eligible = self
            .store
            .find_banners(&query)
            .await?
            .into_iter()
            .filter(|b| b.is_live(now))
            .filter(|b| b.matches_city(request.city.as_deref()))
            .filter(|b| b.matches_position(request.position.as_deref()))
            .filter(|b| b.matches_category(request.category.as_deref()))
            .collect();

        Ok(eligible)
    }

    /// Pick one eligible banner uniformly at random, or `None` if there is none.
    pub async fn select_banner(
        &self,
        request: &BannerRequest,
        now: DateTime<Utc>,
    ) -> Result<Option<Banner>> {
        let eligible = self.eligible_banners(request, now).await?;
        let count = eligible.len();
        let chosen = pick_uniform(eligible, &mut rand::thread_rng());

        tracing::debug!(
            category = ?request.category,
            city = ?request.city,
            position = ?request.position,
            eligible = count,
            banner_id = chosen.as_ref().map(|b| b.id.as_str()),
            "Banner selection"
        );

        Ok(chosen)
    }

    /// Record a click on an existing banner.
    pub async fn track_click(
        &self,
        banner_id: &str,
        city: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let banner_id = banner_id.trim();
        if banner_id.is_empty() {
            return Err(AppError::BadRequest("bannerId is required".to_string()));
        }

        if self.store.get_banner(banner_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Banner {}", banner_id)));
        }

        let city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_click_city);

        let click = ClickEvent {
            banner_id: banner_id.to_string(),
            city: city.to_string(),
            timestamp: now,
        };
        self.store.insert_click(&click).await?;

        tracing::info!(banner_id, city, "Banner click recorded");
        Ok(())
    }
}

/// Choose one element with equal probability.
pub fn pick_uniform<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..items.len());
    Some(items.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_uniform(Vec::<u8>::new(), &mut rng), None);
    }

    #[test]
    fn test_pick_single_always_returns_it() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_uniform(vec!["only"], &mut rng), Some("only"));
        }
    }

    #[test]
    fn test_pick_reaches_every_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            let picked = pick_uniform(vec![0usize, 1, 2, 3], &mut rng).unwrap();
            seen[picked] += 1;
        }
        // Roughly 1000 each; a weighted pick would skew far outside this band.
        for count in seen {
            assert!((800..1200).contains(&count), "counts {seen:?}");
        }
    }
}
