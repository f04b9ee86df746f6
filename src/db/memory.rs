// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory [`DocumentStore`] for tests and offline runs.
//!
//! Documents keep their insertion order, which makes scan order (and
//! therefore tie order in search results) deterministic.

use crate::db::{new_document_id, BannerQuery, DocumentStore, ProfessionalQuery, Role};
use crate::error::AppError;
use crate::models::{Banner, ClickEvent, Professional, ProfessionalPatch, Quote};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    professionals: Vec<Professional>,
    quotes: Vec<Quote>,
    banners: Vec<Banner>,
    clicks: Vec<ClickEvent>,
    roles: HashSet<(String, Role)>,
}

/// Thread-safe in-memory document store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<Collections>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail like an unreachable database.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(
                "Database not connected (offline mode)".to_string(),
            ));
        }
        Ok(())
    }

    // ─── Seeding & Inspection ────────────────────────────────────

    /// Insert or replace a professional, keeping its scan position on replace.
    pub async fn put_professional(&self, professional: Professional) {
        let mut data = self.data.write().await;
        match data
            .professionals
            .iter_mut()
            .find(|p| p.id == professional.id)
        {
            Some(existing) => *existing = professional,
            None => data.professionals.push(professional),
        }
    }

    pub async fn put_banner(&self, banner: Banner) {
        let mut data = self.data.write().await;
        data.banners.retain(|b| b.id != banner.id);
        data.banners.push(banner);
    }

    pub async fn grant_role(&self, user_id: &str, role: Role) {
        self.data
            .write()
            .await
            .roles
            .insert((user_id.to_string(), role));
    }

    pub async fn professional(&self, id: &str) -> Option<Professional> {
        self.data
            .read()
            .await
            .professionals
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn quotes(&self) -> Vec<Quote> {
        self.data.read().await.quotes.clone()
    }

    pub async fn clicks(&self) -> Vec<ClickEvent> {
        self.data.read().await.clicks.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, AppError> {
        self.check_available()?;
        Ok(self.professional(id).await)
    }

    async fn create_professional(&self, professional: &Professional) -> Result<(), AppError> {
        self.check_available()?;
        self.put_professional(professional.clone()).await;
        Ok(())
    }

    async fn update_professional(
        &self,
        id: &str,
        patch: &ProfessionalPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Professional>, AppError> {
        self.check_available()?;
        let mut data = self.data.write().await;
        Ok(data
            .professionals
            .iter_mut()
            .find(|p| p.id == id)
            .map(|professional| {
                professional.apply_patch(patch, now);
                professional.clone()
            }))
    }

    async fn find_professionals(
        &self,
        query: &ProfessionalQuery,
    ) -> Result<Vec<Professional>, AppError> {
        self.check_available()?;
        let data = self.data.read().await;
        Ok(data
            .professionals
            .iter()
            .filter(|p| p.is_listable() && p.offers(&query.category))
            .filter(|p| query.zone.as_deref().map_or(true, |zone| p.serves(zone)))
            .cloned()
            .collect())
    }

    async fn list_professionals(&self) -> Result<Vec<Professional>, AppError> {
        self.check_available()?;
        Ok(self.data.read().await.professionals.clone())
    }

    async fn insert_quote(&self, quote: &Quote) -> Result<String, AppError> {
        self.check_available()?;
        let quote_id = new_document_id();
        let mut stored = quote.clone();
        stored.id = quote_id.clone();
        self.data.write().await.quotes.push(stored);
        Ok(quote_id)
    }

    async fn count_quotes(&self) -> Result<u64, AppError> {
        self.check_available()?;
        Ok(self.data.read().await.quotes.len() as u64)
    }

    async fn get_banner(&self, id: &str) -> Result<Option<Banner>, AppError> {
        self.check_available()?;
        let data = self.data.read().await;
        Ok(data.banners.iter().find(|b| b.id == id).cloned())
    }

    async fn find_banners(&self, query: &BannerQuery) -> Result<Vec<Banner>, AppError> {
        self.check_available()?;
        let data = self.data.read().await;
        Ok(data
            .banners
            .iter()
            .filter(|b| b.active)
            .filter(|b| b.matches_city(query.city.as_deref()))
            .filter(|b| b.matches_position(query.position.as_deref()))
            .cloned()
            .collect())
    }

    async fn insert_click(&self, click: &ClickEvent) -> Result<(), AppError> {
        self.check_available()?;
        self.data.write().await.clicks.push(click.clone());
        Ok(())
    }

    async fn count_clicks(&self) -> Result<u64, AppError> {
        self.check_available()?;
        Ok(self.data.read().await.clicks.len() as u64)
    }

    async fn has_role(&self, user_id: &str, role: Role) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self
            .data
            .read()
            .await
            .roles
            .contains(&(user_id.to_string(), role)))
    }
}
