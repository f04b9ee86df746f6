// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! Services talk to the [`DocumentStore`] trait; [`FirestoreDb`] is the
//! production backend and [`MemoryStore`] backs tests and offline runs.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{Banner, ClickEvent, Professional, ProfessionalPatch, Quote};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Collection names as constants.
pub mod collections {
    pub const PROFESSIONALS: &str = "professionals";
    pub const QUOTES: &str = "quotes";
    pub const BANNERS: &str = "banners";
    pub const AD_CLICKS: &str = "ads_clicks";
    /// Marker documents keyed by user ID; presence grants the admin role
    pub const ADMIN_USERS: &str = "admin_users";
}

/// Capabilities granted by marker documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
}

impl Role {
    /// Collection whose document IDs are the holders of this role.
    pub fn collection(self) -> &'static str {
        match self {
            Role::Admin => collections::ADMIN_USERS,
        }
    }
}

/// Candidate filter for professional searches.
#[derive(Debug, Clone)]
pub struct ProfessionalQuery {
    pub category: String,
    /// `None` disables the zone filter.
    pub zone: Option<String>,
}

/// Equality filters for banner scans.
#[derive(Debug, Clone, Default)]
pub struct BannerQuery {
    pub city: Option<String>,
    pub position: Option<String>,
}

/// Operations the services need from the document store.
///
/// Scan methods may return a superset of the matching documents when the
/// backend cannot express a predicate; callers re-check eligibility in memory.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, AppError>;

    /// Create or replace a professional document keyed by `professional.id`.
    async fn create_professional(&self, professional: &Professional) -> Result<(), AppError>;

    /// Merge `patch` into the stored profile in a single read-modify-write.
    ///
    /// Returns the merged document, or `None` if the profile does not exist.
    async fn update_professional(
        &self,
        id: &str,
        patch: &ProfessionalPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Professional>, AppError>;

    /// Listable professionals offering `query.category` (and serving `query.zone`).
    async fn find_professionals(
        &self,
        query: &ProfessionalQuery,
    ) -> Result<Vec<Professional>, AppError>;

    /// Every professional, for aggregate counts.
    async fn list_professionals(&self) -> Result<Vec<Professional>, AppError>;

    /// Store a new quote and return its generated ID.
    async fn insert_quote(&self, quote: &Quote) -> Result<String, AppError>;

    async fn count_quotes(&self) -> Result<u64, AppError>;

    async fn get_banner(&self, id: &str) -> Result<Option<Banner>, AppError>;

    /// Active banners matching the optional city/position equality filters.
    async fn find_banners(&self, query: &BannerQuery) -> Result<Vec<Banner>, AppError>;

    async fn insert_click(&self, click: &ClickEvent) -> Result<(), AppError>;

    async fn count_clicks(&self) -> Result<u64, AppError>;

    async fn has_role(&self, user_id: &str, role: Role) -> Result<bool, AppError>;
}

/// Generate a random document ID for append-only collections.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
