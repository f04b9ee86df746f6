// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Professionals (profiles, search candidates)
//! - Quotes (append-only)
//! - Banners (read-only) and ad clicks (append-only)
//! - Admin role markers

use crate::db::{collections, new_document_id, BannerQuery, DocumentStore, ProfessionalQuery, Role};
use crate::error::AppError;
use crate::models::professional::fields;
use crate::models::{Banner, ClickEvent, Professional, ProfessionalPatch, Quote};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use firestore::FirestoreConsistencySelector;
use futures_util::TryStreamExt;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a disconnected client (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Count documents in a collection without buffering them.
    async fn count_documents(&self, collection: &str) -> Result<u64, AppError> {
        let documents = self
            .get_client()?
            .fluent()
            .select()
            .from(collection)
            .stream_query_with_errors()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        documents
            .try_fold(0u64, |count, _| async move { Ok(count + 1) })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for FirestoreDb {
    // ─── Professional Operations ─────────────────────────────────

    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PROFESSIONALS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn create_professional(&self, professional: &Professional) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PROFESSIONALS)
            .document_id(&professional.id)
            .object(professional)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Merge a patch and the derived completeness flag in one transaction.
    ///
    /// Only the patched fields plus `lastActive` and `profileCompleted` are
    /// written, so fields this service does not model are left untouched.
    async fn update_professional(
        &self,
        id: &str,
        patch: &ProfessionalPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Professional>, AppError> {
        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        // Read inside the transaction so a concurrent writer aborts the commit.
        let current: Option<Professional> = client
            .clone_with_consistency_selector(FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ))
            .fluent()
            .select()
            .by_id_in(collections::PROFESSIONALS)
            .obj()
            .one(id)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read professional in transaction: {}", e))
            })?;

        let Some(mut professional) = current else {
            let _ = transaction.rollback().await;
            return Ok(None);
        };

        let written = professional.apply_patch(patch, now);

        client
            .fluent()
            .update()
            .fields(written.iter().copied())
            .in_col(collections::PROFESSIONALS)
            .document_id(id)
            .object(&professional)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add profile update to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        tracing::debug!(
            professional_id = id,
            fields = ?written,
            profile_completed = professional.profile_completed,
            "Professional profile updated"
        );

        Ok(Some(professional))
    }

    /// Firestore allows a single `array-contains` per query, so the zone
    /// filter is applied after the category query returns.
    async fn find_professionals(
        &self,
        query: &ProfessionalQuery,
    ) -> Result<Vec<Professional>, AppError> {
        let category = query.category.clone();

        let candidates: Vec<Professional> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::PROFESSIONALS)
            .filter(move |q| {
                q.for_all([
                    q.field(fields::PROFILE_COMPLETED).eq(true),
                    q.field("blocked").eq(false),
                    q.field(fields::CATEGORIES).array_contains(category.clone()),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(candidates
            .into_iter()
            .filter(|p| query.zone.as_deref().map_or(true, |zone| p.serves(zone)))
            .collect())
    }

    async fn list_professionals(&self) -> Result<Vec<Professional>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::PROFESSIONALS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Quote Operations ────────────────────────────────────────

    async fn insert_quote(&self, quote: &Quote) -> Result<String, AppError> {
        let quote_id = new_document_id();

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::QUOTES)
            .document_id(&quote_id)
            .object(quote)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(quote_id)
    }

    async fn count_quotes(&self) -> Result<u64, AppError> {
        self.count_documents(collections::QUOTES).await
    }

    // ─── Banner & Click Operations ───────────────────────────────

    async fn get_banner(&self, id: &str) -> Result<Option<Banner>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::BANNERS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Date-window checks are left to the caller: Firestore rejects range
    /// filters on both `startDate` and `endDate` in one query.
    async fn find_banners(&self, query: &BannerQuery) -> Result<Vec<Banner>, AppError> {
        let city = query.city.clone();
        let position = query.position.clone();

        self.get_client()?
            .fluent()
            .select()
            .from(collections::BANNERS)
            .filter(move |q| {
                q.for_all([
                    q.field("active").eq(true),
                    city.as_ref().and_then(|c| q.field("city").eq(c.clone())),
                    position
                        .as_ref()
                        .and_then(|p| q.field("position").eq(p.clone())),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn insert_click(&self, click: &ClickEvent) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::AD_CLICKS)
            .document_id(new_document_id())
            .object(click)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn count_clicks(&self) -> Result<u64, AppError> {
        self.count_documents(collections::AD_CLICKS).await
    }

    // ─── Roles ───────────────────────────────────────────────────

    async fn has_role(&self, user_id: &str, role: Role) -> Result<bool, AppError> {
        let marker = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(role.collection())
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(marker.is_some())
    }
}
