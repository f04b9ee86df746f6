// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quote issuance, limited to professionals with an active promotion.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{Quote, QuoteItems, QuoteStatus, QuoteTotal};
use crate::services::guard::AuthGuard;
use crate::services::ranking;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Raw quote fields as received from the client.
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub professional_id: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub items: Option<QuoteItems>,
    pub total: Option<QuoteTotal>,
}

/// Issues quotes on behalf of featured professionals.
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn DocumentStore>,
    guard: AuthGuard,
}

impl QuoteService {
    pub fn new(store: Arc<dyn DocumentStore>, guard: AuthGuard) -> Self {
        Self { store, guard }
    }

    /// Create a quote and return its ID.
    ///
    /// Featured status is re-evaluated against `now` on every call.
    pub async fn create_quote(
        &self,
        request: QuoteRequest,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let (Some(professional_id), Some(client_name), Some(client_phone), Some(items), Some(total)) = (
            present(request.professional_id),
            present(request.client_name),
            present(request.client_phone),
            request.items,
            request.total,
        ) else {
            return Err(AppError::BadRequest(
                "professionalId, clientName, clientPhone, items and total are required"
                    .to_string(),
            ));
        };

        let user = self.guard.require_auth(token).await?;

        let professional = self.store.get_professional(&professional_id).await?;
        let professional = self
            .guard
            .require_ownership(professional, &professional_id, &user)?;

        if !ranking::is_featured_active(&professional, now) {
            tracing::info!(
                professional_id = %professional_id,
                featured_until = ?professional.featured_until,
                "Quote refused: promotion not active"
            );
            return Err(AppError::Forbidden(
                "Only featured professionals may issue quotes".to_string(),
            ));
        }

        let items = items.into_lines();
        if items.is_empty() {
            return Err(AppError::BadRequest(
                "items must contain at least one entry".to_string(),
            ));
        }
        let total = total.parse().map_err(AppError::BadRequest)?;

        let quote = Quote {
            id: String::new(),
            professional_id,
            client_name,
            client_phone,
            items,
            total,
            status: QuoteStatus::Created,
            created_at: now,
        };

        let quote_id = self.store.insert_quote(&quote).await?;

        tracing::info!(
            quote_id = %quote_id,
            professional_id = %quote.professional_id,
            items = quote.items.len(),
            total = quote.total,
            "Quote created"
        );

        Ok(quote_id)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
