// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quote creation route.

use crate::error::Result;
use crate::middleware::auth::caller_token;
use crate::models::{QuoteItems, QuoteTotal};
use crate::services::QuoteRequest;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/createQuote", post(create_quote))
}

/// `items` may be a list or one newline-delimited string; `total` a number
/// or a decimal string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub professional_id: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub items: Option<QuoteItems>,
    pub total: Option<QuoteTotal>,
    pub auth_token: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteResponse {
    pub success: bool,
    pub quote_id: String,
    pub message: String,
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: std::result::Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<Json<CreateQuoteResponse>> {
    let Json(request) = body?;
    let token = caller_token(&headers, request.auth_token.as_deref());

    let quote = QuoteRequest {
        professional_id: request.professional_id,
        client_name: request.client_name,
        client_phone: request.client_phone,
        items: request.items,
        total: request.total,
    };
    let quote_id = state
        .quotes
        .create_quote(quote, token.as_deref(), chrono::Utc::now())
        .await?;

    Ok(Json(CreateQuoteResponse {
        success: true,
        quote_id,
        message: "Quote created".to_string(),
    }))
}
