// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration, search and profile update routes.

use crate::error::Result;
use crate::middleware::auth::caller_token;
use crate::models::ProfessionalPatch;
use crate::services::ranking::RankedProfessional;
use crate::services::{Registration, SearchRequest};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/professionals", get(search_professionals))
        .route("/updateProfessional", post(update_professional))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub phone: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub user_id: String,
    pub message: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>> {
    let Json(mut request) = body?;
    request.email = request.email.trim().to_string();
    request.name = request.name.trim().to_string();
    request.phone = request.phone.trim().to_string();
    request.validate()?;

    let registration = Registration {
        email: request.email,
        password: request.password,
        name: request.name,
        phone: request.phone,
    };
    let user_id = state
        .profiles
        .register(&registration, chrono::Utc::now())
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        user_id,
        message: "Professional registered".to_string(),
    }))
}

// ─── Search ──────────────────────────────────────────────────

/// Raw search parameters; validated by [`SearchRequest::parse`].
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub rubro: Option<String>,
    pub zona: Option<String>,
    pub limit: Option<String>,
}

/// Public listing entry with its computed rank.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalView {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub photo_url: String,
    pub rubros: Vec<String>,
    pub zonas: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub jobs_completed: u32,
    pub last_active: Option<String>,
    pub is_featured: bool,
    pub featured_until: Option<String>,
    pub profile_completed: bool,
    pub ranking_score: f64,
    pub is_featured_active: bool,
}

impl From<RankedProfessional> for ProfessionalView {
    fn from(ranked: RankedProfessional) -> Self {
        let p = ranked.professional;
        Self {
            id: p.id,
            name: p.name,
            phone: p.phone,
            photo_url: p.photo_url,
            rubros: p.categories,
            zonas: p.zones,
            rating: p.rating,
            reviews_count: p.reviews_count,
            jobs_completed: p.jobs_completed,
            last_active: p.last_active.map(format_utc_rfc3339),
            is_featured: p.is_featured,
            featured_until: p.featured_until.map(format_utc_rfc3339),
            profile_completed: p.profile_completed,
            ranking_score: ranked.rank.score,
            is_featured_active: ranked.rank.featured_active,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub success: bool,
    pub professionals: Vec<ProfessionalView>,
}

async fn search_professionals(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<SearchParams>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<SearchResponse>> {
    let Query(params) = params?;
    let request = SearchRequest::parse(
        params.rubro.as_deref(),
        params.zona.as_deref(),
        params.limit.as_deref(),
    )?;

    let ranked = state.listing.search(&request, chrono::Utc::now()).await?;

    Ok(Json(SearchResponse {
        success: true,
        professionals: ranked.into_iter().map(ProfessionalView::from).collect(),
    }))
}

// ─── Profile Update ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfessionalRequest {
    pub professional_id: Option<String>,
    pub updates: Option<ProfessionalPatch>,
    pub auth_token: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfessionalResponse {
    pub success: bool,
    pub profile_completed: bool,
    pub message: String,
}

async fn update_professional(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: std::result::Result<Json<UpdateProfessionalRequest>, JsonRejection>,
) -> Result<Json<UpdateProfessionalResponse>> {
    let Json(request) = body?;
    let token = caller_token(&headers, request.auth_token.as_deref());

    let (Some(professional_id), Some(updates)) = (
        request.professional_id.filter(|id| !id.trim().is_empty()),
        request.updates,
    ) else {
        return Err(crate::error::AppError::BadRequest(
            "professionalId and updates are required".to_string(),
        ));
    };

    let profile_completed = state
        .profiles
        .update(
            &professional_id,
            &updates,
            token.as_deref(),
            chrono::Utc::now(),
        )
        .await?;

    Ok(Json(UpdateProfessionalResponse {
        success: true,
        profile_completed,
        message: "Profile updated".to_string(),
    }))
}
