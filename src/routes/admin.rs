// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin dashboard routes.

use crate::error::Result;
use crate::middleware::auth::caller_token;
use crate::models::PlatformStats;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin/stats", get(get_stats))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub auth_token: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub stats: PlatformStats,
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    params: std::result::Result<Query<StatsParams>, QueryRejection>,
) -> Result<Json<StatsResponse>> {
    let Query(params) = params?;
    let token = caller_token(&headers, params.auth_token.as_deref());

    let stats = state
        .admin
        .stats(token.as_deref(), chrono::Utc::now())
        .await?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
