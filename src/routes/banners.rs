// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Banner rotation and click tracking routes.

use crate::error::{AppError, Result};
use crate::models::Banner;
use crate::services::BannerRequest;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/banners", get(select_banner))
        .route("/trackClick", post(track_click))
}

#[derive(Debug, Deserialize)]
pub struct BannerParams {
    pub rubro: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub id: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
    pub rubros: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<Banner> for BannerView {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id,
            title: banner.title,
            image_url: banner.image_url,
            link_url: banner.link_url,
            city: banner.city,
            position: banner.position,
            rubros: banner.categories,
            start_date: banner.start_date.map(format_utc_rfc3339),
            end_date: banner.end_date.map(format_utc_rfc3339),
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BannerResponse {
    pub success: bool,
    /// `null` when no banner is eligible
    pub banner: Option<BannerView>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn select_banner(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<BannerParams>, QueryRejection>,
) -> Result<Json<BannerResponse>> {
    let Query(params) = params?;
    let request = BannerRequest {
        category: non_blank(params.rubro),
        city: non_blank(params.city),
        position: non_blank(params.position),
    };

    let banner = state
        .banners
        .select_banner(&request, chrono::Utc::now())
        .await?;

    Ok(Json(BannerResponse {
        success: true,
        banner: banner.map(BannerView::from),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackClickRequest {
    pub banner_id: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrackClickResponse {
    pub success: bool,
}

async fn track_click(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<TrackClickRequest>, JsonRejection>,
) -> Result<Json<TrackClickResponse>> {
    let Json(request) = body?;
    let banner_id = request
        .banner_id
        .ok_or_else(|| AppError::BadRequest("bannerId is required".to_string()))?;

    state
        .banners
        .track_click(&banner_id, request.city.as_deref(), chrono::Utc::now())
        .await?;

    Ok(Json(TrackClickResponse { success: true }))
}
