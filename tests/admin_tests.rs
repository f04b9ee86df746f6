// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin statistics.

use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use pro_marketplace::db::Role;
use serde_json::json;
use tower::ServiceExt;

mod common;

async fn seeded_app() -> common::TestApp {
    let app = common::create_test_app();
    app.store.grant_role("boss", Role::Admin).await;

    app.store
        .put_professional(common::featured("active", "gasista", "centro", 3))
        .await;

    let mut lapsed = common::professional("lapsed", "gasista", "centro");
    lapsed.is_featured = true;
    lapsed.featured_until = Some(Utc::now() - Duration::hours(1));
    app.store.put_professional(lapsed).await;

    let mut blocked = common::featured("blocked", "plomero", "norte", 3);
    blocked.blocked = true;
    app.store.put_professional(blocked).await;

    app.store
        .put_banner(common::banner("b1", "Rosario", "top", &["all"]))
        .await;

    for _ in 0..2 {
        let response = app
            .router
            .clone()
            .oneshot(common::post_json("/trackClick", json!({"bannerId": "b1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .router
        .clone()
        .oneshot(common::post_json(
            "/createQuote",
            json!({
                "professionalId": "active",
                "clientName": "Juan",
                "clientPhone": "341444",
                "items": "Revisión",
                "total": 5000,
                "authToken": common::token_for("active"),
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    app
}

#[tokio::test]
async fn test_admin_stats_counts() {
    let app = seeded_app().await;

    let response = app
        .router
        .oneshot(common::get(&format!(
            "/admin/stats?authToken={}",
            common::token_for("boss")
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "totalProfessionals": 3,
            // Computed from the promotion window, regardless of moderation
            "featuredActiveCount": 2,
            "totalQuotes": 1,
            "totalClicks": 2,
        })
    );
}

#[tokio::test]
async fn test_admin_stats_with_bearer_header() {
    let app = seeded_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/stats")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", common::token_for("boss")),
        )
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let app = seeded_app().await;

    let response = app
        .router
        .oneshot(common::get(&format!(
            "/admin/stats?authToken={}",
            common::token_for("active")
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_anonymous_is_unauthorized() {
    let app = seeded_app().await;

    let response = app
        .router
        .oneshot(common::get("/admin/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_platform() {
    let app = common::create_test_app();
    app.store.grant_role("boss", Role::Admin).await;

    let response = app
        .router
        .oneshot(common::get(&format!(
            "/admin/stats?authToken={}",
            common::token_for("boss")
        )))
        .await
        .unwrap();

    let body = common::json_body(response).await;
    assert_eq!(body["totalProfessionals"], 0);
    assert_eq!(body["featuredActiveCount"], 0);
}
