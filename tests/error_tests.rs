// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use pro_marketplace::error::AppError;
use pro_marketplace::services::IdentityError;

mod common;

#[tokio::test]
async fn test_identity_errors_map_to_status() {
    let cases = [
        (
            IdentityError::Rejected("Email is already registered".into()),
            StatusCode::BAD_REQUEST,
        ),
        (
            IdentityError::InvalidToken("expired".into()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            IdentityError::Transient("timeout".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(AppError::from(err).status(), status);
    }
}

#[tokio::test]
async fn test_forbidden_message_is_passed_through() {
    let response = AppError::Forbidden("Not authorized".into()).into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = common::json_body(response).await;
    assert_eq!(body["error"], "Not authorized");
    assert_eq!(body["code"], "forbidden");
}

#[tokio::test]
async fn test_unclassified_errors_hide_details() {
    let response = AppError::Internal(anyhow::anyhow!("secret stack detail")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = common::json_body(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["code"], "internal_error");
}

#[tokio::test]
async fn test_identity_outage_hides_details() {
    let response = AppError::from(IdentityError::Transient("10.0.0.7 refused".into())).into_response();

    let body = common::json_body(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["code"], "identity_error");
}
