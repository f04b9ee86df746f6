// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, Duration, Utc};
use pro_marketplace::config::Config;
use pro_marketplace::db::{FirestoreDb, MemoryStore};
use pro_marketplace::models::{Banner, Professional};
use pro_marketplace::routes::create_router;
use pro_marketplace::services::{IdentityError, IdentityService};
use pro_marketplace::AppState;
use std::sync::{Arc, Mutex};

/// Email that the fake provider reports as already registered.
#[allow(dead_code)]
pub const TAKEN_EMAIL: &str = "taken@example.com";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Identity provider stand-in: token `token-<uid>` belongs to `<uid>`.
#[derive(Default)]
pub struct FakeIdentity {
    pub accounts: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl IdentityService for FakeIdentity {
    async fn create_account(
        &self,
        email: &str,
        _password: &str,
        display_name: &str,
    ) -> Result<String, IdentityError> {
        if email == TAKEN_EMAIL {
            return Err(IdentityError::Rejected(
                "Email already registered".to_string(),
            ));
        }
        let mut accounts = self.accounts.lock().unwrap();
        let user_id = format!("uid-{}", accounts.len() + 1);
        accounts.push((user_id.clone(), display_name.to_string()));
        Ok(user_id)
    }

    async fn verify_token(&self, token: &str) -> Result<String, IdentityError> {
        token
            .strip_prefix("token-")
            .filter(|uid| !uid.is_empty())
            .map(str::to_string)
            .ok_or_else(|| IdentityError::InvalidToken("unknown token".to_string()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub store: MemoryStore,
    pub identity: Arc<FakeIdentity>,
}

/// Create a test app backed by an in-memory store and fake identity provider.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    let store = MemoryStore::new();
    let identity = Arc::new(FakeIdentity::default());
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Arc::new(store.clone()),
        identity.clone(),
    ));

    TestApp {
        router: create_router(state.clone()),
        state,
        store,
        identity,
    }
}

#[allow(dead_code)]
pub fn token_for(user_id: &str) -> String {
    format!("token-{user_id}")
}

/// A listable professional owned by `id` offering `category` in `zone`.
#[allow(dead_code)]
pub fn professional(id: &str, category: &str, zone: &str) -> Professional {
    let now = Utc::now();
    let mut p = Professional::new_registration(id, &format!("{id}@example.com"), id, "341555", now);
    p.photo_url = format!("https://img.example.com/{id}.jpg");
    p.categories = vec![category.to_string()];
    p.zones = vec![zone.to_string()];
    p.profile_completed = true;
    p
}

/// A professional whose promotion is active for the next `days`.
#[allow(dead_code)]
pub fn featured(id: &str, category: &str, zone: &str, days: i64) -> Professional {
    let mut p = professional(id, category, zone);
    p.is_featured = true;
    p.featured_until = Some(Utc::now() + Duration::days(days));
    p
}

/// A live banner for `city`/`position` tagged with `tags`.
#[allow(dead_code)]
pub fn banner(id: &str, city: &str, position: &str, tags: &[&str]) -> Banner {
    let now = Utc::now();
    Banner {
        id: id.to_string(),
        active: true,
        start_date: Some(now - Duration::days(1)),
        end_date: Some(now + Duration::days(1)),
        city: Some(city.to_string()),
        position: Some(position.to_string()),
        categories: tags.iter().map(|t| t.to_string()).collect(),
        title: Some(format!("Banner {id}")),
        image_url: Some(format!("https://img.example.com/{id}.png")),
        link_url: None,
    }
}

#[allow(dead_code)]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
