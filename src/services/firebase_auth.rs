// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firebase Authentication client.
//!
//! - ID tokens are verified locally against Google's secure-token JWKS,
//!   which is cached for as long as its `Cache-Control` header allows.
//! - Accounts are created through the Identity Toolkit REST API.

use crate::config::Config;
use crate::services::identity::{IdentityError, IdentityService};
use anyhow::Context;
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::{Mutex, RwLock};

const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
const CLOCK_SKEW_SECS: u64 = 60;

#[derive(Clone)]
enum KeySource {
    Google,
    StaticKey {
        kid: String,
        decoding_key: Arc<DecodingKey>,
    },
}

#[derive(Clone)]
struct JwksCacheEntry {
    keys_by_kid: HashMap<String, Arc<DecodingKey>>,
    expires_at: Instant,
}

/// Firebase Authentication for one project.
pub struct FirebaseAuth {
    http_client: reqwest::Client,
    project_id: String,
    api_key: String,
    keys: KeySource,
    jwks_cache: RwLock<Option<JwksCacheEntry>>,
    refresh_lock: Mutex<()>,
}

impl FirebaseAuth {
    /// Create a production client that fetches and caches Google's signing keys.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let auth = Self::build(config, KeySource::Google)?;

        tracing::info!(
            project = %auth.project_id,
            "Initialized Firebase Auth client"
        );

        Ok(auth)
    }

    /// Create a client that verifies tokens with a single static RSA public key.
    ///
    /// This is intended for deterministic local/integration tests.
    pub fn new_with_static_key(
        config: &Config,
        kid: impl Into<String>,
        decoding_key: DecodingKey,
    ) -> anyhow::Result<Self> {
        let kid = kid.into();
        if kid.trim().is_empty() {
            anyhow::bail!("static signing key kid must not be empty");
        }

        Self::build(
            config,
            KeySource::StaticKey {
                kid,
                decoding_key: Arc::new(decoding_key),
            },
        )
    }

    fn build(config: &Config, keys: KeySource) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building Firebase Auth HTTP client")?;

        Ok(Self {
            http_client,
            project_id: config.gcp_project_id.clone(),
            api_key: config.firebase_api_key.clone(),
            keys,
            jwks_cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Verify a Firebase ID token and return the claims it carries.
    async fn verify_id_token(&self, token: &str) -> Result<FirebaseIdTokenClaims, IdentityError> {
        let header = decode_header(token)
            .map_err(|e| IdentityError::InvalidToken(format!("invalid JWT header: {e}")))?;

        if header.alg != Algorithm::RS256 {
            return Err(IdentityError::InvalidToken(format!(
                "unexpected JWT alg: {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| IdentityError::InvalidToken("missing JWT kid".to_string()))?;

        let decoding_key = self.decoding_key_for_kid(&kid).await?;

        let issuer = format!("{ISSUER_PREFIX}{}", self.project_id);
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.leeway = CLOCK_SKEW_SECS;

        let claims = decode::<FirebaseIdTokenClaims>(token, decoding_key.as_ref(), &validation)
            .map_err(|e| IdentityError::InvalidToken(format!("JWT validation failed: {e}")))?
            .claims;

        if claims.sub.trim().is_empty() {
            return Err(IdentityError::InvalidToken("empty sub claim".to_string()));
        }
        validate_not_in_future("iat", claims.iat)?;
        validate_not_in_future("auth_time", claims.auth_time)?;

        Ok(claims)
    }

    async fn decoding_key_for_kid(&self, kid: &str) -> Result<Arc<DecodingKey>, IdentityError> {
        match &self.keys {
            KeySource::StaticKey {
                kid: static_kid,
                decoding_key,
            } => {
                if kid == static_kid {
                    return Ok(decoding_key.clone());
                }

                return Err(IdentityError::InvalidToken(format!(
                    "unknown JWT kid for static verifier: {kid}"
                )));
            }
            KeySource::Google => {}
        }

        if let Some(key) = self.lookup_cached_key(kid).await {
            return Ok(key);
        }

        // Google rotates keys; an unknown kid forces one refetch.
        for force_refresh in [false, true] {
            self.refresh_jwks(force_refresh).await?;
            if let Some(key) = self.lookup_cached_key(kid).await {
                return Ok(key);
            }
        }

        Err(IdentityError::InvalidToken(format!(
            "JWT kid not found in JWKS after refresh: {kid}"
        )))
    }

    async fn lookup_cached_key(&self, kid: &str) -> Option<Arc<DecodingKey>> {
        let cache = self.jwks_cache.read().await;
        let now = Instant::now();
        cache
            .as_ref()
            .filter(|entry| entry.expires_at > now)
            .and_then(|entry| entry.keys_by_kid.get(kid))
            .cloned()
    }

    async fn refresh_jwks(&self, force_refresh: bool) -> Result<(), IdentityError> {
        let _guard = self.refresh_lock.lock().await;

        if !force_refresh {
            let cache = self.jwks_cache.read().await;
            if cache
                .as_ref()
                .is_some_and(|entry| entry.expires_at > Instant::now())
            {
                return Ok(());
            }
        }

        tracing::debug!(jwks_uri = JWKS_URL, "Refreshing Firebase JWKS cache");

        let response = self
            .http_client
            .get(JWKS_URL)
            .send()
            .await
            .map_err(|e| IdentityError::Transient(format!("JWKS request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(IdentityError::Transient(format!(
                "JWKS request returned status {}",
                response.status()
            )));
        }

        let ttl = cache_ttl_from_headers(response.headers(), DEFAULT_CACHE_TTL);

        let jwks: Jwks = response
            .json()
            .await
            .map_err(|e| IdentityError::Transient(format!("invalid JWKS JSON: {e}")))?;

        let keys_by_kid = usable_keys(jwks);

        if keys_by_kid.is_empty() {
            return Err(IdentityError::Transient(
                "JWKS response did not include any usable RSA keys".to_string(),
            ));
        }

        *self.jwks_cache.write().await = Some(JwksCacheEntry {
            keys_by_kid,
            expires_at: Instant::now() + ttl,
        });

        tracing::debug!(ttl_secs = ttl.as_secs(), "Firebase JWKS cache refreshed");
        Ok(())
    }

    /// POST to an Identity Toolkit endpoint and decode the JSON reply.
    async fn toolkit_call<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T, IdentityError> {
        let url = format!("{IDENTITY_TOOLKIT_URL}/{endpoint}");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Transient(format!("{endpoint} request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| IdentityError::Transient(format!("invalid {endpoint} JSON: {e}")));
        }

        let body = response.text().await.unwrap_or_default();
        if status.as_u16() == 400 {
            let code = serde_json::from_str::<ToolkitErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| "INVALID_REQUEST".to_string());
            return Err(IdentityError::Rejected(describe_toolkit_error(&code)));
        }

        Err(IdentityError::Transient(format!(
            "{endpoint} returned HTTP {status}: {body}"
        )))
    }
}

#[async_trait]
impl IdentityService for FirebaseAuth {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<String, IdentityError> {
        let created: SignUpResponse = self
            .toolkit_call(
                "accounts:signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let _: serde_json::Value = self
            .toolkit_call(
                "accounts:update",
                json!({
                    "idToken": created.id_token,
                    "displayName": display_name,
                    "returnSecureToken": false,
                }),
            )
            .await?;

        tracing::info!(user_id = %created.local_id, "Firebase account created");
        Ok(created.local_id)
    }

    async fn verify_token(&self, token: &str) -> Result<String, IdentityError> {
        let claims = self.verify_id_token(token).await?;
        Ok(claims.sub)
    }
}

#[derive(Debug, Deserialize)]
struct Jwks {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    alg: Option<String>,
    n: String,
    e: String,
    #[serde(rename = "use")]
    use_: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirebaseIdTokenClaims {
    sub: String,
    iat: Option<u64>,
    auth_time: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ToolkitErrorBody {
    error: ToolkitError,
}

#[derive(Debug, Deserialize)]
struct ToolkitError {
    message: String,
}

/// Keep RSA signing keys with a usable kid.
fn usable_keys(jwks: Jwks) -> HashMap<String, Arc<DecodingKey>> {
    let mut keys_by_kid = HashMap::new();

    for jwk in jwks.keys {
        if jwk.kty != "RSA" || jwk.kid.trim().is_empty() {
            continue;
        }
        if jwk.alg.as_deref().is_some_and(|alg| alg != "RS256") {
            continue;
        }
        if jwk.use_.as_deref().is_some_and(|use_| use_ != "sig") {
            continue;
        }

        match DecodingKey::from_rsa_components(&jwk.n, &jwk.e) {
            Ok(key) => {
                keys_by_kid.insert(jwk.kid, Arc::new(key));
            }
            Err(e) => {
                tracing::warn!(error = %e, kid = %jwk.kid, "Skipping invalid RSA JWKS key");
            }
        }
    }

    keys_by_kid
}

/// Identity Toolkit error codes look like `WEAK_PASSWORD : Password should be ...`.
fn describe_toolkit_error(code: &str) -> String {
    let key = code.split(':').next().unwrap_or(code).trim();
    match key {
        "EMAIL_EXISTS" => "Email is already registered".to_string(),
        "INVALID_EMAIL" => "Email address is invalid".to_string(),
        "WEAK_PASSWORD" => "Password is too weak".to_string(),
        "OPERATION_NOT_ALLOWED" => "Password sign-up is disabled".to_string(),
        _ => format!("Account creation rejected: {key}"),
    }
}

fn validate_not_in_future(claim: &str, value: Option<u64>) -> Result<(), IdentityError> {
    let Some(value) = value else {
        return Err(IdentityError::InvalidToken(format!("missing {claim} claim")));
    };

    if value > now_unix_secs() + CLOCK_SKEW_SECS {
        return Err(IdentityError::InvalidToken(format!(
            "{claim} claim is in the future"
        )));
    }

    Ok(())
}

fn cache_ttl_from_headers(headers: &reqwest::header::HeaderMap, fallback: Duration) -> Duration {
    headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_cache_control_max_age)
        .map(Duration::from_secs)
        .unwrap_or(fallback)
}

fn parse_cache_control_max_age(value: &str) -> Option<u64> {
    value.split(',').find_map(|directive| {
        directive
            .trim()
            .strip_prefix("max-age=")
            .and_then(|raw| raw.trim_matches('"').parse::<u64>().ok())
    })
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cache_control_max_age_valid() {
        assert_eq!(
            parse_cache_control_max_age("public, max-age=19302, must-revalidate, no-transform"),
            Some(19302)
        );
        assert_eq!(parse_cache_control_max_age("max-age=60"), Some(60));
        assert_eq!(parse_cache_control_max_age("max-age=\"120\""), Some(120));
    }

    #[test]
    fn parse_cache_control_max_age_invalid() {
        assert_eq!(parse_cache_control_max_age("public, immutable"), None);
        assert_eq!(parse_cache_control_max_age("max-age=abc"), None);
        assert_eq!(parse_cache_control_max_age(""), None);
    }

    #[test]
    fn toolkit_errors_are_humanized() {
        assert_eq!(
            describe_toolkit_error("EMAIL_EXISTS"),
            "Email is already registered"
        );
        assert_eq!(
            describe_toolkit_error("WEAK_PASSWORD : Password should be at least 6 characters"),
            "Password is too weak"
        );
        assert_eq!(
            describe_toolkit_error("TOO_MANY_ATTEMPTS_TRY_LATER"),
            "Account creation rejected: TOO_MANY_ATTEMPTS_TRY_LATER"
        );
    }

    #[test]
    fn usable_keys_skips_foreign_entries() {
        let jwks: Jwks = serde_json::from_value(json!({
            "keys": [
                {"kid": "ec", "kty": "EC", "n": "AQAB", "e": "AQAB"},
                {"kid": "enc", "kty": "RSA", "use": "enc", "n": "AQAB", "e": "AQAB"},
                {"kid": "hs", "kty": "RSA", "alg": "HS256", "n": "AQAB", "e": "AQAB"},
                {"kid": " ", "kty": "RSA", "n": "AQAB", "e": "AQAB"},
                {"kid": "good", "kty": "RSA", "alg": "RS256", "use": "sig", "n": "AQAB", "e": "AQAB"}
            ]
        }))
        .unwrap();

        let keys = usable_keys(jwks);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains_key("good"));
    }

    #[test]
    fn future_claims_are_rejected() {
        assert!(validate_not_in_future("iat", Some(now_unix_secs())).is_ok());
        assert!(validate_not_in_future("iat", None).is_err());
        assert!(validate_not_in_future("iat", Some(now_unix_secs() + 3600)).is_err());
    }
}
