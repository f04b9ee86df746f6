// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Professional profile model and partial-update handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Firestore field names touched by profile updates.
pub mod fields {
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
    pub const PHOTO_URL: &str = "photoUrl";
    pub const CATEGORIES: &str = "rubros";
    pub const ZONES: &str = "zonas";
    pub const LAST_ACTIVE: &str = "lastActive";
    pub const PROFILE_COMPLETED: &str = "profileCompleted";
}

/// Professional profile stored in Firestore.
///
/// The document ID is the owner's identity user ID for profiles created
/// through registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    /// Document ID (populated on read, never written as a field)
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: String,
    /// Identity-service user ID of the owner (immutable; empty on malformed documents)
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo_url: String,
    /// Service categories ("rubros")
    #[serde(rename = "rubros", default)]
    pub categories: Vec<String>,
    /// Service coverage zones ("zonas")
    #[serde(rename = "zonas", default)]
    pub zones: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub jobs_completed: u32,
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub last_active: Option<DateTime<Utc>>,
    /// Set by the payment process; only meaningful together with `featured_until`
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub featured_until: Option<DateTime<Utc>>,
    /// Derived from the presentation fields on every update
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Professional {
    /// Build the initial document for a freshly registered account.
    pub fn new_registration(
        user_id: &str,
        email: &str,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: user_id.to_string(),
            user_id: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            photo_url: String::new(),
            categories: Vec::new(),
            zones: Vec::new(),
            rating: 0.0,
            reviews_count: 0,
            jobs_completed: 0,
            last_active: None,
            is_featured: false,
            featured_until: None,
            profile_completed: false,
            blocked: false,
            created_at: Some(now),
        }
    }

    /// Whether the presentation fields are filled in enough to be listed.
    pub fn has_complete_profile(&self) -> bool {
        !self.name.is_empty()
            && !self.phone.is_empty()
            && !self.photo_url.is_empty()
            && !self.categories.is_empty()
            && !self.zones.is_empty()
    }

    /// Whether this profile may appear in search results at all.
    pub fn is_listable(&self) -> bool {
        self.profile_completed && !self.blocked && !self.photo_url.is_empty()
    }

    pub fn offers(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn serves(&self, zone: &str) -> bool {
        self.zones.iter().any(|z| z == zone)
    }

    /// Merge a patch into this profile.
    ///
    /// Stamps `last_active` and recomputes `profile_completed` from the merged
    /// state. Returns the field paths that must be written back.
    pub fn apply_patch(&mut self, patch: &ProfessionalPatch, now: DateTime<Utc>) -> Vec<&'static str> {
        let mut written = Vec::new();

        if let Some(name) = &patch.name {
            self.name = name.clone();
            written.push(fields::NAME);
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
            written.push(fields::PHONE);
        }
        if let Some(photo_url) = &patch.photo_url {
            self.photo_url = photo_url.clone();
            written.push(fields::PHOTO_URL);
        }
        if let Some(categories) = &patch.categories {
            self.categories = categories.clone();
            written.push(fields::CATEGORIES);
        }
        if let Some(zones) = &patch.zones {
            self.zones = zones.clone();
            written.push(fields::ZONES);
        }

        self.last_active = Some(now);
        self.profile_completed = self.has_complete_profile();
        written.push(fields::LAST_ACTIVE);
        written.push(fields::PROFILE_COMPLETED);

        written
    }
}

/// Caller-supplied profile changes.
///
/// Only presentation fields are accepted. Ownership, reputation, promotion,
/// moderation and derived fields are rejected as unknown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfessionalPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    #[serde(rename = "rubros")]
    pub categories: Option<Vec<String>>,
    #[serde(rename = "zonas")]
    pub zones: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn registered() -> Professional {
        Professional::new_registration("uid-1", "ana@example.com", "Ana", "341555000", now())
    }

    #[test]
    fn test_registration_defaults() {
        let pro = registered();
        assert_eq!(pro.id, "uid-1");
        assert_eq!(pro.user_id, "uid-1");
        assert!(!pro.profile_completed);
        assert!(!pro.is_featured);
        assert!(!pro.blocked);
        assert_eq!(pro.created_at, Some(now()));
        assert!(pro.last_active.is_none());
    }

    #[test]
    fn test_patch_completes_profile() {
        let mut pro = registered();
        let patch = ProfessionalPatch {
            photo_url: Some("https://cdn.example.com/ana.jpg".into()),
            categories: Some(vec!["plomeria".into()]),
            zones: Some(vec!["centro".into()]),
            ..Default::default()
        };

        let written = pro.apply_patch(&patch, now());

        assert!(pro.profile_completed);
        assert_eq!(pro.last_active, Some(now()));
        assert!(written.contains(&fields::PHOTO_URL));
        assert!(written.contains(&fields::PROFILE_COMPLETED));
        assert!(!written.contains(&fields::NAME));
    }

    #[test]
    fn test_patch_can_uncomplete_profile() {
        let mut pro = registered();
        pro.photo_url = "https://cdn.example.com/ana.jpg".into();
        pro.categories = vec!["plomeria".into()];
        pro.zones = vec!["centro".into()];
        pro.profile_completed = true;

        let patch = ProfessionalPatch {
            zones: Some(vec![]),
            ..Default::default()
        };
        pro.apply_patch(&patch, now());

        assert!(!pro.profile_completed);
    }

    #[test]
    fn test_empty_patch_only_touches_activity() {
        let mut pro = registered();
        let written = pro.apply_patch(&ProfessionalPatch::default(), now());
        assert_eq!(written, vec![fields::LAST_ACTIVE, fields::PROFILE_COMPLETED]);
        assert_eq!(pro.name, "Ana");
    }

    #[test]
    fn test_patch_rejects_server_managed_fields() {
        for body in [
            r#"{"profileCompleted": true}"#,
            r#"{"userId": "someone-else"}"#,
            r#"{"createdAt": "2020-01-01T00:00:00Z"}"#,
            r#"{"isFeatured": true}"#,
            r#"{"blocked": false}"#,
        ] {
            let parsed: Result<ProfessionalPatch, _> = serde_json::from_str(body);
            assert!(parsed.is_err(), "patch should be rejected: {body}");
        }
    }

    #[test]
    fn test_patch_uses_wire_names() {
        let patch: ProfessionalPatch =
            serde_json::from_str(r#"{"photoUrl": "p.jpg", "rubros": ["gas"], "zonas": ["norte"]}"#)
                .unwrap();
        assert_eq!(patch.photo_url.as_deref(), Some("p.jpg"));
        assert_eq!(patch.categories, Some(vec!["gas".to_string()]));
        assert_eq!(patch.zones, Some(vec!["norte".to_string()]));
    }

    #[test]
    fn test_listable_requires_photo_and_unblocked() {
        let mut pro = registered();
        pro.profile_completed = true;
        assert!(!pro.is_listable(), "missing photo");

        pro.photo_url = "p.jpg".into();
        assert!(pro.is_listable());

        pro.blocked = true;
        assert!(!pro.is_listable());
    }

    #[test]
    fn test_blank_text_counts_as_present() {
        let mut pro = registered();
        pro.name = " ".into();
        pro.photo_url = " ".into();
        pro.categories = vec!["plomeria".into()];
        pro.zones = vec!["centro".into()];
        assert!(pro.has_complete_profile());

        pro.profile_completed = true;
        assert!(pro.is_listable());

        pro.photo_url = String::new();
        assert!(!pro.has_complete_profile());
        assert!(!pro.is_listable());
    }

    #[test]
    fn test_document_without_owner_still_loads() {
        let pro: Professional =
            serde_json::from_str(r#"{"name": "Sin dueño", "rubros": ["gas"], "zonas": ["centro"]}"#)
                .unwrap();
        assert!(pro.user_id.is_empty());
        assert_eq!(pro.name, "Sin dueño");
    }
}
