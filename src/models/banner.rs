// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Advertising banner and click-event models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tags that make a banner match every category.
/// "todos" is the spelling used by banners created before the API existed.
pub const ALL_CATEGORIES_TAGS: [&str; 2] = ["all", "todos"];

/// Banner managed outside this service (read-only here).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub city: Option<String>,
    /// Slot on the page (e.g. "top", "sidebar")
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "rubros", default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

impl Banner {
    /// Active and inside its inclusive date window.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => self.active && start <= now && now <= end,
            _ => false,
        }
    }

    pub fn matches_city(&self, city: Option<&str>) -> bool {
        city.map_or(true, |wanted| self.city.as_deref() == Some(wanted))
    }

    pub fn matches_position(&self, position: Option<&str>) -> bool {
        position.map_or(true, |wanted| self.position.as_deref() == Some(wanted))
    }

    /// Untagged banners only match requests that name no category.
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        let Some(category) = category else {
            return true;
        };
        self.categories
            .iter()
            .any(|tag| tag == category || ALL_CATEGORIES_TAGS.contains(&tag.as_str()))
    }
}

/// Append-only record of a banner click.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub banner_id: String,
    pub city: String,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 18, 30, 0).unwrap()
    }

    fn banner(tags: &[&str]) -> Banner {
        Banner {
            id: "b1".into(),
            active: true,
            start_date: Some(now() - Duration::days(1)),
            end_date: Some(now() + Duration::days(1)),
            city: Some("Rosario".into()),
            position: Some("top".into()),
            categories: tags.iter().map(|t| t.to_string()).collect(),
            title: None,
            image_url: None,
            link_url: None,
        }
    }

    #[test]
    fn test_window_is_inclusive() {
        let mut b = banner(&[]);
        b.start_date = Some(now());
        b.end_date = Some(now());
        assert!(b.is_live(now()));
        assert!(!b.is_live(now() + Duration::seconds(1)));
        assert!(!b.is_live(now() - Duration::seconds(1)));
    }

    #[test]
    fn test_inactive_or_undated_is_not_live() {
        let mut b = banner(&[]);
        b.active = false;
        assert!(!b.is_live(now()));

        let mut b = banner(&[]);
        b.end_date = None;
        assert!(!b.is_live(now()));
    }

    #[test]
    fn test_category_matching() {
        assert!(banner(&["plomeria"]).matches_category(Some("plomeria")));
        assert!(!banner(&["gas"]).matches_category(Some("plomeria")));
        assert!(banner(&["all"]).matches_category(Some("plomeria")));
        assert!(banner(&["todos"]).matches_category(Some("plomeria")));
        assert!(!banner(&[]).matches_category(Some("plomeria")));
        assert!(banner(&[]).matches_category(None));
    }

    #[test]
    fn test_city_and_position_filters() {
        let b = banner(&[]);
        assert!(b.matches_city(None));
        assert!(b.matches_city(Some("Rosario")));
        assert!(!b.matches_city(Some("Córdoba")));
        assert!(b.matches_position(Some("top")));
        assert!(!b.matches_position(Some("footer")));
    }
}
