// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quote model and request-field parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote issued by a featured professional to a client.
///
/// Quotes are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: String,
    pub professional_id: String,
    pub client_name: String,
    pub client_phone: String,
    /// Line items, in the order the professional wrote them
    pub items: Vec<String>,
    pub total: f64,
    pub status: QuoteStatus,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Quote lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Created,
}

/// Line items as sent by clients: either a list or one newline-separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuoteItems {
    List(Vec<String>),
    Text(String),
}

impl QuoteItems {
    /// Normalize into an ordered list of items.
    ///
    /// Text input is split on newlines and blank lines are dropped.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            QuoteItems::List(items) => items,
            QuoteItems::Text(text) => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Quote total as sent by clients: a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuoteTotal {
    Number(f64),
    Text(String),
}

impl QuoteTotal {
    /// Parse into a finite, non-negative amount.
    pub fn parse(&self) -> Result<f64, String> {
        let amount = match self {
            QuoteTotal::Number(value) => *value,
            QuoteTotal::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("total is not a decimal number: {raw:?}"))?,
        };

        if !amount.is_finite() {
            return Err("total must be a finite number".to_string());
        }
        if amount < 0.0 {
            return Err("total must not be negative".to_string());
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_items_drop_blank_lines() {
        let items = QuoteItems::Text("a\nb\n\nc".to_string());
        assert_eq!(items.into_lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_text_items_drop_whitespace_only_lines() {
        let items = QuoteItems::Text("Cambio de cuerito\r\n   \n\tMano de obra".to_string());
        assert_eq!(items.into_lines(), vec!["Cambio de cuerito", "\tMano de obra"]);
    }

    #[test]
    fn test_list_items_kept_in_order() {
        let items: QuoteItems = serde_json::from_str(r#"["z", "a"]"#).unwrap();
        assert_eq!(items.into_lines(), vec!["z", "a"]);
    }

    #[test]
    fn test_total_accepts_number_or_string() {
        let number: QuoteTotal = serde_json::from_str("1500.5").unwrap();
        assert_eq!(number.parse(), Ok(1500.5));

        let text: QuoteTotal = serde_json::from_str(r#"" 2300.75 ""#).unwrap();
        assert_eq!(text.parse(), Ok(2300.75));

        let zero: QuoteTotal = serde_json::from_str("0").unwrap();
        assert_eq!(zero.parse(), Ok(0.0));
    }

    #[test]
    fn test_total_rejects_negative_and_garbage() {
        assert!(QuoteTotal::Number(-1.0).parse().is_err());
        assert!(QuoteTotal::Text("-0.01".into()).parse().is_err());
        assert!(QuoteTotal::Text("mil pesos".into()).parse().is_err());
        assert!(QuoteTotal::Text("NaN".into()).parse().is_err());
        assert!(QuoteTotal::Text("inf".into()).parse().is_err());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Created).unwrap(),
            r#""created""#
        );
    }
}
