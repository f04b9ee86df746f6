// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Platform-wide counters for the admin dashboard.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Aggregate counts computed on demand from the collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_professionals: u64,
    /// Professionals whose promotion window covers the request time
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub featured_active_count: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_quotes: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_clicks: u64,
}
