// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and arithmetic.

use chrono::{DateTime, SecondsFormat, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whole days elapsed from `earlier` to `now`, rounded toward negative infinity.
///
/// A timestamp in the future yields a negative count.
pub fn whole_days_since(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - earlier).num_seconds().div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_whole_days_floors() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(whole_days_since(now, now), 0);
        assert_eq!(whole_days_since(now - Duration::hours(23), now), 0);
        assert_eq!(whole_days_since(now - Duration::hours(24), now), 1);
        assert_eq!(whole_days_since(now - Duration::days(8) - Duration::minutes(1), now), 8);
        assert_eq!(whole_days_since(now + Duration::hours(1), now), -1);
    }

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2025-01-02T03:04:05Z");
    }
}
