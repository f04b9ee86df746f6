// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ranking score and featured-promotion eligibility.
//!
//! Everything here is pure and deterministic for a given `now`. Search
//! ordering, quote gating and admin counts all go through
//! [`is_featured_active`], so a promotion expires at the same instant
//! everywhere.

use crate::models::Professional;
use crate::time_utils::whole_days_since;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

const RATING_WEIGHT: f64 = 5.0;
const JOB_WEIGHT: f64 = 2.0;
const RECENT_ACTIVITY_DAYS: i64 = 7;
const RECENT_ACTIVITY_BONUS: f64 = 3.0;
const LAPSED_ACTIVITY_DAYS: i64 = 15;
const LAPSED_ACTIVITY_BONUS: f64 = 2.0;
const COMPLETE_PROFILE_BONUS: f64 = 5.0;
/// Large enough that any featured professional outranks every other one.
pub const FEATURED_BONUS: f64 = 1000.0;

/// Score of one professional at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankScore {
    pub score: f64,
    pub featured_active: bool,
}

/// Whether a paid promotion covers `now`.
///
/// The window is open at its end: at `featured_until == now` the promotion
/// has already expired.
pub fn is_featured_active(professional: &Professional, now: DateTime<Utc>) -> bool {
    professional.is_featured
        && professional
            .featured_until
            .is_some_and(|until| until > now)
}

/// Compute the ranking score for `professional` at `now`.
pub fn score(professional: &Professional, now: DateTime<Utc>) -> RankScore {
    let mut score = professional.rating * RATING_WEIGHT
        + f64::from(professional.jobs_completed) * JOB_WEIGHT;

    if let Some(last_active) = professional.last_active {
        let days = whole_days_since(last_active, now);
        if days <= RECENT_ACTIVITY_DAYS {
            score += RECENT_ACTIVITY_BONUS;
        } else if days <= LAPSED_ACTIVITY_DAYS {
            score += LAPSED_ACTIVITY_BONUS;
        }
    }

    if professional.profile_completed {
        score += COMPLETE_PROFILE_BONUS;
    }

    let featured_active = is_featured_active(professional, now);
    if featured_active {
        score += FEATURED_BONUS;
    }

    RankScore {
        score,
        featured_active,
    }
}

/// A professional together with its score at search time.
#[derive(Debug, Clone)]
pub struct RankedProfessional {
    pub professional: Professional,
    pub rank: RankScore,
}

/// Score and order candidates: featured-active first, then by descending score.
///
/// The sort is stable, so equal entries keep their scan order.
pub fn rank(candidates: Vec<Professional>, now: DateTime<Utc>) -> Vec<RankedProfessional> {
    let mut ranked: Vec<RankedProfessional> = candidates
        .into_iter()
        .map(|professional| RankedProfessional {
            rank: score(&professional, now),
            professional,
        })
        .collect();

    ranked.sort_by(|a, b| compare(&a.rank, &b.rank));
    ranked
}

fn compare(a: &RankScore, b: &RankScore) -> Ordering {
    b.featured_active
        .cmp(&a.featured_active)
        .then_with(|| b.score.total_cmp(&a.score))
}
