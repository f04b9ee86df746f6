// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod admin;
pub mod banners;
pub mod firebase_auth;
pub mod guard;
pub mod identity;
pub mod listing;
pub mod profile;
pub mod quotes;
pub mod ranking;

pub use admin::AdminService;
pub use banners::{BannerRequest, BannerService};
pub use firebase_auth::FirebaseAuth;
pub use guard::AuthGuard;
pub use identity::{IdentityError, IdentityService};
pub use listing::{ListingService, SearchRequest};
pub use profile::{ProfileService, Registration};
pub use quotes::{QuoteRequest, QuoteService};
