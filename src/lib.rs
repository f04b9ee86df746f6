// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pro-Marketplace: directory of service professionals
//!
//! This crate provides the backend API for listing and ranking
//! professionals, letting featured professionals issue quotes, rotating
//! advertising banners and reporting platform counts to admins.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use services::{
    AdminService, AuthGuard, BannerService, IdentityService, ListingService, ProfileService,
    QuoteService,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub listing: ListingService,
    pub profiles: ProfileService,
    pub quotes: QuoteService,
    pub banners: BannerService,
    pub admin: AdminService,
}

impl AppState {
    /// Wire every service to the same store and identity provider.
    pub fn new(
        config: Config,
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityService>,
    ) -> Self {
        let guard = AuthGuard::new(identity.clone(), store.clone());

        Self {
            listing: ListingService::new(store.clone()),
            profiles: ProfileService::new(store.clone(), identity, guard.clone()),
            quotes: QuoteService::new(store.clone(), guard.clone()),
            banners: BannerService::new(store.clone(), config.default_click_city.clone()),
            admin: AdminService::new(store, guard),
            config,
        }
    }
}
