// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pro-Marketplace API Server
//!
//! Lists and ranks service professionals, lets featured professionals issue
//! quotes and rotates advertising banners.

use pro_marketplace::{
    config::Config,
    db::{DocumentStore, FirestoreDb},
    services::{FirebaseAuth, IdentityService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        project = %config.gcp_project_id,
        "Starting Pro-Marketplace API"
    );

    // Document store connection, opened once and shared by every request
    let store: Arc<dyn DocumentStore> = Arc::new(FirestoreDb::new(&config.gcp_project_id).await?);

    let identity: Arc<dyn IdentityService> = Arc::new(FirebaseAuth::new(&config)?);
    tracing::info!("Firebase Auth client initialized");

    let state = Arc::new(AppState::new(config.clone(), store, identity));

    // Build router
    let app = pro_marketplace::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pro_marketplace=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
