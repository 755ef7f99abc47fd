// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bike Catalog API Server
//!
//! Serves the storefront's bikes, rental locations and trail routes, and
//! resolves rental availability per location.

use bike_catalog::{
    config::Config,
    db::{CatalogDb, FirestoreDb, MemoryCatalog},
    services::CatalogService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Bike Catalog API");

    let db = match &config.catalog_seed_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading in-memory catalog");
            CatalogDb::memory(MemoryCatalog::load_from_file(path)?)
        }
        None => CatalogDb::Firestore(FirestoreDb::new(&config.gcp_project_id).await?),
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog: CatalogService::new(db),
    });

    // Build router
    let app = bike_catalog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bike_catalog=debug,info")),
        )
        .with(format)
        .init();
}
