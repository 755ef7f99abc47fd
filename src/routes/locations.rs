// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rental location routes.

use crate::error::Result;
use crate::models::{Location, LocationId};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/locations", get(list_locations))
        .route("/api/locations/code/{code}", get(get_location_by_code))
        .route("/api/locations/{id}", get(get_location))
}

async fn list_locations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Location>>> {
    Ok(Json(state.catalog.locations().await?))
}

#[derive(Deserialize, Validate)]
struct LocationPath {
    #[validate(length(min = 1, max = 100))]
    id: String,
}

async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(params): Path<LocationPath>,
) -> Result<Json<Location>> {
    params.validate()?;

    let location = state.catalog.location(&LocationId::new(params.id)).await?;
    Ok(Json(location))
}

#[derive(Deserialize, Validate)]
struct CodePath {
    #[validate(length(min = 1, max = 20))]
    code: String,
}

/// Resolve a short code to its location record.
async fn get_location_by_code(
    State(state): State<Arc<AppState>>,
    Path(params): Path<CodePath>,
) -> Result<Json<Location>> {
    params.validate()?;

    let location = state.catalog.location_by_code(&params.code).await?;
    Ok(Json(location))
}
