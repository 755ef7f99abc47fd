// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bike catalog routes (purchase listing, rental availability, detail).

use crate::error::Result;
use crate::models::{Bike, LocationId};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Bike routes. Public, read-only.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/bikes/purchase", get(list_purchase))
        .route("/api/bikes/rental", get(list_rental_by_code))
        .route("/api/bikes/rental/{location_id}", get(list_rental))
        .route("/api/bikes/{id}", get(get_bike))
}

#[derive(Deserialize, Validate)]
struct PurchaseQuery {
    /// Category filter (case-insensitive exact match)
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    bike_type: Option<String>,
}

/// List bikes for purchase, optionally filtered by type.
async fn list_purchase(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PurchaseQuery>,
) -> Result<Json<Vec<Bike>>> {
    params.validate()?;

    tracing::debug!(bike_type = ?params.bike_type, "Listing bikes for purchase");

    let bikes = state
        .catalog
        .purchase_bikes(params.bike_type.as_deref())
        .await?;
    Ok(Json(bikes))
}

#[derive(Deserialize, Validate)]
struct LocationPath {
    #[validate(length(min = 1, max = 100))]
    location_id: String,
}

/// List bikes with stock at a location (canonical location id).
///
/// Unknown ids return an empty list.
async fn list_rental(
    State(state): State<Arc<AppState>>,
    Path(params): Path<LocationPath>,
) -> Result<Json<Vec<Bike>>> {
    params.validate()?;

    let location_id = LocationId::new(params.location_id);
    let bikes = state.catalog.rental_bikes(&location_id).await?;
    Ok(Json(bikes))
}

#[derive(Deserialize, Validate)]
struct RentalCodeQuery {
    #[validate(length(min = 1, max = 20))]
    code: String,
}

/// List bikes with stock at the location identified by its short code.
async fn list_rental_by_code(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RentalCodeQuery>,
) -> Result<Json<Vec<Bike>>> {
    params.validate()?;

    let bikes = state.catalog.rental_bikes_by_code(&params.code).await?;
    Ok(Json(bikes))
}

#[derive(Deserialize, Validate)]
struct BikePath {
    #[validate(length(min = 1, max = 100))]
    id: String,
}

/// Get a single bike.
async fn get_bike(
    State(state): State<Arc<AppState>>,
    Path(params): Path<BikePath>,
) -> Result<Json<Bike>> {
    params.validate()?;

    let bike = state.catalog.bike(&params.id).await?;
    Ok(Json(bike))
}
