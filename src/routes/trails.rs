// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail route listing (`/api/routes/...`).

use crate::error::Result;
use crate::models::{LocationId, Trail};
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
        .route("/api/routes/location/{location_id}", get(list_for_location))
        .route("/api/routes/{id}", get(get_route))
}

#[derive(Deserialize, Validate)]
struct LocationPath {
    #[validate(length(min = 1, max = 100))]
    location_id: String,
}

/// Routes starting at a location. Unknown locations return an empty list.
async fn list_for_location(
    State(state): State<Arc<AppState>>,
    Path(params): Path<LocationPath>,
) -> Result<Json<Vec<Trail>>> {
    params.validate()?;

    let location_id = LocationId::new(params.location_id);
    let routes = state.catalog.routes_for_location(&location_id).await?;

    tracing::debug!(location = %location_id, count = routes.len(), "Listed routes");
    Ok(Json(routes))
}

#[derive(Deserialize, Validate)]
struct RoutePath {
    #[validate(length(min = 1, max = 100))]
    id: String,
}

async fn get_route(
    State(state): State<Arc<AppState>>,
    Path(params): Path<RoutePath>,
) -> Result<Json<Trail>> {
    params.validate()?;

    Ok(Json(state.catalog.route(&params.id).await?))
}
