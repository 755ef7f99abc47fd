// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only catalog queries over the store.
//!
//! Every call reads the store fresh; nothing is cached between requests.

use crate::db::CatalogDb;
use crate::error::AppError;
use crate::models::{Bike, Location, LocationId, Trail};
use crate::services::availability;
use crate::services::locations::LocationDirectory;

/// Catalog query surface used by the HTTP handlers and the CLI.
#[derive(Clone)]
pub struct CatalogService {
    db: CatalogDb,
}

impl CatalogService {
    pub fn new(db: CatalogDb) -> Self {
        Self { db }
    }

    // ─── Bikes ───────────────────────────────────────────────────

    /// All bikes, optionally narrowed to one category.
    ///
    /// The type filter is a case-insensitive exact match; blank means none.
    pub async fn purchase_bikes(&self, bike_type: Option<&str>) -> Result<Vec<Bike>, AppError> {
        let bikes = self.db.list_bikes().await?;

        let filter = bike_type.map(str::trim).filter(|t| !t.is_empty());
        let Some(filter) = filter else {
            return Ok(bikes);
        };

        Ok(bikes.into_iter().filter(|b| b.has_type(filter)).collect())
    }

    /// Bikes with positive stock at a location.
    pub async fn rental_bikes(&self, location_id: &LocationId) -> Result<Vec<Bike>, AppError> {
        let bikes = self.db.list_bikes().await?;
        let total = bikes.len();
        let available = availability::available_at(bikes, location_id);

        tracing::debug!(
            location = %location_id,
            total,
            available = available.len(),
            "Resolved rental availability"
        );

        Ok(available)
    }

    /// Bikes with positive stock at the location carrying `code`.
    ///
    /// An unknown code yields an empty list, same as an unknown id.
    pub async fn rental_bikes_by_code(&self, code: &str) -> Result<Vec<Bike>, AppError> {
        let directory = self.directory().await?;

        match directory.id_for_code(code) {
            Some(location_id) => self.rental_bikes(location_id).await,
            None => {
                tracing::debug!(code, "Unknown location code");
                Ok(vec![])
            }
        }
    }

    pub async fn bike(&self, bike_id: &str) -> Result<Bike, AppError> {
        self.db
            .get_bike(bike_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bike {} not found", bike_id)))
    }

    // ─── Locations ───────────────────────────────────────────────

    pub async fn locations(&self) -> Result<Vec<Location>, AppError> {
        self.db.list_locations().await
    }

    pub async fn location(&self, location_id: &LocationId) -> Result<Location, AppError> {
        self.db
            .get_location(location_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", location_id)))
    }

    pub async fn location_by_code(&self, code: &str) -> Result<Location, AppError> {
        let locations = self.db.list_locations().await?;
        let directory = LocationDirectory::from_locations(&locations);

        let location_id = directory
            .id_for_code(code)
            .ok_or_else(|| AppError::NotFound(format!("Location code {} not found", code)))?;

        locations
            .into_iter()
            .find(|l| &l.id == location_id)
            .ok_or_else(|| AppError::NotFound(format!("Location code {} not found", code)))
    }

    /// Code <-> id table built from the current locations.
    pub async fn directory(&self) -> Result<LocationDirectory, AppError> {
        let locations = self.db.list_locations().await?;
        Ok(LocationDirectory::from_locations(&locations))
    }

    // ─── Routes ──────────────────────────────────────────────────

    pub async fn routes_for_location(
        &self,
        location_id: &LocationId,
    ) -> Result<Vec<Trail>, AppError> {
        self.db.list_routes_for_location(location_id).await
    }

    pub async fn route(&self, route_id: &str) -> Result<Trail, AppError> {
        self.db
            .get_route(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", route_id)))
    }
}
