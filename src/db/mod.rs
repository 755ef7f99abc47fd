//! Catalog store (Firestore or in-memory snapshot).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::{CatalogSnapshot, MemoryCatalog};

use crate::error::AppError;
use crate::models::{Bike, Location, LocationId, Trail};
use std::sync::Arc;

/// Collection names as constants.
pub mod collections {
    pub const BIKES: &str = "bikes";
    pub const LOCATIONS: &str = "locations";
    /// Trail routes (keyed to a location)
    pub const ROUTES: &str = "routes";
}

/// Read handle on the catalog, whichever backend holds it.
#[derive(Clone)]
pub enum CatalogDb {
    Firestore(FirestoreDb),
    Memory(Arc<MemoryCatalog>),
}

impl CatalogDb {
    pub fn memory(catalog: MemoryCatalog) -> Self {
        CatalogDb::Memory(Arc::new(catalog))
    }

    /// Offline store: every call fails with a database error.
    pub fn offline() -> Self {
        CatalogDb::Firestore(FirestoreDb::new_mock())
    }

    pub async fn list_bikes(&self) -> Result<Vec<Bike>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.list_bikes().await,
            CatalogDb::Memory(catalog) => Ok(catalog.bikes().to_vec()),
        }
    }

    pub async fn get_bike(&self, bike_id: &str) -> Result<Option<Bike>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.get_bike(bike_id).await,
            CatalogDb::Memory(catalog) => Ok(catalog.bike(bike_id).cloned()),
        }
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.list_locations().await,
            CatalogDb::Memory(catalog) => Ok(catalog.locations().to_vec()),
        }
    }

    pub async fn get_location(&self, location_id: &LocationId) -> Result<Option<Location>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.get_location(location_id).await,
            CatalogDb::Memory(catalog) => Ok(catalog.location(location_id).cloned()),
        }
    }

    pub async fn list_routes_for_location(
        &self,
        location_id: &LocationId,
    ) -> Result<Vec<Trail>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.list_routes_for_location(location_id).await,
            CatalogDb::Memory(catalog) => Ok(catalog.routes_for_location(location_id)),
        }
    }

    pub async fn get_route(&self, route_id: &str) -> Result<Option<Trail>, AppError> {
        match self {
            CatalogDb::Firestore(db) => db.get_route(route_id).await,
            CatalogDb::Memory(catalog) => Ok(catalog.route(route_id).cloned()),
        }
    }
}
