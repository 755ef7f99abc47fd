// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory catalog loaded from a JSON snapshot.
//!
//! Used for local development without Firestore and as the fixture store
//! for integration tests. Immutable once loaded.

use crate::models::{Bike, Location, LocationId, Trail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk snapshot layout, one array per collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub bikes: Vec<Bike>,
    #[serde(default)]
    pub routes: Vec<Trail>,
}

/// Read-only catalog held in memory. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    snapshot: CatalogSnapshot,
}

impl MemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| SnapshotError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a snapshot from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, SnapshotError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json_data)
            .map_err(|e| SnapshotError::ParseError(e.to_string()))?;

        let known: std::collections::HashSet<&LocationId> =
            snapshot.locations.iter().map(|l| &l.id).collect();
        for bike in &snapshot.bikes {
            for entry in &bike.rental_inventory {
                if !known.contains(&entry.location) {
                    tracing::warn!(
                        bike_id = %bike.id,
                        location = %entry.location,
                        "Inventory entry references unknown location"
                    );
                }
            }
        }

        tracing::debug!(
            locations = snapshot.locations.len(),
            bikes = snapshot.bikes.len(),
            routes = snapshot.routes.len(),
            "Catalog snapshot loaded"
        );

        Ok(Self::new(snapshot))
    }

    pub fn bikes(&self) -> &[Bike] {
        &self.snapshot.bikes
    }

    pub fn bike(&self, bike_id: &str) -> Option<&Bike> {
        self.snapshot.bikes.iter().find(|b| b.id == bike_id)
    }

    pub fn locations(&self) -> &[Location] {
        &self.snapshot.locations
    }

    pub fn location(&self, location_id: &LocationId) -> Option<&Location> {
        self.snapshot.locations.iter().find(|l| &l.id == location_id)
    }

    pub fn routes_for_location(&self, location_id: &LocationId) -> Vec<Trail> {
        self.snapshot
            .routes
            .iter()
            .filter(|r| &r.location == location_id)
            .cloned()
            .collect()
    }

    pub fn route(&self, route_id: &str) -> Option<&Trail> {
        self.snapshot.routes.iter().find(|r| r.id == route_id)
    }
}

/// Errors from loading a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "locations": [
            {"id": "loc1", "name": "Downtown", "city": "New York", "code": "NYC"}
        ],
        "bikes": [
            {"id": "b1", "name": "Trail Blazer", "type": "Mountain", "price": 899.0,
             "rentalPrice": 35.0, "rentalInventory": [{"location": "loc1", "stock": 3}]}
        ],
        "routes": [
            {"id": "r1", "name": "River Loop", "location": "loc1", "distance": 12.5,
             "estimatedTime": "1 hour", "difficulty": "easy"}
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let catalog = MemoryCatalog::load_from_json(SNAPSHOT).unwrap();
        assert_eq!(catalog.locations().len(), 1);
        assert_eq!(catalog.bikes().len(), 1);
        assert!(catalog.bike("b1").is_some());
        assert!(catalog.bike("missing").is_none());
        assert_eq!(catalog.routes_for_location(&LocationId::new("loc1")).len(), 1);
        assert!(catalog.route("r1").is_some());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let err = MemoryCatalog::load_from_json("{\"bikes\": 5}").unwrap_err();
        assert!(matches!(err, SnapshotError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MemoryCatalog::load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SnapshotError::IoError(_)));
    }
}
