// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use bike_catalog::config::Config;
use bike_catalog::db::{CatalogDb, CatalogSnapshot, FirestoreDb, MemoryCatalog};
use bike_catalog::models::{Bike, InventoryEntry, Location, LocationId};
use bike_catalog::routes::create_router;
use bike_catalog::services::CatalogService;
use bike_catalog::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

#[allow(dead_code)]
pub fn location(id: &str, code: &str) -> Location {
    Location {
        id: LocationId::new(id),
        name: format!("{} Shop", code),
        city: "Test City".to_string(),
        code: code.to_string(),
    }
}

#[allow(dead_code)]
pub fn bike(id: &str, bike_type: &str, inventory: &[(&str, u32)]) -> Bike {
    Bike {
        id: id.to_string(),
        name: format!("Bike {}", id),
        bike_type: bike_type.to_string(),
        description: String::new(),
        image: String::new(),
        price: 999.0,
        rental_price: 30.0,
        features: vec!["Disc brakes".to_string()],
        rental_inventory: inventory
            .iter()
            .map(|(loc, stock)| InventoryEntry {
                location: LocationId::new(*loc),
                stock: *stock,
            })
            .collect(),
    }
}

/// The two-bike scenario: `b1` has 3 at `loc1`, `b2` has 0 at `loc1`.
#[allow(dead_code)]
pub fn scenario_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        locations: vec![location("loc1", "NYC"), location("loc2", "SF")],
        bikes: vec![
            bike("b1", "Mountain", &[("loc1", 3)]),
            bike("b2", "road", &[("loc1", 0), ("loc2", 1)]),
        ],
        routes: vec![],
    }
}

/// Build an app over an in-memory catalog.
#[allow(dead_code)]
pub fn create_app_with(snapshot: CatalogSnapshot) -> (axum::Router, Arc<AppState>) {
    build_app(CatalogDb::memory(MemoryCatalog::new(snapshot)))
}

/// Build an app over the bundled `data/catalog.json`.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let catalog = MemoryCatalog::load_from_file("data/catalog.json")
        .expect("Failed to load data/catalog.json");
    build_app(CatalogDb::memory(catalog))
}

/// Build an app whose store is unreachable.
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    build_app(CatalogDb::offline())
}

fn build_app(db: CatalogDb) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        catalog: CatalogService::new(db),
    });

    (create_router(state.clone()), state)
}

/// GET `uri` and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    // Rejections produced by axum itself are plain text
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}
