// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed catalog reads.
//!
//! Provides read operations for:
//! - Bikes (with embedded rental inventory)
//! - Locations (rental shops)
//! - Routes (trails, keyed to a location)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Bike, Location, LocationId, Trail};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Bike Operations ─────────────────────────────────────────

    /// List every bike in the catalog, ordered by document ID.
    pub async fn list_bikes(&self) -> Result<Vec<Bike>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::BIKES)
            .order_by([("id", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a bike by ID.
    pub async fn get_bike(&self, bike_id: &str) -> Result<Option<Bike>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::BIKES)
            .obj()
            .one(bike_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a bike (used to seed the emulator).
    pub async fn upsert_bike(&self, bike: &Bike) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::BIKES)
            .document_id(&bike.id)
            .object(bike)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Location Operations ─────────────────────────────────────

    /// List all locations, ordered by document ID.
    pub async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::LOCATIONS)
            .order_by([("id", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a location by its canonical ID.
    pub async fn get_location(&self, location_id: &LocationId) -> Result<Option<Location>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::LOCATIONS)
            .obj()
            .one(location_id.as_str())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a location (used to seed the emulator).
    pub async fn upsert_location(&self, location: &Location) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::LOCATIONS)
            .document_id(location.id.as_str())
            .object(location)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Route Operations ────────────────────────────────────────

    /// Get all routes starting from a location.
    pub async fn list_routes_for_location(
        &self,
        location_id: &LocationId,
    ) -> Result<Vec<Trail>, AppError> {
        let location = location_id.as_str().to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ROUTES)
            .filter(move |q| q.field("location").eq(location.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a route by ID.
    pub async fn get_route(&self, route_id: &str) -> Result<Option<Trail>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ROUTES)
            .obj()
            .one(route_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a route (used to seed the emulator).
    pub async fn upsert_route(&self, route: &Trail) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ROUTES)
            .document_id(&route.id)
            .object(route)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
