// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bike model for storage and API.

use crate::models::LocationId;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Bike record stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Bike {
    /// Bike ID (also used as document ID)
    pub id: String,
    pub name: String,
    /// Category tag (Mountain, Road, Hybrid, ...)
    #[serde(rename = "type")]
    pub bike_type: String,
    #[serde(default)]
    pub description: String,
    /// Image URL or asset path
    #[serde(default)]
    pub image: String,
    /// Purchase price
    pub price: f64,
    /// Rental price per day
    pub rental_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rental_inventory: Vec<InventoryEntry>,
}

/// Stock of a bike at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InventoryEntry {
    pub location: LocationId,
    pub stock: u32,
}

impl Bike {
    /// Stock held at `location`.
    ///
    /// Duplicate entries for the same location resolve to the largest stock.
    /// A missing entry is zero stock.
    pub fn stock_at(&self, location: &LocationId) -> u32 {
        self.rental_inventory
            .iter()
            .filter(|entry| &entry.location == location)
            .map(|entry| entry.stock)
            .max()
            .unwrap_or(0)
    }

    /// Whether the bike can be rented at `location`.
    pub fn is_available_at(&self, location: &LocationId) -> bool {
        self.stock_at(location) > 0
    }

    /// Case-insensitive exact match on the category tag.
    pub fn has_type(&self, bike_type: &str) -> bool {
        self.bike_type.to_lowercase() == bike_type.trim().to_lowercase()
    }
}
