// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Inventory key audit for one location.
//!
//! Explains why availability for a location comes back empty: entries with
//! zero stock, entries that reference the location by its short code
//! instead of its id, and entries pointing at no known location at all.

use crate::models::{Bike, Location, LocationId};
use crate::services::availability;
use crate::services::locations::LocationDirectory;
use serde::Serialize;
use std::collections::HashSet;

/// How a bike's inventory relates to the audited location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum EntryStatus {
    /// Keyed by id with positive stock
    Ok { stock: u32 },
    /// Keyed by id, zero stock
    Zero,
    /// Referenced by short code instead of id; invisible to availability
    KeyedByCode { stock: u32 },
    /// No entry for this location
    NotStocked,
}

#[derive(Debug, Clone, Serialize)]
pub struct BikeAudit {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// Inventory entry whose location reference matches neither an id nor a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingEntry {
    pub bike_id: String,
    pub location: LocationId,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryAudit {
    pub location: Location,
    /// Code that resolves to this location; `None` when it cannot be
    /// reached by code (blank, or shared with an earlier location)
    pub code: Option<String>,
    pub bikes: Vec<BikeAudit>,
    /// What availability resolution returns for this location
    pub available: Vec<String>,
    pub dangling: Vec<DanglingEntry>,
}

impl InventoryAudit {
    pub fn keyed_by_code_count(&self) -> usize {
        self.bikes
            .iter()
            .filter(|b| matches!(b.status, EntryStatus::KeyedByCode { .. }))
            .count()
    }
}

/// Audit every bike's inventory against `location`.
pub fn audit_inventory(locations: &[Location], bikes: &[Bike], location: &Location) -> InventoryAudit {
    let directory = LocationDirectory::from_locations(locations);
    let known: HashSet<&LocationId> = locations.iter().map(|l| &l.id).collect();

    let bike_audits = bikes
        .iter()
        .map(|bike| {
            let by_id = bike
                .rental_inventory
                .iter()
                .any(|e| e.location == location.id);
            let status = if by_id {
                match bike.stock_at(&location.id) {
                    0 => EntryStatus::Zero,
                    stock => EntryStatus::Ok { stock },
                }
            } else {
                let by_code = bike
                    .rental_inventory
                    .iter()
                    .filter(|e| directory.id_for_code(e.location.as_str()) == Some(&location.id))
                    .map(|e| e.stock)
                    .max();
                match by_code {
                    Some(stock) => EntryStatus::KeyedByCode { stock },
                    None => EntryStatus::NotStocked,
                }
            };

            BikeAudit {
                id: bike.id.clone(),
                name: bike.name.clone(),
                status,
            }
        })
        .collect();

    let dangling = bikes
        .iter()
        .flat_map(|bike| {
            bike.rental_inventory.iter().filter_map(|entry| {
                let resolvable = known.contains(&entry.location)
                    || directory.id_for_code(entry.location.as_str()).is_some();
                (!resolvable).then(|| DanglingEntry {
                    bike_id: bike.id.clone(),
                    location: entry.location.clone(),
                    stock: entry.stock,
                })
            })
        })
        .collect();

    let available = availability::available_refs(bikes, &location.id)
        .map(|b| b.id.clone())
        .collect();

    InventoryAudit {
        location: location.clone(),
        code: directory.code_for_id(&location.id).map(str::to_string),
        bikes: bike_audits,
        available,
        dangling,
    }
}
