// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod audit;
pub mod availability;
pub mod catalog;
pub mod locations;

pub use audit::{audit_inventory, InventoryAudit};
pub use catalog::CatalogService;
pub use locations::LocationDirectory;
