// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod bike;
pub mod location;
pub mod trail;

pub use bike::{Bike, InventoryEntry};
pub use location::{Location, LocationId};
pub use trail::{Difficulty, Trail};
