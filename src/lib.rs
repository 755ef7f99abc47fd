// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bike catalog: storefront backend for bicycle sales and rentals
//!
//! This crate serves the bike catalog, rental locations and trail routes,
//! and resolves which bikes can be rented at a given location.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;

use config::Config;
use services::CatalogService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
}
