// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side catalog view state.
//!
//! A [`CatalogView`] is an immutable value. Every user interaction or fetch
//! outcome is a [`ViewAction`], and [`reduce`] produces the next view.
//! Filtering and pagination run over the already-fetched item list.
//!
//! Each [`ViewAction::FetchStarted`] issues a new fetch ticket. A fetch
//! outcome is applied only when it carries the ticket of the fetch still
//! in flight, so a response for a location or mode the user has already
//! left is dropped.

use crate::models::{Bike, LocationId};
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: u32 = 9;
pub const MAX_PAGE_SIZE: u32 = 100;

/// User-facing message for any failed fetch.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load bikes. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Purchase,
    Rental,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum ViewAction {
    SetMode(Mode),
    SelectLocation(Option<LocationId>),
    SetTypeFilter(Option<String>),
    SetSearch(String),
    SetPage(u32),
    SetPageSize(u32),
    FetchStarted,
    Loaded { ticket: u64, items: Vec<Bike> },
    FetchFailed { ticket: u64, details: String },
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    pub mode: Mode,
    pub location: Option<LocationId>,
    pub type_filter: Option<String>,
    pub search: String,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    pub status: LoadStatus,
    /// Set when the fetched items no longer match mode/location.
    ///
    /// Stays set until `FetchStarted`; outcomes of earlier fetches are
    /// discarded in the meantime.
    pub needs_fetch: bool,
    /// Last ticket handed out by `FetchStarted`.
    fetch_seq: u64,
    /// Ticket of the fetch whose outcome is still awaited.
    in_flight: Option<u64>,
    items: Arc<Vec<Bike>>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            mode: Mode::Purchase,
            location: None,
            type_filter: None,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            status: LoadStatus::Idle,
            needs_fetch: true,
            fetch_seq: 0,
            in_flight: None,
            items: Arc::new(Vec::new()),
        }
    }
}

impl CatalogView {
    pub fn items(&self) -> &[Bike] {
        &self.items
    }

    /// Ticket the client must attach to the outcome of the fetch it just
    /// started. `None` when no fetch is awaited.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    fn invalidate(&mut self) {
        self.needs_fetch = true;
        self.in_flight = None;
        self.items = Arc::new(Vec::new());
        self.status = LoadStatus::Idle;
    }

    fn awaits(&self, ticket: u64) -> bool {
        !self.needs_fetch && self.in_flight == Some(ticket)
    }

    /// API path the client should fetch for the current mode and location.
    ///
    /// `None` in rental mode until a location is selected.
    pub fn fetch_path(&self) -> Option<String> {
        match (self.mode, &self.location) {
            (Mode::Purchase, _) => Some("/api/bikes/purchase".to_string()),
            (Mode::Rental, Some(location)) => Some(format!("/api/bikes/rental/{}", location)),
            (Mode::Rental, None) => None,
        }
    }

    /// Items passing the type filter and the search text.
    pub fn visible(&self) -> impl Iterator<Item = &Bike> {
        let search = self.search.trim().to_lowercase();
        let type_filter = self.type_filter.as_deref();

        self.items.iter().filter(move |bike| {
            let type_ok = type_filter.map_or(true, |t| bike.has_type(t));
            let search_ok = search.is_empty()
                || bike.name.to_lowercase().contains(&search)
                || bike.description.to_lowercase().contains(&search);
            type_ok && search_ok
        })
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Number of pages; at least one even when nothing is visible.
    pub fn page_count(&self) -> u32 {
        let count = self.visible_count() as u64;
        let size = u64::from(self.page_size.max(1));
        count.div_ceil(size).clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Items on the current page.
    pub fn page_items(&self) -> Vec<&Bike> {
        let size = self.page_size.max(1) as usize;
        let start = (self.page.max(1) as usize - 1).saturating_mul(size);
        self.visible().skip(start).take(size).collect()
    }

    fn clamp_page(mut self) -> Self {
        self.page = self.page.clamp(1, self.page_count());
        self
    }
}

/// Apply one action, producing the next view.
pub fn reduce(view: &CatalogView, action: ViewAction) -> CatalogView {
    let mut next = view.clone();

    match action {
        ViewAction::SetMode(mode) => {
            if mode != next.mode {
                next.mode = mode;
                next.page = 1;
                next.invalidate();
            }
        }
        ViewAction::SelectLocation(location) => {
            if location != next.location {
                next.location = location;
                next.page = 1;
                if next.mode == Mode::Rental {
                    next.invalidate();
                }
            }
        }
        ViewAction::SetTypeFilter(filter) => {
            next.type_filter = filter
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());
            next.page = 1;
        }
        ViewAction::SetSearch(search) => {
            next.search = search;
            next.page = 1;
        }
        ViewAction::SetPage(page) => {
            next.page = page;
            next = next.clamp_page();
        }
        ViewAction::SetPageSize(size) => {
            next.page_size = size.clamp(1, MAX_PAGE_SIZE);
            next.page = 1;
        }
        ViewAction::FetchStarted => {
            next.fetch_seq += 1;
            next.in_flight = Some(next.fetch_seq);
            next.status = LoadStatus::Loading;
            next.needs_fetch = false;
        }
        ViewAction::Loaded { ticket, items } => {
            if !next.awaits(ticket) {
                tracing::debug!(ticket, in_flight = ?next.in_flight, "Dropping stale catalog response");
                return next;
            }
            next.in_flight = None;
            next.items = Arc::new(items);
            next.status = LoadStatus::Loaded;
            next = next.clamp_page();
        }
        ViewAction::FetchFailed { ticket, details } => {
            if !next.awaits(ticket) {
                tracing::debug!(ticket, error = %details, "Dropping stale catalog failure");
                return next;
            }
            tracing::warn!(error = %details, mode = ?next.mode, "Catalog fetch failed");
            next.in_flight = None;
            next.items = Arc::new(Vec::new());
            next.status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
            next.page = 1;
        }
    }

    next
}
