// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location code <-> canonical id lookup.
//!
//! Stored references always use [`LocationId`]. Short codes ("NYC") exist
//! only at the API edge and are translated here, in both directions.

use crate::models::{Location, LocationId};
use std::collections::HashMap;

/// Bidirectional table between location codes and canonical ids.
#[derive(Debug, Default, Clone)]
pub struct LocationDirectory {
    /// Lowercased code -> id
    by_code: HashMap<String, LocationId>,
    /// id -> code as stored
    by_id: HashMap<LocationId, String>,
}

impl LocationDirectory {
    /// Build the table from locations in store order.
    ///
    /// When two locations share a code, the first one keeps it.
    pub fn from_locations(locations: &[Location]) -> Self {
        let mut directory = Self::default();

        for location in locations {
            let key = location.code.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if let Some(existing) = directory.by_code.get(&key) {
                tracing::warn!(
                    code = %location.code,
                    kept = %existing,
                    ignored = %location.id,
                    "Duplicate location code"
                );
                continue;
            }
            directory.by_code.insert(key, location.id.clone());
            directory
                .by_id
                .insert(location.id.clone(), location.code.clone());
        }

        directory
    }

    /// Canonical id for a short code (case-insensitive).
    pub fn id_for_code(&self, code: &str) -> Option<&LocationId> {
        self.by_code.get(&code.trim().to_lowercase())
    }

    /// Short code for a canonical id.
    ///
    /// `None` for a location whose code is blank or was taken by an earlier
    /// location: such a location exists but cannot be reached by code.
    pub fn code_for_id(&self, id: &LocationId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, code: &str) -> Location {
        Location {
            id: LocationId::new(id),
            name: format!("Shop {}", code),
            city: "Somewhere".to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_round_trip_lookup() {
        let dir = LocationDirectory::from_locations(&[location("loc1", "NYC"), location("loc2", "SF")]);

        assert_eq!(dir.id_for_code("NYC"), Some(&LocationId::new("loc1")));
        assert_eq!(dir.id_for_code("nyc"), Some(&LocationId::new("loc1")));
        assert_eq!(dir.code_for_id(&LocationId::new("loc1")), Some("NYC"));
        assert_eq!(dir.code_for_id(&LocationId::new("loc2")), Some("SF"));
    }

    #[test]
    fn test_unknown_code_and_id() {
        let dir = LocationDirectory::from_locations(&[location("loc1", "NYC")]);
        assert!(dir.id_for_code("LA").is_none());
        assert!(dir.code_for_id(&LocationId::new("NYC")).is_none());
    }

    #[test]
    fn test_duplicate_code_first_wins() {
        let dir = LocationDirectory::from_locations(&[location("loc1", "NYC"), location("loc9", "nyc")]);
        assert_eq!(dir.id_for_code("NYC"), Some(&LocationId::new("loc1")));
        assert!(dir.code_for_id(&LocationId::new("loc9")).is_none());
    }

    #[test]
    fn test_blank_code_is_skipped() {
        let dir = LocationDirectory::from_locations(&[location("loc1", "  ")]);
        assert!(dir.id_for_code("").is_none());
        assert!(dir.code_for_id(&LocationId::new("loc1")).is_none());
    }
}
