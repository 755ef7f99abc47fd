// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rental availability resolution.
//!
//! A bike is available at a location when its inventory holds an entry for
//! that location with positive stock. Duplicate entries for one location
//! count as the largest of their stocks (see [`Bike::stock_at`]).

use crate::models::{Bike, LocationId};

/// Keep the bikes rentable at `location`, in catalog order.
///
/// An unknown location simply matches nothing.
pub fn available_at(bikes: Vec<Bike>, location: &LocationId) -> Vec<Bike> {
    bikes
        .into_iter()
        .filter(|bike| bike.is_available_at(location))
        .collect()
}

/// Borrowing variant of [`available_at`].
pub fn available_refs<'a>(bikes: &'a [Bike], location: &'a LocationId) -> impl Iterator<Item = &'a Bike> {
    bikes.iter().filter(move |bike| bike.is_available_at(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryEntry;

    fn bike(id: &str, inventory: &[(&str, u32)]) -> Bike {
        Bike {
            id: id.to_string(),
            name: format!("Bike {}", id),
            bike_type: "Hybrid".to_string(),
            description: String::new(),
            image: String::new(),
            price: 500.0,
            rental_price: 20.0,
            features: vec![],
            rental_inventory: inventory
                .iter()
                .map(|(loc, stock)| InventoryEntry {
                    location: LocationId::new(*loc),
                    stock: *stock,
                })
                .collect(),
        }
    }

    #[test]
    fn test_zero_stock_is_excluded() {
        let bikes = vec![bike("b1", &[("loc1", 3)]), bike("b2", &[("loc1", 0)])];
        let result = available_at(bikes, &LocationId::new("loc1"));
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1"]);
    }

    #[test]
    fn test_missing_entry_is_excluded() {
        let bikes = vec![bike("b1", &[("loc2", 5)]), bike("b2", &[])];
        assert!(available_at(bikes, &LocationId::new("loc1")).is_empty());
    }

    #[test]
    fn test_preserves_catalog_order() {
        let bikes = vec![
            bike("b3", &[("loc1", 1)]),
            bike("b1", &[("loc1", 2)]),
            bike("b2", &[("loc1", 9)]),
        ];
        let ids: Vec<String> = available_at(bikes, &LocationId::new("loc1"))
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["b3", "b1", "b2"]);
    }

    #[test]
    fn test_duplicate_entries_use_max_stock() {
        // First entry is zero, later one is positive: still available.
        let bikes = vec![bike("b1", &[("loc1", 0), ("loc1", 2)])];
        assert_eq!(available_at(bikes, &LocationId::new("loc1")).len(), 1);
    }

    #[test]
    fn test_available_refs_matches_owned() {
        let bikes = vec![bike("b1", &[("loc1", 1)]), bike("b2", &[("loc1", 0)])];
        let loc = LocationId::new("loc1");
        let refs: Vec<&str> = available_refs(&bikes, &loc).map(|b| b.id.as_str()).collect();
        assert_eq!(refs, vec!["b1"]);
    }
}
