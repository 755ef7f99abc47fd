// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Rental location model and the canonical location key.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Canonical location key: the store's document id.
///
/// Inventory entries and routes reference locations only through this type.
/// The short `code` on [`Location`] is an external alias and never appears
/// in stored references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A rental location (shop).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Location {
    /// Canonical id (also used as document ID)
    pub id: LocationId,
    /// Display name (e.g., "Downtown Shop")
    pub name: String,
    pub city: String,
    /// Short code used by rental flows (e.g., "NYC")
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_id_serializes_as_plain_string() {
        let id = LocationId::new("loc1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"loc1\"");

        let parsed: LocationId = serde_json::from_str("\"loc2\"").unwrap();
        assert_eq!(parsed.as_str(), "loc2");
    }
}
