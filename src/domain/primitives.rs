//! Domain primitives: ItemId.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Storage-assigned identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Create an ItemId from a raw rowid.
    pub fn new(id: i64) -> Self {
        ItemId(id)
    }

    /// Get the underlying rowid.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid item id: {0}")]
pub struct ItemIdParseError(pub String);

impl FromStr for ItemId {
    type Err = ItemIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ItemId)
            .map_err(|_| ItemIdParseError(s.to_string()))
    }
}
