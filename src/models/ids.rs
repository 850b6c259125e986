//! Strongly-typed ID wrapper for items
//!
//! Ids are random UUIDs assigned at creation and never change across edits.
//! They display as a short prefixed form (`itm-1a2b3c4d`), which is also
//! what users type back on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "itm-";

/// Unique identifier for a savings goal or debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether a user-typed identifier is a prefix of this ID
    ///
    /// Both the bare UUID and the display prefix are accepted, so
    /// "itm-1a2b" and "1a2b" match the same item.
    pub fn matches_prefix(&self, identifier: &str) -> bool {
        let needle = identifier.trim().to_ascii_lowercase();
        let needle = needle.strip_prefix(DISPLAY_PREFIX).unwrap_or(&needle);
        !needle.is_empty() && self.0.to_string().starts_with(needle)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
