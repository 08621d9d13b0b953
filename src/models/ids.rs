//! Strongly-typed ID wrapper for meal entries
//!
//! Uses UUID v7 so that ids are both unique and sortable by generation
//! order (the id embeds its creation timestamp).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for a meal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealEntryId(Uuid);

impl MealEntryId {
    /// Create a new id stamped with the current time
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an id from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether a user-supplied string refers to this id
    ///
    /// Accepts the full UUID or the short display form shown by
    /// `meal list`.
    pub fn matches(&self, s: &str) -> bool {
        if let Ok(uuid) = Uuid::parse_str(s) {
            return uuid == self.0;
        }
        let s = s.strip_prefix("meal-").unwrap_or(s);
        !s.is_empty() && self.0.to_string().starts_with(s)
    }
}

impl Default for MealEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MealEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meal-{}", &self.0.to_string()[..8])
    }
}

impl From<Uuid> for MealEntryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for MealEntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self(uuid));
        }
        let s = s.strip_prefix("meal-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
