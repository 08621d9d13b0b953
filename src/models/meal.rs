//! Meal entry model
//!
//! A meal entry is one recorded purchase: breakfast, lunch, or dinner,
//! with an amount and the day/time it was recorded.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::MealEntryId;
use super::money::Money;

/// Kind of meal a purchase belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!(
                "Unknown meal type '{}' (expected breakfast, lunch, or dinner)",
                other
            )),
        }
    }
}

/// One recorded meal purchase
///
/// The id, date, and time are stamped at creation and immutable; only the
/// amount may change afterwards (via an update command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Unique identifier, sortable by generation order
    pub id: MealEntryId,

    /// Which meal this purchase was for
    #[serde(rename = "mealType")]
    pub meal_type: MealType,

    /// Amount spent
    pub amount: Money,

    /// Calendar day the entry belongs to
    pub date: NaiveDate,

    /// Time of day recorded; display-only, no computation depends on it
    #[serde(with = "hm_format")]
    pub time: NaiveTime,
}

impl MealEntry {
    /// Create a new entry with a fresh id
    pub fn new(meal_type: MealType, amount: Money, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: MealEntryId::new(),
            meal_type,
            amount,
            date,
            time,
        }
    }
}

/// Serialize/deserialize a time as "HH:MM" (the format the entries are
/// displayed and persisted in; seconds are not recorded)
mod hm_format {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
