//! Month key and monthly ledger
//!
//! `MonthKey` identifies a calendar month and serializes as "YYYY-MM";
//! `MonthLedger` aggregates the month's daily buckets and totals.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::day::DailyBucket;
use super::money::Money;

/// Year-month identifier (e.g. "2025-06")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).expect("valid date"))
    }

    /// Last day of the month (first of next month minus one day)
    pub fn last_day(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.expect("valid date") - Duration::days(1)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// Serialized as the "YYYY-MM" string the persistence format uses, rather
// than a {year, month} object.
impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month key '{}' (expected YYYY-MM)", s))?;

        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month key '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in month key '{}'", s))?;

        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range in month key '{}'", s));
        }

        Ok(Self { year, month })
    }
}

/// Aggregate for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLedger {
    /// Year-month identifier
    #[serde(rename = "monthKey")]
    pub month_key: MonthKey,

    /// Monthly spending target in effect
    #[serde(rename = "targetAmount")]
    pub target_amount: Money,

    /// Sum of all bucket totals within the month
    #[serde(rename = "totalSpent", default)]
    pub total_spent: Money,

    /// Buckets keyed by calendar day
    #[serde(rename = "dailyBuckets", default)]
    pub daily_buckets: BTreeMap<NaiveDate, DailyBucket>,
}

impl MonthLedger {
    /// Create an empty ledger for a month
    pub fn new(month_key: MonthKey, target_amount: Money) -> Self {
        Self {
            month_key,
            target_amount,
            total_spent: Money::zero(),
            daily_buckets: BTreeMap::new(),
        }
    }

    /// Get the bucket for a day, if it has been opened
    pub fn bucket(&self, date: NaiveDate) -> Option<&DailyBucket> {
        self.daily_buckets.get(&date)
    }

    /// Get or lazily create the bucket for a day
    pub fn bucket_or_create(&mut self, date: NaiveDate) -> &mut DailyBucket {
        self.daily_buckets
            .entry(date)
            .or_insert_with(|| DailyBucket::new(date))
    }

    /// Sum of bucket totals, computed from scratch
    pub fn computed_total(&self) -> Money {
        self.daily_buckets.values().map(|b| b.total_spent).sum()
    }

    /// Spending on days strictly before `date` within this month
    pub fn spent_before(&self, date: NaiveDate) -> Money {
        self.total_spent
            - self
                .bucket(date)
                .map(|b| b.total_spent)
                .unwrap_or_else(Money::zero)
    }
}
