//! Daily bucket model
//!
//! Aggregates the meal entries for one calendar day together with the
//! allowance frozen for that day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::MealEntryId;
use super::meal::MealEntry;
use super::money::Money;

/// Aggregate for one calendar day
///
/// `total_spent` always equals the sum of the entry amounts; every
/// mutation goes through the methods below, which keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// Calendar day key
    pub date: NaiveDate,

    /// Entries in insertion order
    #[serde(default)]
    pub meals: Vec<MealEntry>,

    /// Sum of `meals[*].amount`
    #[serde(rename = "totalSpent", default)]
    pub total_spent: Money,

    /// Allowance frozen for this day at first open; never recomputed
    /// afterwards (except by a same-day target change)
    #[serde(rename = "dailyAllowance", default, skip_serializing_if = "Option::is_none")]
    pub daily_allowance: Option<Money>,
}

impl DailyBucket {
    /// Create an empty bucket for a day
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            total_spent: Money::zero(),
            daily_allowance: None,
        }
    }

    /// Append an entry and add its amount to the bucket total
    pub fn add_entry(&mut self, entry: MealEntry) {
        self.total_spent += entry.amount;
        self.meals.push(entry);
    }

    /// Replace an entry's amount, returning the delta (`new - old`)
    ///
    /// Returns `None` if the id is not in this bucket.
    pub fn update_entry(&mut self, id: MealEntryId, amount: Money) -> Option<Money> {
        let entry = self.meals.iter_mut().find(|m| m.id == id)?;
        let delta = amount - entry.amount;
        entry.amount = amount;
        self.total_spent += delta;
        Some(delta)
    }

    /// Remove an entry and subtract its amount from the bucket total
    ///
    /// Returns the removed entry, or `None` if the id is not in this
    /// bucket (in which case nothing changes).
    pub fn remove_entry(&mut self, id: MealEntryId) -> Option<MealEntry> {
        let index = self.meals.iter().position(|m| m.id == id)?;
        let entry = self.meals.remove(index);
        self.total_spent -= entry.amount;
        Some(entry)
    }

    /// Sum of the entry amounts, computed from scratch
    pub fn computed_total(&self) -> Money {
        self.meals.iter().map(|m| m.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::NaiveTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn entry(amount: i64) -> MealEntry {
        MealEntry::new(
            MealType::Breakfast,
            Money::from_units(amount),
            day(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_add_keeps_total_consistent() {
        let mut bucket = DailyBucket::new(day());
        bucket.add_entry(entry(300));
        bucket.add_entry(entry(500));

        assert_eq!(bucket.total_spent, Money::from_units(800));
        assert_eq!(bucket.total_spent, bucket.computed_total());
        assert_eq!(bucket.meals.len(), 2);
    }

    #[test]
    fn test_update_returns_delta() {
        let mut bucket = DailyBucket::new(day());
        let e = entry(100);
        let id = e.id;
        bucket.add_entry(e);

        let delta = bucket.update_entry(id, Money::from_units(60)).unwrap();
        assert_eq!(delta, Money::from_units(-40));
        assert_eq!(bucket.total_spent, Money::from_units(60));
        assert_eq!(bucket.total_spent, bucket.computed_total());
    }

    #[test]
    fn test_update_missing_id() {
        let mut bucket = DailyBucket::new(day());
        bucket.add_entry(entry(100));

        assert!(bucket.update_entry(MealEntryId::new(), Money::from_units(60)).is_none());
        assert_eq!(bucket.total_spent, Money::from_units(100));
    }

    #[test]
    fn test_remove_preserves_insertion_order() {
        let mut bucket = DailyBucket::new(day());
        let a = entry(100);
        let b = entry(200);
        let c = entry(300);
        let b_id = b.id;
        bucket.add_entry(a.clone());
        bucket.add_entry(b);
        bucket.add_entry(c.clone());

        let removed = bucket.remove_entry(b_id).unwrap();
        assert_eq!(removed.amount, Money::from_units(200));
        assert_eq!(bucket.meals, vec![a, c]);
        assert_eq!(bucket.total_spent, Money::from_units(400));
    }

    #[test]
    fn test_remove_missing_id_changes_nothing() {
        let mut bucket = DailyBucket::new(day());
        bucket.add_entry(entry(100));

        assert!(bucket.remove_entry(MealEntryId::new()).is_none());
        assert_eq!(bucket.total_spent, Money::from_units(100));
        assert_eq!(bucket.meals.len(), 1);
    }

    #[test]
    fn test_serde_field_names() {
        let mut bucket = DailyBucket::new(day());
        bucket.add_entry(entry(300));
        bucket.daily_allowance = Some(Money::from_units(1000));

        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["date"], "2025-06-15");
        assert_eq!(json["totalSpent"], 300);
        assert_eq!(json["dailyAllowance"], 1000);
    }

    #[test]
    fn test_missing_allowance_not_serialized() {
        let bucket = DailyBucket::new(day());
        let json = serde_json::to_value(&bucket).unwrap();
        assert!(json.get("dailyAllowance").is_none());
    }
}
