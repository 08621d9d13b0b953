//! Budget state and allowance arithmetic
//!
//! `BudgetState` is the single in-memory aggregate: the current month's
//! ledger plus the derived fields the UI reads. The allowance math and the
//! one-time daily freeze live here.

use chrono::{Datelike, NaiveDate};

use crate::models::{MealEntry, MealEntryId, Money, MonthKey, MonthLedger};

/// Days remaining in the month, counting today
///
/// On the last day of a 30-day month this yields 1, not 0.
pub fn days_remaining_in_month(today: NaiveDate) -> u32 {
    MonthKey::from_date(today).days_in_month() - today.day() + 1
}

/// Per-day allowance: floor(remaining / days)
///
/// `days == 0` is defensive; the counting convention above keeps it >= 1
/// unless invoked past month end. Flooring is toward negative infinity so
/// an overspent month yields a negative allowance, never one rounded up
/// past the true remainder.
pub fn daily_allowance(remaining: Money, days: u32) -> Money {
    if days == 0 {
        Money::zero()
    } else {
        remaining.divide_floor(days as i64)
    }
}

/// Top-level budget state: the active month plus derived fields
///
/// One instance, one writer at a time. Derived fields are recomputed after
/// every transition; readers always observe a fully-applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetState {
    /// Mirrors `current_month.target_amount`
    pub monthly_target: Money,

    /// The active month ledger
    pub current_month: MonthLedger,

    /// The day this state was reconciled against; transitions bucket
    /// against this day until the next initialization (lazy rollover)
    pub today: NaiveDate,

    /// Today's frozen allowance
    pub today_allowance: Money,

    /// Sum of today's entry amounts
    pub today_spent: Money,

    /// `today_allowance - today_spent`
    pub today_remaining: Money,

    /// Days left in the month, counting today
    pub days_remaining: u32,
}

impl BudgetState {
    /// Reconcile persisted state against today
    ///
    /// Starts a fresh month on rollover, opens today's bucket, and freezes
    /// today's allowance if this is the first time today has been opened.
    /// An allowance already frozen (the app ran earlier today) is left
    /// untouched regardless of any target changes since.
    pub fn reconcile(target: Money, month: Option<MonthLedger>, today: NaiveDate) -> Self {
        let month_key = MonthKey::from_date(today);

        let mut current_month = match month {
            Some(mut m) if m.month_key == month_key => {
                // Target and month are persisted together; the target key
                // wins if a hand-edited file made them diverge.
                m.target_amount = target;
                m
            }
            _ => MonthLedger::new(month_key, target),
        };

        let days_remaining = days_remaining_in_month(today);

        let spent_before = current_month.spent_before(today);
        let bucket = current_month.bucket_or_create(today);
        if bucket.daily_allowance.is_none() {
            // One-time freeze for this day
            bucket.daily_allowance = Some(daily_allowance(target - spent_before, days_remaining));
        }

        let mut state = Self {
            monthly_target: target,
            current_month,
            today,
            today_allowance: Money::zero(),
            today_spent: Money::zero(),
            today_remaining: Money::zero(),
            days_remaining,
        };
        state.refresh_derived();
        state
    }

    /// Recompute the derived fields from today's bucket
    pub(crate) fn refresh_derived(&mut self) {
        let (allowance, spent) = match self.current_month.bucket(self.today) {
            Some(bucket) => (
                bucket.daily_allowance.unwrap_or(self.today_allowance),
                bucket.total_spent,
            ),
            None => (self.today_allowance, Money::zero()),
        };

        self.today_allowance = allowance;
        self.today_spent = spent;
        self.today_remaining = allowance - spent;
    }

    /// Recompute and re-freeze today's allowance from the current target
    ///
    /// Only a target change calls this; prior days' frozen allowances are
    /// never touched.
    pub(crate) fn refreeze_today(&mut self) {
        let spent_before = self.current_month.spent_before(self.today);
        let allowance = daily_allowance(self.monthly_target - spent_before, self.days_remaining);

        let today = self.today;
        self.current_month.bucket_or_create(today).daily_allowance = Some(allowance);
        self.refresh_derived();
    }

    /// Today's meals in insertion order (empty if today has no bucket)
    pub fn today_meals(&self) -> &[MealEntry] {
        self.current_month
            .bucket(self.today)
            .map(|b| b.meals.as_slice())
            .unwrap_or(&[])
    }

    /// Total spent this month
    pub fn month_total_spent(&self) -> Money {
        self.current_month.total_spent
    }

    /// Resolve a user-supplied id string against today's entries
    ///
    /// Accepts the full UUID or the short display form.
    pub fn resolve_entry_id(&self, s: &str) -> Option<MealEntryId> {
        self.today_meals()
            .iter()
            .find(|m| m.id.matches(s))
            .map(|m| m.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_remaining_counts_today() {
        // June has 30 days
        assert_eq!(days_remaining_in_month(date(2025, 6, 1)), 30);
        assert_eq!(days_remaining_in_month(date(2025, 6, 15)), 16);
        assert_eq!(days_remaining_in_month(date(2025, 6, 30)), 1);
    }

    #[test]
    fn test_daily_allowance_floors() {
        assert_eq!(daily_allowance(Money::from_units(1000), 3), Money::from_units(333));
        assert_eq!(daily_allowance(Money::from_units(30_000), 30), Money::from_units(1000));
        assert_eq!(daily_allowance(Money::from_units(1000), 0), Money::zero());
    }

    #[test]
    fn test_daily_allowance_negative_remaining() {
        // Overspent months floor toward negative infinity like Math.floor
        assert_eq!(daily_allowance(Money::from_units(-100), 3), Money::from_units(-34));
    }

    #[test]
    fn test_reconcile_fresh_month() {
        let today = date(2025, 6, 1);
        let state = BudgetState::reconcile(Money::from_units(30_000), None, today);

        assert_eq!(state.monthly_target, Money::from_units(30_000));
        assert_eq!(state.days_remaining, 30);
        assert_eq!(state.today_allowance, Money::from_units(1000));
        assert_eq!(state.today_spent, Money::zero());
        assert_eq!(state.today_remaining, Money::from_units(1000));
        assert_eq!(state.current_month.month_key, MonthKey::new(2025, 6));

        // Today's bucket exists with the frozen allowance
        let bucket = state.current_month.bucket(today).unwrap();
        assert_eq!(bucket.daily_allowance, Some(Money::from_units(1000)));
    }

    #[test]
    fn test_reconcile_rolls_over_stale_month() {
        let may_ledger = MonthLedger::new(MonthKey::new(2025, 5), Money::from_units(30_000));
        let today = date(2025, 6, 1);
        let state = BudgetState::reconcile(Money::from_units(30_000), Some(may_ledger), today);

        assert_eq!(state.current_month.month_key, MonthKey::new(2025, 6));
        assert_eq!(state.month_total_spent(), Money::zero());
        assert!(state.current_month.daily_buckets.len() == 1);
    }

    #[test]
    fn test_reconcile_keeps_existing_frozen_allowance() {
        let today = date(2025, 6, 15);
        let mut ledger = MonthLedger::new(MonthKey::new(2025, 6), Money::from_units(30_000));
        ledger.bucket_or_create(today).daily_allowance = Some(Money::from_units(777));

        // Target changed since the allowance was frozen; the freeze wins
        let state = BudgetState::reconcile(Money::from_units(60_000), Some(ledger), today);
        assert_eq!(state.today_allowance, Money::from_units(777));
        assert_eq!(state.monthly_target, Money::from_units(60_000));
        assert_eq!(state.current_month.target_amount, Money::from_units(60_000));
    }

    #[test]
    fn test_reconcile_excludes_today_from_spent_before() {
        let today = date(2025, 6, 16);
        let mut ledger = MonthLedger::new(MonthKey::new(2025, 6), Money::from_units(30_000));
        ledger.bucket_or_create(date(2025, 6, 10)).total_spent = Money::from_units(14_000);
        ledger.bucket_or_create(today).total_spent = Money::from_units(500);
        ledger.total_spent = Money::from_units(14_500);

        let state = BudgetState::reconcile(Money::from_units(30_000), Some(ledger), today);

        // remaining at day start = 30000 - 14000 = 16000, over 15 days
        assert_eq!(state.days_remaining, 15);
        assert_eq!(state.today_allowance, Money::from_units(16_000 / 15));
        assert_eq!(state.today_spent, Money::from_units(500));
    }

    #[test]
    fn test_today_meals_empty_without_bucket() {
        let state = BudgetState::reconcile(Money::from_units(30_000), None, date(2025, 6, 1));
        // Bucket exists but is empty after reconcile
        assert!(state.today_meals().is_empty());
    }
}
