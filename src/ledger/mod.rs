//! Budget ledger: the core state machine
//!
//! `BudgetLedger` is the single, explicitly constructed state container.
//! It owns the current `BudgetState`, validates command arguments, stamps
//! new entries from the injected clock, applies the pure transition
//! function, and persists after every successful command.
//!
//! Persistence saves are best-effort: a failed save is logged and does not
//! fail the command or roll back in-memory state. Initialization, by
//! contrast, is a blocking prerequisite; every command before it fails
//! with `NotReady`.

pub mod clock;
pub mod command;
pub mod state;
pub mod transition;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use state::{daily_allowance, days_remaining_in_month, BudgetState};
pub use transition::transition;

use crate::config::settings::{Settings, SpendingLimits};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MealEntry, MealEntryId, MealType, Money};
use crate::storage::BudgetStore;

/// The budget state machine wired to its collaborators
pub struct BudgetLedger {
    store: BudgetStore,
    clock: Box<dyn Clock>,
    limits: SpendingLimits,
    default_target: Money,
    state: Option<BudgetState>,
}

impl BudgetLedger {
    /// Create an uninitialized ledger
    ///
    /// No command runs until `initialize` has loaded and reconciled the
    /// persisted state.
    pub fn new(store: BudgetStore, clock: Box<dyn Clock>, settings: &Settings) -> Self {
        Self {
            store,
            clock,
            limits: settings.limits,
            default_target: settings.default_monthly_target,
            state: None,
        }
    }

    /// Load persisted state and reconcile it against today
    ///
    /// Starts a fresh month on rollover and freezes today's allowance if
    /// today has not been opened yet. Safe to call again later in the
    /// session to pick up a day rollover (rollover is lazy; there is no
    /// midnight timer).
    pub fn initialize(&mut self) -> LedgerResult<()> {
        let target = self.store.load_target()?.unwrap_or(self.default_target);
        let month = self.store.load_month()?;
        let today = self.clock.today();

        let state = transition(None, Command::Initialize { target, month, today })?;
        log::debug!(
            "initialized ledger for {} (allowance {}, {} days left)",
            today,
            state.today_allowance,
            state.days_remaining
        );
        self.commit(state);
        Ok(())
    }

    /// Whether `initialize` has completed
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Read access to the current state
    pub fn state(&self) -> LedgerResult<&BudgetState> {
        self.state.as_ref().ok_or(LedgerError::NotReady)
    }

    /// Change the monthly target
    ///
    /// Re-freezes today's allowance from the new target; prior days are
    /// untouched.
    pub fn set_monthly_target(&mut self, target: Money) -> LedgerResult<()> {
        if !target.is_positive() {
            return Err(LedgerError::invalid_argument(format!(
                "Monthly target must be positive, got {}",
                target
            )));
        }
        if let Some(cap) = self.limits.monthly_target_cap {
            if target > cap {
                return Err(LedgerError::invalid_argument(format!(
                    "Monthly target {} exceeds the configured cap {}",
                    target, cap
                )));
            }
        }

        let next = transition(self.state.as_ref(), Command::SetTarget { target })?;
        self.commit(next);
        Ok(())
    }

    /// Record a meal purchase for today
    ///
    /// The entry is stamped with a fresh id and the clock's current time;
    /// its date is the ledger's reconciled "today".
    pub fn add_meal_entry(&mut self, meal_type: MealType, amount: Money) -> LedgerResult<MealEntry> {
        self.validate_amount(amount)?;
        let today = self.state()?.today;

        let entry = MealEntry::new(meal_type, amount, today, self.clock.time_of_day());
        let next = transition(self.state.as_ref(), Command::AddMeal { entry: entry.clone() })?;
        self.commit(next);
        Ok(entry)
    }

    /// Replace the amount of one of today's entries
    pub fn update_meal_entry(&mut self, id: MealEntryId, amount: Money) -> LedgerResult<()> {
        self.validate_amount(amount)?;
        let next = transition(self.state.as_ref(), Command::UpdateMeal { id, amount })?;
        self.commit(next);
        Ok(())
    }

    /// Delete one of today's entries
    pub fn delete_meal_entry(&mut self, id: MealEntryId) -> LedgerResult<()> {
        let next = transition(self.state.as_ref(), Command::DeleteMeal { id })?;
        self.commit(next);
        Ok(())
    }

    /// Today's meals in insertion order
    pub fn today_meals(&self) -> LedgerResult<&[MealEntry]> {
        Ok(self.state()?.today_meals())
    }

    /// Resolve a user-supplied id string (full UUID or short display
    /// form) against today's entries
    pub fn resolve_entry_id(&self, s: &str) -> LedgerResult<MealEntryId> {
        self.state()?
            .resolve_entry_id(s)
            .ok_or_else(|| LedgerError::meal_not_found(s))
    }

    /// Clear all persisted data and drop in-memory state
    ///
    /// The next `initialize` starts from defaults.
    pub fn reset(&mut self) -> LedgerResult<()> {
        self.store.clear_all()?;
        self.state = None;
        Ok(())
    }

    fn validate_amount(&self, amount: Money) -> LedgerResult<()> {
        if !amount.is_positive() {
            return Err(LedgerError::invalid_argument(format!(
                "Meal amount must be positive, got {}",
                amount
            )));
        }
        if let Some(cap) = self.limits.per_meal_cap {
            if amount > cap {
                return Err(LedgerError::invalid_argument(format!(
                    "Meal amount {} exceeds the configured cap {}",
                    amount, cap
                )));
            }
        }
        Ok(())
    }

    /// Publish the next state, persisting it best-effort
    fn commit(&mut self, next: BudgetState) {
        if let Err(e) = self
            .store
            .save_target(next.monthly_target)
            .and_then(|_| self.store.save_month(&next.current_month))
        {
            // Fire-and-forget: in-memory state stays authoritative
            log::warn!("failed to persist budget state: {}", e);
        }

        self.state = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_at(dir: &TempDir, today: NaiveDate) -> BudgetLedger {
        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        let store = BudgetStore::new(paths).unwrap();
        BudgetLedger::new(store, Box::new(FixedClock::at(today)), &Settings::default())
    }

    #[test]
    fn test_commands_fail_before_initialize() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 1));

        assert!(!ledger.is_initialized());
        assert!(ledger
            .set_monthly_target(Money::from_units(10_000))
            .unwrap_err()
            .is_not_ready());
        assert!(ledger
            .add_meal_entry(MealType::Lunch, Money::from_units(500))
            .unwrap_err()
            .is_not_ready());
        assert!(ledger.today_meals().unwrap_err().is_not_ready());
    }

    #[test]
    fn test_initialize_uses_default_target() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 1));
        ledger.initialize().unwrap();

        let state = ledger.state().unwrap();
        assert_eq!(state.monthly_target, Money::from_units(30_000));
        assert_eq!(state.today_allowance, Money::from_units(1000));
    }

    #[test]
    fn test_add_update_delete_round() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 1));
        ledger.initialize().unwrap();

        let entry = ledger
            .add_meal_entry(MealType::Breakfast, Money::from_units(300))
            .unwrap();
        assert_eq!(entry.date, date(2025, 6, 1));
        assert_eq!(ledger.state().unwrap().today_remaining, Money::from_units(700));

        ledger.update_meal_entry(entry.id, Money::from_units(500)).unwrap();
        assert_eq!(ledger.state().unwrap().today_spent, Money::from_units(500));

        ledger.delete_meal_entry(entry.id).unwrap();
        assert_eq!(ledger.state().unwrap().today_spent, Money::zero());
        assert!(ledger.today_meals().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 1));
        ledger.initialize().unwrap();

        assert!(ledger
            .add_meal_entry(MealType::Lunch, Money::zero())
            .unwrap_err()
            .is_invalid_argument());
        assert!(ledger
            .add_meal_entry(MealType::Lunch, Money::from_units(-50))
            .unwrap_err()
            .is_invalid_argument());
        assert!(ledger
            .set_monthly_target(Money::zero())
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_configured_caps_are_enforced() {
        let dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        let store = BudgetStore::new(paths).unwrap();

        let mut settings = Settings::default();
        settings.limits.per_meal_cap = Some(Money::from_units(500));
        settings.limits.monthly_target_cap = Some(Money::from_units(1_000_000));

        let mut ledger = BudgetLedger::new(
            store,
            Box::new(FixedClock::at(date(2025, 6, 1))),
            &settings,
        );
        ledger.initialize().unwrap();

        assert!(ledger
            .add_meal_entry(MealType::Dinner, Money::from_units(501))
            .unwrap_err()
            .is_invalid_argument());
        ledger.add_meal_entry(MealType::Dinner, Money::from_units(500)).unwrap();

        assert!(ledger
            .set_monthly_target(Money::from_units(1_000_001))
            .unwrap_err()
            .is_invalid_argument());
        ledger.set_monthly_target(Money::from_units(1_000_000)).unwrap();
    }

    #[test]
    fn test_persists_across_restart_same_day() {
        let dir = TempDir::new().unwrap();
        let today = date(2025, 6, 10);

        {
            let mut ledger = ledger_at(&dir, today);
            ledger.initialize().unwrap();
            ledger.add_meal_entry(MealType::Lunch, Money::from_units(800)).unwrap();
            // Target change after the morning freeze
            ledger.set_monthly_target(Money::from_units(24_000)).unwrap();
        }

        let mut ledger = ledger_at(&dir, today);
        ledger.initialize().unwrap();
        let state = ledger.state().unwrap();

        assert_eq!(state.monthly_target, Money::from_units(24_000));
        assert_eq!(state.today_spent, Money::from_units(800));
        // The re-frozen allowance from the target change survives reload
        assert_eq!(
            state.today_allowance,
            daily_allowance(Money::from_units(24_000), state.days_remaining)
        );
        assert_eq!(ledger.today_meals().unwrap().len(), 1);
    }

    #[test]
    fn test_month_rollover_on_restart() {
        let dir = TempDir::new().unwrap();

        {
            let mut ledger = ledger_at(&dir, date(2025, 6, 30));
            ledger.initialize().unwrap();
            ledger.add_meal_entry(MealType::Dinner, Money::from_units(2000)).unwrap();
        }

        let mut ledger = ledger_at(&dir, date(2025, 7, 1));
        ledger.initialize().unwrap();
        let state = ledger.state().unwrap();

        // Prior month is not carried forward
        assert_eq!(state.month_total_spent(), Money::zero());
        assert_eq!(state.days_remaining, 31);
        assert_eq!(state.today_allowance, Money::from_units(30_000 / 31));
    }

    #[test]
    fn test_resolve_entry_id_short_form() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 1));
        ledger.initialize().unwrap();

        let entry = ledger
            .add_meal_entry(MealType::Breakfast, Money::from_units(300))
            .unwrap();

        assert_eq!(ledger.resolve_entry_id(&entry.id.to_string()).unwrap(), entry.id);
        assert_eq!(
            ledger.resolve_entry_id(&entry.id.as_uuid().to_string()).unwrap(),
            entry.id
        );
        assert!(ledger.resolve_entry_id("meal-ffffffff").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reset_clears_everything() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_at(&dir, date(2025, 6, 10));
        ledger.initialize().unwrap();
        ledger.add_meal_entry(MealType::Lunch, Money::from_units(999)).unwrap();
        ledger.set_monthly_target(Money::from_units(50_000)).unwrap();

        ledger.reset().unwrap();
        assert!(!ledger.is_initialized());

        ledger.initialize().unwrap();
        let state = ledger.state().unwrap();
        assert_eq!(state.monthly_target, Money::from_units(30_000));
        assert_eq!(state.month_total_spent(), Money::zero());
    }
}
