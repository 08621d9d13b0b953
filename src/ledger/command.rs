//! Ledger commands
//!
//! Every state change is expressed as a `Command` and processed by the
//! pure transition function, so the whole state machine is testable
//! without storage or a UI attached.

use chrono::NaiveDate;

use crate::models::{MealEntry, MealEntryId, Money, MonthLedger};

/// A state-transition command
#[derive(Debug, Clone)]
pub enum Command {
    /// Reconcile persisted state against today (startup, or an explicit
    /// re-check after midnight)
    Initialize {
        target: Money,
        month: Option<MonthLedger>,
        today: NaiveDate,
    },

    /// Change the monthly target; re-freezes today's allowance only
    SetTarget { target: Money },

    /// Append a fully-stamped entry to today's bucket
    AddMeal { entry: MealEntry },

    /// Replace the amount of an entry in today's bucket
    UpdateMeal { id: MealEntryId, amount: Money },

    /// Remove an entry from today's bucket
    DeleteMeal { id: MealEntryId },
}
