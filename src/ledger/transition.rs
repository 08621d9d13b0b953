//! Pure state-transition function
//!
//! `(state, command) -> state` with no I/O and no clock access: the clock
//! is consulted only when commands are built, so every transition is
//! reproducible in tests.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::command::Command;
use crate::ledger::state::BudgetState;

/// Apply a command to the current state, producing the next state
///
/// `Initialize` is the only command valid without prior state; everything
/// else fails with `NotReady` until initialization has run. The input
/// state is never mutated, so a failed command leaves totals untouched at
/// every level.
pub fn transition(state: Option<&BudgetState>, command: Command) -> LedgerResult<BudgetState> {
    match command {
        Command::Initialize {
            target,
            month,
            today,
        } => Ok(BudgetState::reconcile(target, month, today)),

        Command::SetTarget { target } => {
            let mut next = ready(state)?.clone();
            next.monthly_target = target;
            next.current_month.target_amount = target;
            // A target edit re-calibrates the rest of today onward; prior
            // days' frozen allowances are never touched.
            next.refreeze_today();
            Ok(next)
        }

        Command::AddMeal { entry } => {
            let mut next = ready(state)?.clone();
            let amount = entry.amount;
            let today = next.today;
            next.current_month.bucket_or_create(today).add_entry(entry);
            next.current_month.total_spent += amount;
            next.refresh_derived();
            Ok(next)
        }

        Command::UpdateMeal { id, amount } => {
            let mut next = ready(state)?.clone();
            let today = next.today;
            let delta = next
                .current_month
                .bucket_or_create(today)
                .update_entry(id, amount)
                .ok_or_else(|| LedgerError::meal_not_found(id.to_string()))?;
            next.current_month.total_spent += delta;
            next.refresh_derived();
            Ok(next)
        }

        Command::DeleteMeal { id } => {
            let mut next = ready(state)?.clone();
            let today = next.today;
            let removed = next
                .current_month
                .bucket_or_create(today)
                .remove_entry(id)
                .ok_or_else(|| LedgerError::meal_not_found(id.to_string()))?;
            next.current_month.total_spent -= removed.amount;
            next.refresh_derived();
            Ok(next)
        }
    }
}

fn ready(state: Option<&BudgetState>) -> LedgerResult<&BudgetState> {
    state.ok_or(LedgerError::NotReady)
}
