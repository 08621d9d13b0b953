//! Meal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::BudgetLedger;
use crate::models::{MealType, Money};

/// Meal entry subcommands
#[derive(Subcommand)]
pub enum MealCommands {
    /// Record a meal purchase for today
    Add {
        /// Meal type: breakfast, lunch, or dinner
        meal_type: MealType,
        /// Amount spent (e.g., "800")
        amount: String,
    },

    /// List today's meals
    List,

    /// Change the amount of one of today's meals
    Edit {
        /// Meal id (full UUID or the short form from 'meal list')
        id: String,
        /// New amount
        amount: String,
    },

    /// Delete one of today's meals
    Delete {
        /// Meal id (full UUID or the short form from 'meal list')
        id: String,
    },
}

/// Handle a meal command
pub fn handle_meal_command(
    ledger: &mut BudgetLedger,
    settings: &Settings,
    cmd: MealCommands,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        MealCommands::Add { meal_type, amount } => {
            let amount = parse_amount(&amount)?;
            let entry = ledger.add_meal_entry(meal_type, amount)?;

            let state = ledger.state()?;
            println!(
                "Recorded {} {} ({}). Remaining today: {}.",
                entry.meal_type,
                entry.amount.format_with_symbol(symbol),
                entry.id,
                state.today_remaining.format_with_symbol(symbol),
            );
        }

        MealCommands::List => {
            let meals = ledger.today_meals()?;
            println!("{}", display::format_meal_list(meals, symbol));
        }

        MealCommands::Edit { id, amount } => {
            let amount = parse_amount(&amount)?;
            let id = ledger.resolve_entry_id(&id)?;
            ledger.update_meal_entry(id, amount)?;

            let state = ledger.state()?;
            println!(
                "Updated {} to {}. Remaining today: {}.",
                id,
                amount.format_with_symbol(symbol),
                state.today_remaining.format_with_symbol(symbol),
            );
        }

        MealCommands::Delete { id } => {
            let id = ledger.resolve_entry_id(&id)?;
            ledger.delete_meal_entry(id)?;

            let state = ledger.state()?;
            println!(
                "Deleted {}. Remaining today: {}.",
                id,
                state.today_remaining.format_with_symbol(symbol),
            );
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| LedgerError::invalid_argument(e.to_string()))
}
