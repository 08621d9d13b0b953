//! Target CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::BudgetLedger;
use crate::models::Money;

/// Monthly target subcommands
#[derive(Subcommand)]
pub enum TargetCommands {
    /// Set the monthly spending target
    Set {
        /// Target amount (e.g., "30000")
        amount: String,
    },

    /// Show the current monthly target
    Show,
}

/// Handle a target command
pub fn handle_target_command(
    ledger: &mut BudgetLedger,
    settings: &Settings,
    cmd: TargetCommands,
) -> LedgerResult<()> {
    match cmd {
        TargetCommands::Set { amount } => {
            let target = Money::parse(&amount)
                .map_err(|e| LedgerError::invalid_argument(e.to_string()))?;
            ledger.set_monthly_target(target)?;

            let state = ledger.state()?;
            println!(
                "Monthly target set to {}. Today's allowance is now {}.",
                target.format_with_symbol(&settings.currency_symbol),
                state
                    .today_allowance
                    .format_with_symbol(&settings.currency_symbol),
            );
        }

        TargetCommands::Show => {
            let state = ledger.state()?;
            println!(
                "Monthly target: {}",
                state
                    .monthly_target
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
