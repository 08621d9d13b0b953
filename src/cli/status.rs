//! Status CLI command

use crate::config::settings::Settings;
use crate::display;
use crate::error::LedgerResult;
use crate::ledger::BudgetLedger;

/// Print the budget status summary
pub fn handle_status_command(ledger: &BudgetLedger, settings: &Settings) -> LedgerResult<()> {
    let state = ledger.state()?;
    print!("{}", display::format_status(state, &settings.currency_symbol));
    Ok(())
}
