//! Storage layer for mealledger
//!
//! `BudgetStore` is the persistence bridge the ledger talks to: two JSON
//! documents under the data directory, written atomically. The ledger only
//! relies on the load-at-startup / save-on-change contract; it never reads
//! back during a session.

pub mod file_io;

pub use file_io::{read_json_opt, write_json_atomic};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Money, MonthLedger};

use file_io::remove_if_exists;

/// Key-value persistence for the budget state
///
/// - `target.json`: the monthly target as a bare number
/// - `month.json`: the current month's ledger tree
pub struct BudgetStore {
    paths: LedgerPaths,
}

impl BudgetStore {
    /// Create a store rooted at the given paths
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load the persisted monthly target, if any
    pub fn load_target(&self) -> Result<Option<Money>, LedgerError> {
        read_json_opt(self.paths.target_file())
    }

    /// Persist the monthly target
    pub fn save_target(&self, target: Money) -> Result<(), LedgerError> {
        write_json_atomic(self.paths.target_file(), &target)
    }

    /// Load the persisted month ledger, if any
    pub fn load_month(&self) -> Result<Option<MonthLedger>, LedgerError> {
        read_json_opt(self.paths.month_file())
    }

    /// Persist the month ledger
    pub fn save_month(&self, month: &MonthLedger) -> Result<(), LedgerError> {
        write_json_atomic(self.paths.month_file(), month)
    }

    /// Remove all persisted budget data
    ///
    /// The next initialization starts from defaults.
    pub fn clear_all(&self) -> Result<(), LedgerError> {
        remove_if_exists(self.paths.target_file())?;
        remove_if_exists(self.paths.month_file())?;
        Ok(())
    }
}
