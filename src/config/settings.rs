//! User settings for mealledger
//!
//! Manages user preferences including the currency symbol, the default
//! monthly target applied when no target has been persisted yet, and
//! optional spending limits.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Money;

/// Optional validation ceilings applied by the ledger
///
/// Both limits are off by default. When set, `per_meal_cap` bounds the
/// amount of a single meal entry and `monthly_target_cap` bounds the
/// monthly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpendingLimits {
    /// Maximum amount for a single meal entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_meal_cap: Option<Money>,

    /// Maximum monthly target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_target_cap: Option<Money>,
}

/// User settings for mealledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Monthly target used when none has been persisted yet
    #[serde(default = "default_monthly_target")]
    pub default_monthly_target: Money,

    /// Optional validation ceilings
    #[serde(default)]
    pub limits: SpendingLimits,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_monthly_target() -> Money {
    Money::from_units(30_000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_monthly_target: default_monthly_target(),
            limits: SpendingLimits::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
