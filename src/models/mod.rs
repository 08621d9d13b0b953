//! Core data models for mealledger
//!
//! - `money`: integer minor-unit monetary amounts
//! - `ids`: strongly-typed meal entry identifier
//! - `meal`: meal types and entries
//! - `day`: per-day bucket of entries with a frozen allowance
//! - `month`: month key and monthly ledger aggregate

pub mod day;
pub mod ids;
pub mod meal;
pub mod money;
pub mod month;

pub use day::DailyBucket;
pub use ids::MealEntryId;
pub use meal::{MealEntry, MealType};
pub use money::Money;
pub use month::{MonthKey, MonthLedger};
