//! mealledger - Terminal-based daily food budget tracker
//!
//! This library provides the core functionality for the mealledger
//! application. The user records meal purchases (breakfast, lunch, dinner)
//! against a monthly spending target; the ledger derives a per-day
//! allowance that adapts as the month progresses and freezes each day's
//! allowance at the start of that day.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, meals, daily buckets, months)
//! - `ledger`: The budget state machine (commands, transitions, freeze)
//! - `storage`: JSON file persistence
//! - `cli`: CLI command handlers
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use mealledger::config::{paths::LedgerPaths, settings::Settings};
//! use mealledger::ledger::{BudgetLedger, SystemClock};
//! use mealledger::storage::BudgetStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = BudgetStore::new(paths)?;
//! let mut ledger = BudgetLedger::new(store, Box::new(SystemClock), &settings);
//! ledger.initialize()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
