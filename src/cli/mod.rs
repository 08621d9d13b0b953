//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger.

pub mod meal;
pub mod status;
pub mod target;

pub use meal::{handle_meal_command, MealCommands};
pub use status::handle_status_command;
pub use target::{handle_target_command, TargetCommands};
