//! Configuration module for mealledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Optional spending limits

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, SpendingLimits};
