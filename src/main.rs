use anyhow::Result;
use clap::{Parser, Subcommand};

use mealledger::cli::{
    handle_meal_command, handle_status_command, handle_target_command, MealCommands,
    TargetCommands,
};
use mealledger::config::{paths::LedgerPaths, settings::Settings};
use mealledger::ledger::{BudgetLedger, SystemClock};
use mealledger::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "mealledger",
    version,
    about = "Terminal-based daily food budget tracker",
    long_about = "mealledger tracks meal purchases against a monthly spending \
                  target and derives a daily allowance that adapts as the month \
                  progresses. Each day's allowance is frozen at the start of the \
                  day, so later edits never rewrite history."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's allowance, spending, and the month total
    Status,

    /// Monthly target commands
    #[command(subcommand)]
    Target(TargetCommands),

    /// Meal entry commands
    #[command(subcommand)]
    Meal(MealCommands),

    /// Delete all recorded data and start over
    Reset {
        /// Confirm the reset (refused without this flag)
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = BudgetStore::new(paths.clone())?;

    let mut ledger = BudgetLedger::new(store, Box::new(SystemClock), &settings);
    ledger.initialize()?;

    match cli.command {
        Commands::Status => {
            handle_status_command(&ledger, &settings)?;
        }
        Commands::Target(cmd) => {
            handle_target_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Meal(cmd) => {
            handle_meal_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Reset { yes } => {
            if !yes {
                println!("This deletes all recorded data. Re-run with --yes to confirm.");
            } else {
                ledger.reset()?;
                println!("All data cleared.");
            }
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!(
                "Default target: {}",
                settings
                    .default_monthly_target
                    .format_with_symbol(&settings.currency_symbol)
            );
            match settings.limits.per_meal_cap {
                Some(cap) => println!(
                    "Per-meal cap:   {}",
                    cap.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("Per-meal cap:   none"),
            }
            match settings.limits.monthly_target_cap {
                Some(cap) => println!(
                    "Target cap:     {}",
                    cap.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("Target cap:     none"),
            }
        }
    }

    Ok(())
}
