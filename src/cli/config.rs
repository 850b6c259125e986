//! Config CLI commands

use clap::Subcommand;

use crate::config::{PlannerPaths, Settings};
use crate::error::{PlannerError, PlannerResult};
use crate::planning::Strategy;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Set the currency symbol used in output
    SetCurrency {
        /// Symbol, e.g. "$" or "€"
        symbol: String,
    },
    /// Set the strategy `plan` uses by default
    SetStrategy {
        /// avalanche, snowball or equal
        strategy: Strategy,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &PlannerPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> PlannerResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("payplan Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Items file:       {}", paths.items_file().display());
            println!("Budget file:      {}", paths.budget_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!(
                "  Default strategy: {} ({})",
                settings.default_strategy,
                settings.default_strategy.description()
            );
        }

        ConfigCommands::SetCurrency { symbol } => {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(PlannerError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            settings.currency_symbol = symbol.to_string();
            settings.save(paths)?;
            println!("Currency symbol set to '{}'", settings.currency_symbol);
        }

        ConfigCommands::SetStrategy { strategy } => {
            settings.default_strategy = strategy;
            settings.save(paths)?;
            println!("Default strategy set to {}", strategy);
        }
    }

    Ok(())
}
