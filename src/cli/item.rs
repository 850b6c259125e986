//! Item CLI commands
//!
//! Implements CLI commands for managing savings goals and debts.

use clap::Subcommand;

use super::parse_money_arg;
use crate::config::settings::Settings;
use crate::display::{format_currency, format_item_details, format_item_list};
use crate::error::PlannerResult;
use crate::models::ItemPatch;
use crate::services::ItemService;
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a savings goal or debt
    Add {
        /// Item name
        name: String,
        /// Total target amount (e.g., "1500" or "1,500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Amount already paid
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        paid: String,
    },
    /// List all items
    #[command(alias = "ls")]
    List,
    /// Show item details
    Show {
        /// Item name or ID
        item: String,
    },
    /// Edit an item
    Edit {
        /// Item name or ID
        item: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New total amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New paid amount
        #[arg(short, long, allow_hyphen_values = true)]
        paid: Option<String>,
    },
    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Item name or ID
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ItemCommands,
) -> PlannerResult<()> {
    let service = ItemService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ItemCommands::Add { name, amount, paid } => {
            let amount = parse_money_arg("amount", &amount)?;
            let paid = parse_money_arg("paid", &paid)?;

            let item = service.create(&name, amount, paid)?;

            println!("Added item: {}", item.name);
            println!("  Amount: {}", format_currency(item.amount, symbol, false));
            println!("  Paid:   {}", format_currency(item.paid, symbol, false));
            println!("  ID:     {}", item.id);
        }

        ItemCommands::List => {
            let items = service.list()?;
            print!("{}", format_item_list(&items, symbol));
        }

        ItemCommands::Show { item } => {
            let found = service.resolve(&item)?;
            print!("{}", format_item_details(&found, symbol));
        }

        ItemCommands::Edit {
            item,
            name,
            amount,
            paid,
        } => {
            let found = service.resolve(&item)?;

            let patch = ItemPatch {
                name,
                amount: amount
                    .as_deref()
                    .map(|s| parse_money_arg("amount", s))
                    .transpose()?,
                paid: paid
                    .as_deref()
                    .map(|s| parse_money_arg("paid", s))
                    .transpose()?,
            };

            if patch.is_empty() {
                println!("No changes specified. Use --name, --amount or --paid.");
                return Ok(());
            }

            let updated = service.update(found.id, &patch)?;
            println!("Updated item: {}", updated.name);
            if updated.paid > updated.amount {
                println!("  Note: paid exceeds the total amount; it will not receive payments.");
            }
        }

        ItemCommands::Remove { item } => {
            let found = service.resolve(&item)?;
            let removed = service.remove(found.id)?;
            println!("Removed item: {}", removed.name);
        }
    }

    Ok(())
}
