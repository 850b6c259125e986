//! Budget CLI commands
//!
//! Sets the monthly income, expenses, non-usable reserve and the optional
//! custom amount that together decide how much money gets planned.

use clap::Subcommand;

use super::parse_money_arg;
use crate::config::settings::Settings;
use crate::display::format_budget_inputs;
use crate::error::PlannerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget inputs and available money
    Show,
    /// Set monthly income
    Income {
        /// Amount (e.g., "3200" or "3,200.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set fixed monthly expenses
    Expenses {
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set money that must not be allocated
    NonUsable {
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set a custom monthly amount and use it instead of income minus expenses
    Custom {
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Use income minus expenses again instead of the custom amount
    UseComputed,
    /// Switch between the custom amount and the computed one
    ToggleCustom,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PlannerResult<()> {
    let service = BudgetService::new(storage);

    let inputs = match cmd {
        BudgetCommands::Show => service.inputs()?,
        BudgetCommands::Income { amount } => {
            service.set_income(parse_money_arg("income", &amount)?)?
        }
        BudgetCommands::Expenses { amount } => {
            service.set_expenses(parse_money_arg("expenses", &amount)?)?
        }
        BudgetCommands::NonUsable { amount } => {
            service.set_non_usable(parse_money_arg("non-usable", &amount)?)?
        }
        BudgetCommands::Custom { amount } => {
            service.set_custom_amount(parse_money_arg("custom amount", &amount)?)?
        }
        BudgetCommands::UseComputed => service.use_computed_amount()?,
        BudgetCommands::ToggleCustom => service.toggle_custom_amount()?,
    };

    print!("{}", format_budget_inputs(&inputs, &settings.currency_symbol));
    Ok(())
}
