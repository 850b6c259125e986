//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod item;
pub mod plan;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use item::{handle_item_command, ItemCommands};
pub use plan::{handle_plan_command, handle_summary_command, PlanArgs, SummaryArgs};

use crate::error::{PlannerError, PlannerResult};
use crate::models::parse_amount;

/// Parse a money argument, naming the field in the error
pub(crate) fn parse_money_arg(field: &str, value: &str) -> PlannerResult<f64> {
    parse_amount(value).map_err(|e| {
        PlannerError::Validation(format!(
            "Invalid {}: '{}'. Use a format like '1500' or '1,500.00'. {}",
            field, value, e
        ))
    })
}
