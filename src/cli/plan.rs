//! Plan and summary CLI commands
//!
//! Show how this month's money would be split across items, and the overall
//! savings summary. Both are read-only.

use clap::Args;

use super::parse_money_arg;
use crate::config::settings::Settings;
use crate::display::{format_plan, format_plan_comparison, format_summary};
use crate::error::PlannerResult;
use crate::planning::Strategy;
use crate::services::PlanService;
use crate::storage::Storage;

/// Arguments for `payplan plan`
#[derive(Args)]
pub struct PlanArgs {
    /// Strategy: avalanche, snowball or equal (defaults to the configured one)
    #[arg(short, long, conflicts_with = "all")]
    pub strategy: Option<Strategy>,

    /// Compare all three strategies side by side
    #[arg(long)]
    pub all: bool,

    /// Plan with this monthly amount instead of the stored budget (not saved)
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Print JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `payplan summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Print JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Handle `payplan plan`
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    args: PlanArgs,
) -> PlannerResult<()> {
    let mut snapshot = PlanService::new(storage).snapshot()?;
    if let Some(amount) = args.amount.as_deref() {
        snapshot = snapshot.with_available_money(parse_money_arg("amount", amount)?);
    }

    let symbol = settings.currency_symbol.as_str();
    let pending = snapshot.items_needing_payment();

    if args.all {
        let plans = snapshot.plan_all();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plans)?);
        } else {
            print!("{}", format_plan_comparison(&plans, pending, symbol));
        }
        return Ok(());
    }

    let strategy = args.strategy.unwrap_or(settings.default_strategy);
    let plan = snapshot.plan(strategy);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", format_plan(&plan, pending, symbol));
    }

    Ok(())
}

/// Handle `payplan summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> PlannerResult<()> {
    let summary = PlanService::new(storage).snapshot()?.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary, &settings.currency_symbol));
    }

    Ok(())
}
