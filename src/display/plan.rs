//! Allocation plan display formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use super::money::{format_currency, format_percentage};
use crate::planning::AllocationPlan;

/// Explain why a plan came out empty, if it did
fn empty_reason(plan: &AllocationPlan<'_>, items_needing_payment: usize) -> Option<&'static str> {
    if items_needing_payment == 0 {
        Some("Nothing to pay: every item is complete.")
    } else if plan.available_money <= 0.0 || plan.available_money.is_nan() {
        Some("No money available this month. Adjust income and expenses, or set a custom amount.")
    } else {
        None
    }
}

/// Format one strategy's payment plan
pub fn format_plan(plan: &AllocationPlan<'_>, items_needing_payment: usize, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Payment Plan: {} ({})\n",
        plan.strategy,
        plan.strategy.description()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if let Some(reason) = empty_reason(plan, items_needing_payment) {
        output.push_str(reason);
        output.push('\n');
        return output;
    }

    for allocation in &plan.allocations {
        let item = allocation.item;
        let status = if allocation.completes_item() {
            "completes it".to_string()
        } else {
            format!("{} complete", format_percentage(allocation.progress_after()))
        };

        output.push_str(&format!(
            "  {:<30} {:>14}\n",
            item.name,
            format_currency(allocation.assign, symbol, true)
        ));
        output.push_str(&format!(
            "    {} of {} paid, {}\n",
            format_currency(item.paid, symbol, false),
            format_currency(item.amount, symbol, false),
            status
        ));
    }

    output.push_str(&format!("{}\n", "-".repeat(60)));
    output.push_str(&format!(
        "{:<32} {:>14}\n",
        "Available this month:",
        format_currency(plan.available_money, symbol, false)
    ));
    output.push_str(&format!(
        "{:<32} {:>14}\n",
        "Total assigned:",
        format_currency(plan.total_assigned, symbol, false)
    ));
    output.push_str(&format!(
        "{:<32} {:>14}\n",
        "Left after payments:",
        format_currency(plan.remaining_after_allocation, symbol, false)
    ));

    output
}

/// Format every strategy side by side, one column per strategy
pub fn format_plan_comparison(
    plans: &[AllocationPlan<'_>],
    items_needing_payment: usize,
    symbol: &str,
) -> String {
    let Some(first) = plans.first() else {
        return String::new();
    };

    if let Some(reason) = empty_reason(first, items_needing_payment) {
        return format!("{}\n", reason);
    }

    // Row order follows the first plan; other columns look items up by id
    let mut item_order: Vec<_> = Vec::new();
    for plan in plans {
        for allocation in &plan.allocations {
            if !item_order.iter().any(|(id, _)| *id == allocation.item.id) {
                item_order.push((allocation.item.id, allocation.item.name.clone()));
            }
        }
    }

    let mut builder = Builder::default();
    let mut header = vec!["Item".to_string()];
    header.extend(plans.iter().map(|plan| plan.strategy.to_string()));
    builder.push_record(header);

    for (id, name) in &item_order {
        let mut row = vec![name.clone()];
        for plan in plans {
            let cell = plan
                .allocations
                .iter()
                .find(|a| a.item.id == *id)
                .map(|a| format_currency(a.assign, symbol, false))
                .unwrap_or_else(|| "-".to_string());
            row.push(cell);
        }
        builder.push_record(row);
    }

    let mut totals = vec!["Total assigned".to_string()];
    totals.extend(
        plans
            .iter()
            .map(|plan| format_currency(plan.total_assigned, symbol, false)),
    );
    builder.push_record(totals);

    let mut left = vec!["Left over".to_string()];
    left.extend(
        plans
            .iter()
            .map(|plan| format_currency(plan.remaining_after_allocation, symbol, false)),
    );
    builder.push_record(left);

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!(
        "Available this month: {}\n{}\n",
        format_currency(first.available_money, symbol, false),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::planning::{allocate, allocate_all, Strategy};

    fn items() -> Vec<Item> {
        vec![Item::new("Hundred", 100.0, 0.0), Item::new("Fifty", 50.0, 0.0)]
    }

    #[test]
    fn test_format_plan() {
        let items = items();
        let plan = allocate(Strategy::Avalanche, &items, 120.0);
        let output = format_plan(&plan, 2, "$");

        assert!(output.contains("Payment Plan: Avalanche"));
        assert!(output.contains("+$100.00"));
        assert!(output.contains("completes it"));
        assert!(output.contains("+$20.00"));
        assert!(output.contains("40% complete"));
        assert!(output.contains("$120.00"));
    }

    #[test]
    fn test_format_plan_without_money() {
        let items = items();
        let plan = allocate(Strategy::Snowball, &items, 0.0);
        let output = format_plan(&plan, 2, "$");
        assert!(output.contains("No money available"));
    }

    #[test]
    fn test_format_plan_nothing_to_pay() {
        let items = vec![Item::new("Done", 10.0, 10.0)];
        let plan = allocate(Strategy::Equal, &items, 100.0);
        let output = format_plan(&plan, 0, "$");
        assert!(output.contains("Nothing to pay"));
    }

    #[test]
    fn test_format_comparison() {
        let items = items();
        let plans = allocate_all(&items, 120.0);
        let output = format_plan_comparison(&plans, 2, "$");

        assert!(output.contains("Avalanche"));
        assert!(output.contains("Snowball"));
        assert!(output.contains("Equal split"));
        assert!(output.contains("$110.00"));
        assert!(output.contains("$10.00"));
    }
}
