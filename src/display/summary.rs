//! Summary and budget-input display formatting

use super::money::{format_currency, format_percentage};
use crate::models::BudgetInputs;
use crate::planning::{MonthlyFigure, MonthsToSave, Summary};

/// Format the summary cards
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let money = |value: f64| format_currency(value, symbol, false);
    let mut output = String::new();

    output.push_str("Summary\n");
    output.push_str(&format!("{}\n", "=".repeat(48)));
    output.push_str(&format!(
        "{:<22} {:>14}   {}\n",
        "Total saved",
        money(summary.total_saved),
        "saved so far"
    ));
    output.push_str(&format!(
        "{:<22} {:>14}   {}\n",
        "Left to save",
        money(summary.total_to_save),
        "still to complete"
    ));
    output.push_str(&format!(
        "{:<22} {:>14}   {}\n",
        "Total budget",
        money(summary.total_budget),
        "sum of all goals"
    ));

    let (label, note) = match summary.monthly {
        MonthlyFigure::Custom(_) => ("Custom amount", "fixed monthly amount".to_string()),
        MonthlyFigure::Required(_) => (
            "Required monthly",
            format!("to finish in {} months", summary.months_to_save),
        ),
    };
    output.push_str(&format!(
        "{:<22} {:>14}   {}\n",
        label,
        format_currency(summary.monthly.amount(), symbol, true),
        note
    ));

    let estimate = if summary.available_money > 0.0 {
        let mut estimate = format!("estimated time: {}", months_phrase(summary.months_to_save));
        if summary.total_to_save > 0.0 {
            estimate.push_str(&format!(
                ", covers {} of what is left",
                format_percentage(summary.available_money / summary.total_to_save)
            ));
        }
        estimate
    } else {
        "adjust your income or expenses".to_string()
    };
    output.push_str(&format!(
        "{:<22} {:>14}   {}\n",
        "Monthly",
        format_currency(summary.available_money, symbol, true),
        estimate
    ));

    output
}

fn months_phrase(months: MonthsToSave) -> String {
    match months {
        MonthsToSave::Months(1) => "1 month".to_string(),
        other => format!("{} months", other),
    }
}

/// Format the budget inputs and the derived available money
pub fn format_budget_inputs(inputs: &BudgetInputs, symbol: &str) -> String {
    let money = |value: f64| format_currency(value, symbol, false);
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("{:<22} {:>16}\n", "Income:", money(inputs.income)));
    output.push_str(&format!("{:<22} {:>16}\n", "Fixed expenses:", money(inputs.expenses)));
    output.push_str(&format!("{:<22} {:>16}\n", "Non-usable:", money(inputs.non_usable)));
    output.push_str(&format!(
        "{:<22} {:>16}{}\n",
        "Custom amount:",
        money(inputs.custom_amount),
        if inputs.use_custom_amount { "  (in use)" } else { "" }
    ));
    output.push_str(&format!("{}\n", "-".repeat(40)));
    output.push_str(&format!(
        "{:<22} {:>16}\n",
        "Available to plan:",
        format_currency(inputs.available_money(), symbol, true)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::planning::summarize;

    #[test]
    fn test_format_summary_required() {
        let items = vec![Item::new("TV", 1000.0, 250.0)];
        let output = format_summary(&summarize(&items, 400.0, false), "$");

        assert!(output.contains("$250.00"));
        assert!(output.contains("$750.00"));
        assert!(output.contains("Required monthly"));
        assert!(output.contains("+$375.00"));
        assert!(output.contains("to finish in 2 months"));
        assert!(output.contains("estimated time: 2 months"));
        assert!(output.contains("covers 53% of what is left"));
    }

    #[test]
    fn test_format_summary_coverage_needs_balance() {
        let items = vec![Item::new("TV", 300.0, 300.0)];
        let output = format_summary(&summarize(&items, 400.0, false), "$");

        assert!(output.contains("estimated time: 0 months"));
        assert!(!output.contains("covers"));
    }

    #[test]
    fn test_format_summary_without_money() {
        let items = vec![Item::new("TV", 1000.0, 0.0)];
        let output = format_summary(&summarize(&items, -20.0, false), "$");

        assert!(output.contains("to finish in ∞ months"));
        assert!(output.contains("adjust your income"));
        assert!(output.contains("-$20.00"));
    }

    #[test]
    fn test_format_summary_custom() {
        let items = vec![Item::new("TV", 100.0, 0.0)];
        let output = format_summary(&summarize(&items, 100.0, true), "$");

        assert!(output.contains("Custom amount"));
        assert!(output.contains("estimated time: 1 month"));
    }

    #[test]
    fn test_format_budget_inputs() {
        let mut inputs = BudgetInputs::default();
        inputs.set_income(2000.0);
        inputs.set_expenses(1500.0);
        let output = format_budget_inputs(&inputs, "$");

        assert!(output.contains("$2,000.00"));
        assert!(output.contains("+$500.00"));
        assert!(!output.contains("(in use)"));
    }
}
