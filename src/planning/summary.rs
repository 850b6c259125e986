//! Summary and projection figures
//!
//! Aggregates over the whole item collection, plus an estimate of how many
//! months the outstanding balance will take at the current monthly amount.
//! Like the allocation engine, everything here is a pure function.

use serde::Serialize;
use std::fmt;

use crate::models::Item;

/// Months needed to cover the outstanding balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MonthsToSave {
    Months(u64),
    /// No positive monthly amount, so the balance is never covered
    Never,
}

impl MonthsToSave {
    pub fn months(&self) -> Option<u64> {
        match self {
            Self::Months(n) => Some(*n),
            Self::Never => None,
        }
    }
}

impl fmt::Display for MonthsToSave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{}", n),
            Self::Never => write!(f, "∞"),
        }
    }
}

/// The monthly figure shown alongside the totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum MonthlyFigure {
    /// The user pinned a fixed monthly amount
    Custom(f64),
    /// Even monthly payment that finishes in `months_to_save` months
    Required(f64),
}

impl MonthlyFigure {
    pub fn amount(&self) -> f64 {
        match self {
            Self::Custom(amount) | Self::Required(amount) => *amount,
        }
    }
}

/// Totals and projection for a set of items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_saved: f64,
    pub total_to_save: f64,
    pub total_budget: f64,
    pub available_money: f64,
    pub months_to_save: MonthsToSave,
    pub monthly: MonthlyFigure,
}

/// Sum of `paid` over every item
pub fn total_saved(items: &[Item]) -> f64 {
    items.iter().map(|item| item.paid).sum()
}

/// Sum of outstanding balances, ignoring over-paid items
pub fn total_to_save(items: &[Item]) -> f64 {
    items.iter().map(|item| item.remaining().max(0.0)).sum()
}

/// Sum of `amount - paid` without clamping
///
/// Over-paid items pull this below [`total_to_save`] and can make it
/// negative. Not shown to users.
pub fn net_outstanding(items: &[Item]) -> f64 {
    items.iter().map(|item| item.remaining()).sum()
}

/// Sum of target amounts over every item
pub fn total_budget(items: &[Item]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

/// `ceil(total_to_save / available_money)`
///
/// Nothing left to save is zero months whatever the monthly amount.
pub fn months_to_save(total_to_save: f64, available_money: f64) -> MonthsToSave {
    if total_to_save <= 0.0 {
        return MonthsToSave::Months(0);
    }

    if available_money > 0.0 {
        MonthsToSave::Months((total_to_save / available_money).ceil() as u64)
    } else {
        MonthsToSave::Never
    }
}

/// Even monthly payment over the projected number of months, rounded up
///
/// Display only; the allocation engine always works from the real
/// available money.
pub fn required_monthly_amount(total_to_save: f64, available_money: f64) -> f64 {
    match months_to_save(total_to_save, available_money) {
        MonthsToSave::Months(0) | MonthsToSave::Never => 0.0,
        MonthsToSave::Months(n) => (total_to_save / n as f64).ceil(),
    }
}

/// Compute every summary figure
pub fn summarize(items: &[Item], available_money: f64, use_custom_amount: bool) -> Summary {
    let total_to_save = total_to_save(items);
    let months_to_save = months_to_save(total_to_save, available_money);

    let monthly = if use_custom_amount {
        MonthlyFigure::Custom(available_money)
    } else {
        MonthlyFigure::Required(required_monthly_amount(total_to_save, available_money))
    };

    let summary = Summary {
        total_saved: total_saved(items),
        total_to_save,
        total_budget: total_budget(items),
        available_money,
        months_to_save,
        monthly,
    };

    tracing::debug!(
        items = items.len(),
        total_to_save,
        months = %summary.months_to_save,
        "summary computed"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("TV", 1000.0, 250.0),
            Item::new("Loan", 500.0, 0.0),
            Item::new("Trip", 300.0, 300.0),
        ]
    }

    #[test]
    fn test_totals() {
        let items = items();
        assert_eq!(total_saved(&items), 550.0);
        assert_eq!(total_to_save(&items), 1250.0);
        assert_eq!(total_budget(&items), 1800.0);
    }

    #[test]
    fn test_saved_plus_outstanding_equals_budget_without_over_payment() {
        let items = items();
        let sum = total_saved(&items) + net_outstanding(&items);
        assert!((sum - total_budget(&items)).abs() < 1e-9);
    }

    #[test]
    fn test_over_paid_item_is_clamped_only_in_total_to_save() {
        let items = vec![Item::new("Over", 100.0, 160.0), Item::new("Open", 50.0, 10.0)];
        assert_eq!(total_to_save(&items), 40.0);
        assert_eq!(net_outstanding(&items), -20.0);
        assert_eq!(total_saved(&items), 170.0);
    }

    #[test]
    fn test_months_to_save() {
        assert_eq!(months_to_save(1250.0, 400.0), MonthsToSave::Months(4));
        assert_eq!(months_to_save(1200.0, 400.0), MonthsToSave::Months(3));
        assert_eq!(months_to_save(1.0, 400.0), MonthsToSave::Months(1));
        assert_eq!(months_to_save(1250.0, 0.0), MonthsToSave::Never);
        assert_eq!(months_to_save(1250.0, -10.0), MonthsToSave::Never);
    }

    #[test]
    fn test_nothing_to_save_is_zero_months() {
        assert_eq!(months_to_save(0.0, 400.0), MonthsToSave::Months(0));
        assert_eq!(months_to_save(0.0, 0.0), MonthsToSave::Months(0));
        assert_eq!(months_to_save(0.0, -100.0), MonthsToSave::Months(0));
    }

    #[test]
    fn test_required_monthly_amount() {
        // 1250 over ceil(1250/400) = 4 months
        assert_eq!(required_monthly_amount(1250.0, 400.0), 313.0);
        assert_eq!(required_monthly_amount(1200.0, 400.0), 400.0);
        assert_eq!(required_monthly_amount(1250.0, 0.0), 0.0);
        assert_eq!(required_monthly_amount(0.0, 400.0), 0.0);
    }

    #[test]
    fn test_summarize_required() {
        let summary = summarize(&items(), 400.0, false);
        assert_eq!(summary.total_saved, 550.0);
        assert_eq!(summary.total_to_save, 1250.0);
        assert_eq!(summary.total_budget, 1800.0);
        assert_eq!(summary.months_to_save, MonthsToSave::Months(4));
        assert_eq!(summary.monthly, MonthlyFigure::Required(313.0));
    }

    #[test]
    fn test_summarize_custom() {
        let summary = summarize(&items(), 250.0, true);
        assert_eq!(summary.months_to_save, MonthsToSave::Months(5));
        assert_eq!(summary.monthly, MonthlyFigure::Custom(250.0));
        assert_eq!(summary.monthly.amount(), 250.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], -75.0, false);
        assert_eq!(summary.total_saved, 0.0);
        assert_eq!(summary.total_to_save, 0.0);
        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.months_to_save, MonthsToSave::Months(0));
        assert_eq!(summary.monthly, MonthlyFigure::Required(0.0));
    }

    #[test]
    fn test_months_display_and_json() {
        assert_eq!(MonthsToSave::Months(3).to_string(), "3");
        assert_eq!(MonthsToSave::Never.to_string(), "∞");
        assert_eq!(MonthsToSave::Never.months(), None);

        let json = serde_json::to_value(summarize(&items(), 0.0, false)).unwrap();
        assert!(json["months_to_save"].is_null());
        assert_eq!(json["monthly"]["kind"], "required");
        assert_eq!(json["monthly"]["amount"], 0.0);
    }
}
