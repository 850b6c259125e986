//! Monthly budget inputs
//!
//! Income, fixed expenses and a non-usable reserve determine how much money
//! is available each month, unless the user pins a custom amount instead.

use serde::{Deserialize, Serialize};

use super::amount::non_negative;

/// The figures the available-money calculation is derived from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetInputs {
    /// Monthly income
    pub income: f64,

    /// Fixed monthly expenses
    pub expenses: f64,

    /// Money set aside that must not be allocated
    pub non_usable: f64,

    /// User-pinned monthly amount
    pub custom_amount: f64,

    /// Whether `custom_amount` replaces the derived figure
    pub use_custom_amount: bool,
}

impl BudgetInputs {
    pub fn set_income(&mut self, value: f64) {
        self.income = non_negative(value);
    }

    pub fn set_expenses(&mut self, value: f64) {
        self.expenses = non_negative(value);
    }

    pub fn set_non_usable(&mut self, value: f64) {
        self.non_usable = non_negative(value);
    }

    pub fn set_custom_amount(&mut self, value: f64) {
        self.custom_amount = non_negative(value);
    }

    pub fn toggle_custom_amount(&mut self) {
        self.use_custom_amount = !self.use_custom_amount;
    }

    /// Money left over after expenses and the non-usable reserve
    ///
    /// May be negative; the planner treats anything `<= 0` as nothing to
    /// distribute.
    pub fn derived_money(&self) -> f64 {
        self.income - self.expenses - self.non_usable
    }

    /// The figure handed to the planner this month
    pub fn available_money(&self) -> f64 {
        if self.use_custom_amount {
            self.custom_amount
        } else {
            self.derived_money()
        }
    }

    /// Replace any non-finite or negative values loaded from disk
    pub fn sanitized(mut self) -> Self {
        self.income = non_negative(self.income);
        self.expenses = non_negative(self.expenses);
        self.non_usable = non_negative(self.non_usable);
        self.custom_amount = non_negative(self.custom_amount);
        self
    }
}
