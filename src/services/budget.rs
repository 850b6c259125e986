//! Budget service
//!
//! Updates the monthly budget inputs (income, expenses, non-usable reserve
//! and the custom-amount override) and reports the money available to plan.

use crate::error::PlannerResult;
use crate::models::BudgetInputs;
use crate::storage::Storage;

/// Service for the monthly budget inputs
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn inputs(&self) -> PlannerResult<BudgetInputs> {
        self.storage.budget.get()
    }

    /// Money handed to the planner: the custom amount when enabled,
    /// otherwise income minus expenses minus the non-usable reserve
    pub fn available_money(&self) -> PlannerResult<f64> {
        Ok(self.inputs()?.available_money())
    }

    pub fn set_income(&self, value: f64) -> PlannerResult<BudgetInputs> {
        self.update("income", |inputs| inputs.set_income(value))
    }

    pub fn set_expenses(&self, value: f64) -> PlannerResult<BudgetInputs> {
        self.update("expenses", |inputs| inputs.set_expenses(value))
    }

    pub fn set_non_usable(&self, value: f64) -> PlannerResult<BudgetInputs> {
        self.update("non_usable", |inputs| inputs.set_non_usable(value))
    }

    /// Set the custom monthly amount and switch to using it
    pub fn set_custom_amount(&self, value: f64) -> PlannerResult<BudgetInputs> {
        self.update("custom_amount", |inputs| {
            inputs.set_custom_amount(value);
            inputs.use_custom_amount = true;
        })
    }

    /// Go back to the figure derived from income and expenses
    pub fn use_computed_amount(&self) -> PlannerResult<BudgetInputs> {
        self.update("use_custom_amount", |inputs| inputs.use_custom_amount = false)
    }

    pub fn toggle_custom_amount(&self) -> PlannerResult<BudgetInputs> {
        self.update("use_custom_amount", BudgetInputs::toggle_custom_amount)
    }

    fn update<F>(&self, field: &str, change: F) -> PlannerResult<BudgetInputs>
    where
        F: FnOnce(&mut BudgetInputs),
    {
        let mut inputs = self.storage.budget.get()?;
        change(&mut inputs);

        self.storage.budget.set(inputs.clone())?;
        self.storage.budget.save()?;

        tracing::info!(
            field,
            available_money = inputs.available_money(),
            "budget input updated"
        );
        Ok(inputs)
    }
}
