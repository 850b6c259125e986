//! Planning service
//!
//! Takes a snapshot of the stored items and budget inputs and hands it to the
//! pure planning functions. The snapshot owns the data, so plans can borrow
//! from it while the storage stays untouched.

use crate::error::PlannerResult;
use crate::models::{BudgetInputs, Item};
use crate::planning::{self, AllocationPlan, Strategy, Summary};
use crate::storage::Storage;

/// Everything the planner reads, captured at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningSnapshot {
    pub items: Vec<Item>,
    pub inputs: BudgetInputs,
    /// What-if override for the available money; never persisted
    pub money_override: Option<f64>,
}

impl PlanningSnapshot {
    pub fn new(items: Vec<Item>, inputs: BudgetInputs) -> Self {
        Self {
            items,
            inputs,
            money_override: None,
        }
    }

    /// Plan with a different monthly amount without touching the inputs
    pub fn with_available_money(mut self, money: f64) -> Self {
        self.money_override = Some(crate::models::amount::sanitize(money));
        self
    }

    pub fn available_money(&self) -> f64 {
        self.money_override
            .unwrap_or_else(|| self.inputs.available_money())
    }

    /// Whether the monthly amount is a fixed figure rather than derived
    pub fn uses_fixed_amount(&self) -> bool {
        self.money_override.is_some() || self.inputs.use_custom_amount
    }

    pub fn items_needing_payment(&self) -> usize {
        self.items.iter().filter(|item| item.needs_payment()).count()
    }

    pub fn plan(&self, strategy: Strategy) -> AllocationPlan<'_> {
        planning::allocate(strategy, &self.items, self.available_money())
    }

    pub fn plan_all(&self) -> [AllocationPlan<'_>; 3] {
        planning::allocate_all(&self.items, self.available_money())
    }

    pub fn summary(&self) -> Summary {
        planning::summarize(&self.items, self.available_money(), self.uses_fixed_amount())
    }
}

/// Service that builds planning snapshots from storage
pub struct PlanService<'a> {
    storage: &'a Storage,
}

impl<'a> PlanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn snapshot(&self) -> PlannerResult<PlanningSnapshot> {
        Ok(PlanningSnapshot::new(
            self.storage.items.get_all()?,
            self.storage.budget.get()?,
        ))
    }
}
