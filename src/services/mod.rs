//! Service layer for payplan
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, lookups and snapshots for the planner.

pub mod budget;
pub mod item;
pub mod plan;

pub use budget::BudgetService;
pub use item::ItemService;
pub use plan::{PlanService, PlanningSnapshot};
