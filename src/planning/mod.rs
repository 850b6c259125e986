//! Payment planning
//!
//! The computational core: the allocation engine that splits available money
//! across items, and the summary calculator. Both are pure functions over a
//! snapshot of items and an available-money figure; callers own the state.

pub mod allocation;
pub mod strategy;
pub mod summary;

pub use allocation::{allocate, allocate_all, Allocation, AllocationPlan};
pub use strategy::Strategy;
pub use summary::{summarize, MonthlyFigure, MonthsToSave, Summary};
