//! Core data models for payplan
//!
//! This module contains the data structures the planner works on: savings
//! and debt items, and the monthly budget inputs.

pub mod amount;
pub mod budget;
pub mod ids;
pub mod item;

pub use amount::{parse_amount, AmountParseError};
pub use budget::BudgetInputs;
pub use ids::ItemId;
pub use item::{Item, ItemPatch, ItemValidationError};
