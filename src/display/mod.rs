//! Display formatting for terminal output
//!
//! Turns items, plans and summaries into text. Rounding for display happens
//! here and nowhere else.

pub mod item;
pub mod money;
pub mod plan;
pub mod summary;

pub use item::{format_item_details, format_item_list};
pub use money::{format_currency, format_percentage};
pub use plan::{format_plan, format_plan_comparison};
pub use summary::{format_budget_inputs, format_summary};
