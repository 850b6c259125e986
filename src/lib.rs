//! payplan - Terminal savings and debt payoff planner
//!
//! Users record savings goals and debts (each with a target amount and the
//! amount paid so far) plus their monthly income and expenses. The library
//! works out how much money is available each month and proposes how to split
//! it across items using one of three strategies: avalanche (largest balance
//! first), snowball (smallest balance first) or an equal split.
//!
//! # Architecture
//!
//! - `planning`: the pure allocation engine and summary calculator
//! - `models`: items, budget inputs and amount helpers
//! - `storage`: JSON file storage layer
//! - `services`: business logic on top of storage
//! - `display`: terminal formatting
//! - `cli`: clap subcommands and handlers
//! - `config`: paths and user settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use payplan::models::Item;
//! use payplan::planning::{allocate, Strategy};
//!
//! let items = vec![Item::new("Laptop", 100.0, 0.0), Item::new("Phone", 50.0, 0.0)];
//! let plan = allocate(Strategy::Snowball, &items, 120.0);
//!
//! assert_eq!(plan.allocations[0].item.name, "Phone");
//! assert_eq!(plan.total_assigned, 120.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod planning;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
