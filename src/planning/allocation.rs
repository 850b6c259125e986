//! Allocation engine
//!
//! Distributes a month's available money across the items that still need
//! payment. Every function here is pure: it reads a snapshot of items and
//! returns derived results without touching storage.
//!
//! Only items with `amount - paid > 0` take part. When the available money
//! is not positive, or nothing needs payment, every strategy yields an empty
//! allocation.

use serde::Serialize;

use super::strategy::Strategy;
use crate::models::Item;

/// Money assigned to one item under a strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation<'a> {
    pub item: &'a Item,
    /// Always `0 < assign <= item.remaining()`
    pub assign: f64,
}

impl Allocation<'_> {
    /// Whether this payment finishes the item
    pub fn completes_item(&self) -> bool {
        self.assign >= self.item.remaining()
    }

    /// Fraction of the target reached after this payment, capped at 1.0
    pub fn progress_after(&self) -> f64 {
        if self.item.amount > 0.0 {
            ((self.item.paid + self.assign) / self.item.amount).min(1.0)
        } else {
            0.0
        }
    }
}

/// The full result of running one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationPlan<'a> {
    pub strategy: Strategy,
    pub available_money: f64,
    pub allocations: Vec<Allocation<'a>>,
    pub total_assigned: f64,
    /// `available_money - total_assigned`
    pub remaining_after_allocation: f64,
}

impl AllocationPlan<'_> {
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

/// Run a strategy and compute the plan totals
pub fn allocate<'a>(
    strategy: Strategy,
    items: &'a [Item],
    available_money: f64,
) -> AllocationPlan<'a> {
    let allocations = match strategy {
        Strategy::Avalanche => avalanche(items, available_money),
        Strategy::Snowball => snowball(items, available_money),
        Strategy::Equal => equal_split(items, available_money),
    };
    let total_assigned = total_assigned(&allocations);

    tracing::debug!(
        strategy = %strategy,
        items = items.len(),
        allocated = allocations.len(),
        available_money,
        total_assigned,
        "allocation computed"
    );

    AllocationPlan {
        strategy,
        available_money,
        allocations,
        total_assigned,
        remaining_after_allocation: available_money - total_assigned,
    }
}

/// Run every strategy, in [`Strategy::ALL`] order
pub fn allocate_all(items: &[Item], available_money: f64) -> [AllocationPlan<'_>; 3] {
    Strategy::ALL.map(|strategy| allocate(strategy, items, available_money))
}

/// Largest remaining balance first
pub fn avalanche(items: &[Item], available_money: f64) -> Vec<Allocation<'_>> {
    if !has_money(available_money) {
        return Vec::new();
    }

    let mut ordered = needing_payment(items);
    // sort_by is stable, so equal balances keep their input order
    ordered.sort_by(|a, b| b.remaining().total_cmp(&a.remaining()));
    fill_in_order(ordered, available_money)
}

/// Smallest remaining balance first
pub fn snowball(items: &[Item], available_money: f64) -> Vec<Allocation<'_>> {
    if !has_money(available_money) {
        return Vec::new();
    }

    let mut ordered = needing_payment(items);
    ordered.sort_by(|a, b| a.remaining().total_cmp(&b.remaining()));
    fill_in_order(ordered, available_money)
}

/// One flat share per item, capped at each item's remaining balance
///
/// Money an item cannot absorb is not passed on to the others, so the total
/// assigned can fall short of `available_money` while items still need money.
pub fn equal_split(items: &[Item], available_money: f64) -> Vec<Allocation<'_>> {
    if !has_money(available_money) {
        return Vec::new();
    }

    let pending = needing_payment(items);
    if pending.is_empty() {
        return Vec::new();
    }

    let per_item = available_money / pending.len() as f64;
    pending
        .into_iter()
        .map(|item| Allocation {
            item,
            assign: per_item.min(item.remaining()),
        })
        .filter(|allocation| allocation.assign > 0.0)
        .collect()
}

/// Sum of the assigned amounts
pub fn total_assigned(allocations: &[Allocation<'_>]) -> f64 {
    allocations.iter().map(|a| a.assign).sum()
}

// NaN compares false, so it counts as no money
fn has_money(available_money: f64) -> bool {
    available_money > 0.0
}

fn needing_payment(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.needs_payment()).collect()
}

/// Greedy pass: each item takes as much as it needs until the money runs out
fn fill_in_order(ordered: Vec<&Item>, available_money: f64) -> Vec<Allocation<'_>> {
    let mut remaining_money = available_money;

    ordered
        .into_iter()
        .filter_map(|item| {
            let assign = remaining_money.min(item.remaining());
            // floor at zero so rounding error never leaves negative money
            remaining_money = (remaining_money - assign).max(0.0);
            (assign > 0.0).then_some(Allocation { item, assign })
        })
        .collect()
}
