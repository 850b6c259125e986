//! Item display formatting
//!
//! Formats savings goals and debts for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::money::{format_currency, format_percentage};
use crate::models::Item;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

impl ItemRow {
    fn new(item: &Item, symbol: &str) -> Self {
        let progress = if item.is_complete() {
            "done".to_string()
        } else {
            format_percentage(item.progress())
        };

        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            paid: format_currency(item.paid, symbol, false),
            amount: format_currency(item.amount, symbol, false),
            remaining: format_currency(item.remaining().max(0.0), symbol, false),
            progress,
        }
    }
}

/// Format items as a table
pub fn format_item_list(items: &[Item], symbol: &str) -> String {
    if items.is_empty() {
        return "No items yet.\n\nRun 'payplan item add <name> <amount>' to add one.\n".to_string();
    }

    let rows: Vec<ItemRow> = items.iter().map(|item| ItemRow::new(item, symbol)).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single item's details
pub fn format_item_details(item: &Item, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item: {}\n", item.name));
    output.push_str(&format!("  ID:         {}\n", item.id));
    output.push_str(&format!(
        "  Amount:     {}\n",
        format_currency(item.amount, symbol, false)
    ));
    output.push_str(&format!(
        "  Paid:       {}\n",
        format_currency(item.paid, symbol, false)
    ));
    output.push_str(&format!(
        "  Remaining:  {}\n",
        format_currency(item.remaining(), symbol, false)
    ));
    output.push_str(&format!(
        "  Progress:   {}\n",
        format_percentage(item.progress())
    ));
    if item.paid > item.amount {
        output.push_str("  Note:       paid exceeds the total amount\n");
    }
    output.push_str(&format!(
        "  Created:    {}\n",
        item.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
