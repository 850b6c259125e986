//! Item model
//!
//! An item is one savings goal or debt: a target `amount` and how much has
//! been `paid` toward it so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::non_negative;
use super::ids::ItemId;

/// A savings goal or debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, stable across edits
    pub id: ItemId,

    /// Display label
    pub name: String,

    /// Total target value
    pub amount: f64,

    /// Amount already contributed or paid
    #[serde(default)]
    pub paid: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item; callers validate with [`Item::validate_new`]
    pub fn new(name: impl Into<String>, amount: f64, paid: f64) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            name: name.into(),
            amount,
            paid,
            created_at: now,
            updated_at: now,
        }
    }

    /// `amount - paid`, unclamped
    ///
    /// Negative when an edit left the item over-paid.
    pub fn remaining(&self) -> f64 {
        self.amount - self.paid
    }

    /// Whether the item still needs money
    pub fn needs_payment(&self) -> bool {
        self.remaining() > 0.0
    }

    pub fn is_complete(&self) -> bool {
        !self.needs_payment()
    }

    /// Fraction paid so far, `paid / amount`
    ///
    /// Zero when `amount` is not positive. May exceed 1.0 for over-paid items.
    pub fn progress(&self) -> f64 {
        if self.amount > 0.0 {
            self.paid / self.amount
        } else {
            0.0
        }
    }

    /// Validate a freshly created item
    ///
    /// Only applied at creation; later edits are not re-validated, so
    /// `paid <= amount` may stop holding afterwards.
    pub fn validate_new(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ItemValidationError::NonPositiveAmount);
        }

        if !self.paid.is_finite() || self.paid < 0.0 {
            return Err(ItemValidationError::NegativePaid);
        }

        if self.paid > self.amount {
            return Err(ItemValidationError::PaidExceedsAmount);
        }

        Ok(())
    }

    /// Replace the fields present in `patch`
    ///
    /// Amounts are clamped to zero from below. `paid` may still end up above
    /// `amount`.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(amount) = patch.amount {
            self.amount = non_negative(amount);
        }
        if let Some(paid) = patch.paid {
            self.paid = non_negative(paid);
        }
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} of {:.2})", self.name, self.paid, self.amount)
    }
}

/// Partial update for an item; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.paid.is_none()
    }
}

/// Validation errors for new items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NonPositiveAmount,
    NegativePaid,
    PaidExceedsAmount,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name is required"),
            Self::NonPositiveAmount => write!(f, "Total amount must be greater than 0"),
            Self::NegativePaid => write!(f, "Paid amount cannot be negative"),
            Self::PaidExceedsAmount => write!(f, "Paid amount cannot exceed the total amount"),
        }
    }
}

impl std::error::Error for ItemValidationError {}
