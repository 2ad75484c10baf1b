//! Cart pricing calculations.

use serde::{Deserialize, Serialize};
use turbo_money::Money;

use crate::ids::CartItemId;

/// An extra price row added by a cart or cart item model (surcharge,
/// discount, tax).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraRow {
    /// Human-readable label.
    pub label: String,
    /// Signed amount added to the total.
    pub amount: Money,
}

impl ExtraRow {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Pricing breakdown for a single cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Cart item ID.
    pub item_id: CartItemId,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// Subtotal before line extras.
    pub line_subtotal: Money,
    pub extra_rows: Vec<ExtraRow>,
    /// Subtotal plus line extras.
    pub line_total: Money,
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-item breakdown.
    pub lines: Vec<LineItemPricing>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Cart-level extras.
    pub extra_rows: Vec<ExtraRow>,
    /// Subtotal plus cart extras.
    pub total: Money,
}

impl CartPricing {
    /// Lines whose total has no price.
    pub fn unpriced_lines(&self) -> impl Iterator<Item = &LineItemPricing> {
        self.lines.iter().filter(|l| l.line_total.is_nan())
    }

    /// Check if every line has a price.
    pub fn is_fully_priced(&self) -> bool {
        self.unpriced_lines().next().is_none()
    }
}

/// Apply extra rows on top of a base amount.
pub(crate) fn apply_extras(base: Money, rows: &[ExtraRow]) -> Result<Money, turbo_money::MoneyError> {
    rows.iter().try_fold(base, |acc, row| acc.checked_add(&row.amount))
}
