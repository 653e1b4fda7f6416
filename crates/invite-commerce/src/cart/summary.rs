//! Derived cart state.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Everything the cart badge and footer show, computed from the lines.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of quantities, shown on the badge.
    pub item_count: u64,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Any line is below its minimum quantity.
    pub minimum_warning: bool,
    /// Checkout button is usable.
    pub checkout_enabled: bool,
}

impl CartSummary {
    /// Whether the badge should be shown.
    pub fn show_badge(&self) -> bool {
        self.item_count > 0
    }

    /// Whether the empty-state placeholder replaces the line list.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
