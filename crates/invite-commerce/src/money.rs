//! Money type for representing rupee amounts.
//!
//! Every price in the catalog is a whole number of rupees, so amounts are
//! kept as integers with no minor unit. Arithmetic saturates instead of
//! overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol prefixed to every displayed amount.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A whole-rupee monetary value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in whole rupees.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, saturating at the i64 bounds.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount.saturating_mul(i64::from(quantity)))
    }

    /// Format as shown on product cards (e.g., "₹399").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SYMBOL, self.amount)
    }

    /// Format with two decimals as shown in the cart (e.g., "₹399.00").
    pub fn display_fixed(&self) -> String {
        format!("{}{}.00", RUPEE_SYMBOL, self.amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
