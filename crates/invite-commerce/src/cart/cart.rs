//! Cart and line item types.

use crate::cart::CartSummary;
use crate::catalog::{Catalog, Product, ProductRef};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Minimum quantity given to every new line.
pub const DEFAULT_MIN_QUANTITY: u32 = 1;

/// A shopping cart.
///
/// Lines keep insertion order, which is also display order. There is at most
/// one line per product id and every line holds a quantity of at least one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    lines: Vec<CartLine>,
    /// Whether the cart panel is shown.
    is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product and open the cart.
    ///
    /// Returns the resulting quantity of the product's line.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        let quantity = match self.lines.iter_mut().find(|l| l.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.quantity
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                1
            }
        };
        self.is_open = true;
        quantity
    }

    /// Resolve a product reference and add it.
    ///
    /// An id the catalog does not know is ignored and `None` is returned; the
    /// cart and its open state are left untouched.
    pub fn add(&mut self, catalog: &Catalog, product: impl Into<ProductRef>) -> Option<u32> {
        match product.into() {
            ProductRef::Record(record) => Some(self.add_product(&record)),
            ProductRef::Id(id) => {
                let record = catalog.find(&id)?;
                Some(self.add_product(record))
            }
        }
    }

    /// Remove a line. Returns `true` if a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Set a line's quantity, clamped to at least one.
    ///
    /// Returns `false` if no line has that id.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        match self.line_mut(id) {
            Some(line) => {
                line.quantity = clamp_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        let Some(current) = self.get(id).map(|l| l.quantity) else {
            return false;
        };
        self.update_quantity(id, i64::from(current) + 1)
    }

    /// Lower a line's quantity by one, stopping at one.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        let Some(current) = self.get(id).map(|l| l.quantity) else {
            return false;
        };
        self.update_quantity(id, i64::from(current) - 1)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart panel is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip the cart panel. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Whether any line is below its minimum quantity.
    pub fn has_minimum_issue(&self) -> bool {
        self.lines.iter().any(CartLine::below_minimum)
    }

    /// Derived state for the cart badge and footer.
    pub fn summary(&self) -> CartSummary {
        let minimum_warning = self.has_minimum_issue();
        CartSummary {
            item_count: self.item_count(),
            line_count: self.line_count(),
            subtotal: self.total(),
            minimum_warning,
            checkout_enabled: !minimum_warning,
        }
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.id == id)
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product id, the join key back to the catalog.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Pre-discount unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image URL or path. Empty when the product has none.
    pub image: String,
    /// Quantity, never below one.
    pub quantity: u32,
    /// Quantity below which checkout is blocked.
    pub min_quantity: u32,
}

impl CartLine {
    /// Create a line with quantity one from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            quantity: 1,
            min_quantity: DEFAULT_MIN_QUANTITY,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Whether the quantity is under the line's minimum.
    pub fn below_minimum(&self) -> bool {
        self.quantity < self.min_quantity
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}
