//! Shopping cart module.
//!
//! Contains the cart, its line items, and the summary the cart panel renders
//! after every mutation.

mod cart;
mod summary;

pub use cart::{Cart, CartLine, DEFAULT_MIN_QUANTITY};
pub use summary::CartSummary;
