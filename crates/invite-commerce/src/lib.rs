//! Catalog, cart and enquiry domain types for the invitation card storefront.
//!
//! This crate holds everything the storefront widget knows that is not tied
//! to a page:
//!
//! - **Catalog**: Products, badges, categories and the built-in product table
//! - **Cart**: Line items, quantity rules, totals and the derived summary
//! - **Enquiry**: Contact form validation, the enquiry payload, flow state
//!
//! # Example
//!
//! ```rust
//! use invite_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let mut cart = Cart::new();
//!
//! let card = catalog.find(&ProductId::new("1")).unwrap();
//! cart.add_product(card);
//! cart.add_product(card);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().display_fixed(), "\u{20b9}798.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod enquiry;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Category, Product, ProductRef};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, DEFAULT_MIN_QUANTITY};

    // Enquiry
    pub use crate::enquiry::{
        ContactField, ContactForm, Customer, EnquiryFlow, EnquiryPayload, EnquiryStep,
        ValidationError, DEFAULT_COMMENTS,
    };
}
