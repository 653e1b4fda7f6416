//! Product catalog module.
//!
//! Contains the product record, badge and category enumerations, and the
//! read-only catalog table the storefront browses.

mod category;
mod data;
mod product;

pub use category::Category;
pub use data::Catalog;
pub use product::{Badge, Product, ProductRef};
