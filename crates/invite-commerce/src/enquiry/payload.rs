//! The enquiry record handed to email delivery.

use crate::cart::{Cart, CartLine};
use crate::enquiry::Customer;
use crate::ids::EnquiryId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comments recorded when the customer leaves the field blank.
pub const DEFAULT_COMMENTS: &str = "No additional comments";

/// A write-once snapshot of a customer's enquiry.
///
/// Items are copied out of the cart, so clearing the cart afterwards does not
/// affect a payload already assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryPayload {
    /// Correlation id for logs.
    pub id: EnquiryId,
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub total: Money,
    pub enquiry_date: DateTime<Utc>,
    pub comments: String,
}

impl EnquiryPayload {
    /// Snapshot the cart for a customer, timestamped now.
    pub fn assemble(customer: Customer, cart: &Cart, comments: &str, placeholder: &str) -> Self {
        Self::assemble_at(customer, cart, comments, placeholder, Utc::now())
    }

    /// Snapshot the cart with an explicit timestamp.
    ///
    /// Blank `comments` are replaced with `placeholder`.
    pub fn assemble_at(
        customer: Customer,
        cart: &Cart,
        comments: &str,
        placeholder: &str,
        enquiry_date: DateTime<Utc>,
    ) -> Self {
        let comments = match comments.trim() {
            "" => placeholder.to_string(),
            text => text.to_string(),
        };

        Self {
            id: EnquiryId::generate(),
            customer,
            items: cart.lines().to_vec(),
            total: cart.total(),
            enquiry_date,
            comments,
        }
    }

    /// Sum of item quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
