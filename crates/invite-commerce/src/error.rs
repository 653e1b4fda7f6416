//! Commerce error types.

use thiserror::Error;

use crate::enquiry::{EnquiryStep, ValidationError};

/// Errors that can occur in storefront domain operations.
///
/// Catalog misses are deliberately absent: an unknown product id is absorbed
/// by the cart as a no-op rather than reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Contact details failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid enquiry flow state transition.
    #[error("Invalid enquiry transition from {from} to {to}")]
    InvalidEnquiryTransition { from: EnquiryStep, to: EnquiryStep },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_message() {
        assert_eq!(CommerceError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: CommerceError = ValidationError::InvalidPhone.into();
        assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number.");
    }

    #[test]
    fn test_transition_message() {
        let err = CommerceError::InvalidEnquiryTransition {
            from: EnquiryStep::Closed,
            to: EnquiryStep::Submitting,
        };
        assert_eq!(
            err.to_string(),
            "Invalid enquiry transition from closed to submitting"
        );
    }
}
