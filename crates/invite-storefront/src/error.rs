//! Storefront error types.

use invite_commerce::CommerceError;
use invite_mail::MailError;
use thiserror::Error;

/// Errors raised while setting up or driving the storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A domain rule was violated.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Email delivery could not be set up or failed.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// Configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The page is missing something the storefront needs.
    #[error("Surface error: {0}")]
    Surface(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_messages() {
        let err: StorefrontError = CommerceError::EmptyCart.into();
        assert_eq!(err.to_string(), "Your cart is empty!");

        let err = StorefrontError::Config("send_delay_ms too large".to_string());
        assert_eq!(err.to_string(), "Configuration error: send_delay_ms too large");
    }
}
