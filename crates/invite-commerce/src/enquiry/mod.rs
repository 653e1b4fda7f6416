//! Checkout enquiry module.
//!
//! Contains contact form validation, the enquiry payload, and the form's
//! state machine.

mod contact;
mod flow;
mod payload;

pub use contact::{ContactField, ContactForm, Customer, ValidationError};
pub use flow::{EnquiryFlow, EnquiryStep};
pub use payload::{EnquiryPayload, DEFAULT_COMMENTS};
