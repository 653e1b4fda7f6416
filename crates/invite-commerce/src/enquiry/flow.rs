//! Enquiry form state machine.

use crate::cart::Cart;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the enquiry form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStep {
    /// Form hidden.
    #[default]
    Closed,
    /// Form shown, waiting for the customer.
    Collecting,
    /// Details accepted, delivery in progress.
    Submitting,
}

impl EnquiryStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStep::Closed => "closed",
            EnquiryStep::Collecting => "collecting",
            EnquiryStep::Submitting => "submitting",
        }
    }
}

impl fmt::Display for EnquiryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enquiry flow: `Closed -> Collecting -> Submitting -> Closed`.
///
/// `Collecting` may also be cancelled back to `Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryFlow {
    step: EnquiryStep,
}

impl EnquiryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> EnquiryStep {
        self.step
    }

    /// Whether the form is on screen.
    pub fn is_collecting(&self) -> bool {
        self.step == EnquiryStep::Collecting
    }

    /// Whether a submission is in progress.
    pub fn is_submitting(&self) -> bool {
        self.step == EnquiryStep::Submitting
    }

    /// Open the form for a cart.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there is nothing to
    /// enquire about. Reopening an already open form is allowed.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        match self.step {
            EnquiryStep::Closed | EnquiryStep::Collecting => {
                self.step = EnquiryStep::Collecting;
                Ok(())
            }
            EnquiryStep::Submitting => Err(self.invalid(EnquiryStep::Collecting)),
        }
    }

    /// Close the form without submitting.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        match self.step {
            EnquiryStep::Closed | EnquiryStep::Collecting => {
                self.step = EnquiryStep::Closed;
                Ok(())
            }
            EnquiryStep::Submitting => Err(self.invalid(EnquiryStep::Closed)),
        }
    }

    /// Move from the form to delivery.
    pub fn start_submitting(&mut self) -> Result<(), CommerceError> {
        match self.step {
            EnquiryStep::Collecting => {
                self.step = EnquiryStep::Submitting;
                Ok(())
            }
            _ => Err(self.invalid(EnquiryStep::Submitting)),
        }
    }

    /// Delivery is over, whatever the outcome.
    pub fn finish(&mut self) -> Result<(), CommerceError> {
        match self.step {
            EnquiryStep::Submitting => {
                self.step = EnquiryStep::Closed;
                Ok(())
            }
            _ => Err(self.invalid(EnquiryStep::Closed)),
        }
    }

    fn invalid(&self, to: EnquiryStep) -> CommerceError {
        CommerceError::InvalidEnquiryTransition {
            from: self.step,
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Catalog::builtin(), "w1");
        cart
    }

    #[test]
    fn test_full_cycle() {
        let mut flow = EnquiryFlow::new();
        assert_eq!(flow.step(), EnquiryStep::Closed);

        flow.begin(&cart()).unwrap();
        assert!(flow.is_collecting());

        flow.start_submitting().unwrap();
        assert!(flow.is_submitting());

        flow.finish().unwrap();
        assert_eq!(flow.step(), EnquiryStep::Closed);
    }

    #[test]
    fn test_begin_requires_items() {
        let mut flow = EnquiryFlow::new();
        assert_eq!(flow.begin(&Cart::new()), Err(CommerceError::EmptyCart));
        assert_eq!(flow.step(), EnquiryStep::Closed);
    }

    #[test]
    fn test_cancel_from_collecting() {
        let mut flow = EnquiryFlow::new();
        flow.begin(&cart()).unwrap();
        flow.cancel().unwrap();
        assert_eq!(flow.step(), EnquiryStep::Closed);
    }

    #[test]
    fn test_submit_without_form_is_rejected() {
        let mut flow = EnquiryFlow::new();
        let err = flow.start_submitting().unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidEnquiryTransition {
                from: EnquiryStep::Closed,
                to: EnquiryStep::Submitting,
            }
        );
    }

    #[test]
    fn test_busy_flow_rejects_reopen_and_cancel() {
        let mut flow = EnquiryFlow::new();
        flow.begin(&cart()).unwrap();
        flow.start_submitting().unwrap();

        assert!(flow.begin(&cart()).is_err());
        assert!(flow.cancel().is_err());
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_finish_requires_submitting() {
        let mut flow = EnquiryFlow::new();
        assert!(flow.finish().is_err());
    }
}
