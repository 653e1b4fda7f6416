//! Enquiry form and submission state.

use std::time::Duration;

use invite_commerce::cart::Cart;
use invite_commerce::enquiry::{
    ContactForm, Customer, EnquiryFlow, EnquiryPayload, EnquiryStep, ValidationError,
};
use invite_commerce::CommerceError;
use invite_mail::{MailError, TemplateParams};
use invite_observability::StructuredLogger;

use crate::config::{CheckoutSettings, DeliveryPolicy};
use crate::surface::{FormField, Slot, Surface};

/// Shown once delivery succeeds.
pub const SENT_NOTICE: &str = "Enquiry sent successfully!";

/// Shown once delivery fails.
pub const FAILED_NOTICE: &str = "Failed to send enquiry. Please try again.";

/// Acknowledgement shown after the enquiry is handed off.
pub fn thank_you(customer: &Customer) -> String {
    format!(
        "Thank you {}! Your enquiry has been sent. We'll contact you at {} within 24 hours.",
        customer.name, customer.phone
    )
}

/// An accepted enquiry waiting to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEnquiry {
    pub payload: EnquiryPayload,
    /// Fields handed to the email template.
    pub params: TemplateParams,
    /// Pause before sending.
    pub delay: Duration,
    pub policy: DeliveryPolicy,
}

impl PendingEnquiry {
    pub fn new(payload: EnquiryPayload, settings: &CheckoutSettings) -> Self {
        let params = TemplateParams::from_payload(&payload, settings.utc_offset_minutes);
        Self {
            payload,
            params,
            delay: settings.send_delay(),
            policy: settings.delivery,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.payload.customer
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Contact details were invalid; the form is still open.
    Rejected(ValidationError),
    /// There was no open form to submit.
    Ignored,
    /// The email service accepted the enquiry.
    Sent,
    /// The email service failed. `acknowledged` tells whether the customer
    /// was thanked and the cart cleared anyway.
    Failed {
        error: MailError,
        acknowledged: bool,
    },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// The contact details form.
pub struct EnquiryDesk {
    flow: EnquiryFlow,
    logger: StructuredLogger,
}

impl EnquiryDesk {
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            flow: EnquiryFlow::new(),
            logger: logger.for_component("enquiry"),
        }
    }

    pub fn step(&self) -> EnquiryStep {
        self.flow.step()
    }

    /// Show a blank form for the cart.
    pub fn open<S: Surface>(&mut self, surface: &mut S, cart: &Cart) -> Result<(), CommerceError> {
        self.flow.begin(cart)?;
        for field in FormField::CONTACT {
            surface.write_value(field, "");
        }
        surface.set_visible(Slot::EnquiryOverlay, true);
        surface.focus(FormField::Name);
        self.logger.debug("enquiry form opened");
        Ok(())
    }

    /// Hide the form without submitting.
    pub fn close<S: Surface>(&mut self, surface: &mut S) -> Result<(), CommerceError> {
        self.flow.cancel()?;
        surface.set_visible(Slot::EnquiryOverlay, false);
        Ok(())
    }

    /// Current form contents.
    pub fn read_form<S: Surface>(&self, surface: &S) -> ContactForm {
        ContactForm::new(
            surface.read_value(FormField::Name),
            surface.read_value(FormField::Email),
            surface.read_value(FormField::Phone),
            surface.read_value(FormField::Comments),
        )
    }

    /// Validate the form and snapshot the cart.
    ///
    /// Invalid details are reported to the customer and focus returns to the
    /// offending field; the form stays open. Valid details close the form
    /// and move the flow to submitting.
    pub fn accept<S: Surface>(
        &mut self,
        surface: &mut S,
        cart: &Cart,
        settings: &CheckoutSettings,
    ) -> Result<EnquiryPayload, CommerceError> {
        if !self.flow.is_collecting() {
            return Err(CommerceError::InvalidEnquiryTransition {
                from: self.flow.step(),
                to: EnquiryStep::Submitting,
            });
        }

        let form = self.read_form(surface).trimmed();
        let customer = match form.validate() {
            Ok(customer) => customer,
            Err(invalid) => {
                self.logger
                    .debug_builder("contact details rejected")
                    .field("field", invalid.field().as_str())
                    .emit();
                surface.notify(&invalid.message());
                surface.focus(invalid.field().into());
                return Err(invalid.into());
            }
        };

        self.flow.start_submitting()?;
        surface.set_visible(Slot::EnquiryOverlay, false);

        Ok(EnquiryPayload::assemble(
            customer,
            cart,
            &form.comments,
            &settings.comments_placeholder,
        ))
    }

    /// Mark delivery as over.
    pub fn finish(&mut self) -> Result<(), CommerceError> {
        self.flow.finish()
    }
}
