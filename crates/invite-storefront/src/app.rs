//! Application state.

use std::rc::Rc;

use invite_commerce::cart::Cart;
use invite_commerce::catalog::{Catalog, Category};
use invite_commerce::enquiry::EnquiryStep;
use invite_commerce::ids::ProductId;
use invite_commerce::CommerceError;
use invite_mail::{EmailJsSender, EmailSender, MailError};
use invite_observability::{SessionId, StructuredLogger};

use crate::browser::CategoryBrowser;
use crate::cart::ShoppingCart;
use crate::checkout::{
    thank_you, EnquiryDesk, PendingEnquiry, SubmitOutcome, FAILED_NOTICE, SENT_NOTICE,
};
use crate::config::{DeliveryPolicy, StorefrontConfig};
use crate::events::UiEvent;
use crate::preview::ProductPreview;
use crate::render::render_product_grid;
use crate::surface::{FormField, Slot, Surface};
use crate::timer::pause;
use crate::StorefrontError;

/// Shown after a newsletter signup.
pub const NEWSLETTER_NOTICE: &str = "Thank you for subscribing!";

/// The storefront widget: one instance per page.
///
/// Owns the surface it draws on, the email sender and every controller.
/// Event handlers run to completion one at a time; only delivery is
/// asynchronous.
pub struct Storefront<S: Surface, M: EmailSender> {
    surface: S,
    mailer: Rc<M>,
    catalog: Catalog,
    config: StorefrontConfig,
    cart: ShoppingCart,
    browser: CategoryBrowser,
    preview: ProductPreview,
    desk: EnquiryDesk,
    logger: StructuredLogger,
}

impl<S: Surface> Storefront<S, EmailJsSender> {
    /// Storefront delivering through EmailJS.
    ///
    /// Fails if the config is incomplete.
    pub fn emailjs(surface: S, config: StorefrontConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let sender = EmailJsSender::new(config.mail.clone())?;
        Ok(Self::new(surface, sender, config))
    }
}

impl<S: Surface, M: EmailSender> Storefront<S, M> {
    /// Create a storefront over the built-in catalog, logging as configured.
    pub fn new(surface: S, mailer: M, config: StorefrontConfig) -> Self {
        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);
        Self::with_logger(surface, mailer, config, logger)
    }

    /// Create a storefront with an explicit logger.
    pub fn with_logger(
        surface: S,
        mailer: M,
        config: StorefrontConfig,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            surface,
            mailer: Rc::new(mailer),
            catalog: Catalog::builtin(),
            config,
            cart: ShoppingCart::new(&logger),
            browser: CategoryBrowser::new(&logger),
            preview: ProductPreview::new(&logger),
            desk: EnquiryDesk::new(&logger),
            logger: logger.for_component("storefront"),
        }
    }

    /// Replace the product table.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Draw the initial page: featured grid, empty cart, idle checkout.
    pub fn mount(&mut self) {
        let featured = self.catalog.featured();
        self.surface
            .set_markup(Slot::FeaturedGrid, &render_product_grid(featured));
        self.cart.set_busy(&mut self.surface, false);
        self.cart.refresh(&mut self.surface);

        self.logger
            .info_builder("storefront mounted")
            .field_u64("featured", featured.len() as u64)
            .field_u64("products", self.catalog.len() as u64)
            .emit();
    }

    /// Apply one user interface event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::CartButton => {
                self.cart.toggle(&mut self.surface);
            }
            UiEvent::CartClose | UiEvent::CartOverlay => self.cart.close(&mut self.surface),
            UiEvent::ClearCart => self.cart.clear(&mut self.surface),
            UiEvent::Checkout => {
                self.checkout();
            }
            UiEvent::RemoveItem(id) => {
                self.cart.remove_item(&mut self.surface, &id);
            }
            UiEvent::IncreaseQuantity(id) => {
                self.cart.increase(&mut self.surface, &id);
            }
            UiEvent::DecreaseQuantity(id) => {
                self.cart.decrease(&mut self.surface, &id);
            }
            UiEvent::AddToCart(id) => {
                self.cart.add_item(&mut self.surface, &self.catalog, id);
            }
            UiEvent::Preview(id) => {
                self.preview.open(&mut self.surface, &self.catalog, &id);
            }
            UiEvent::PreviewClose => self.preview.close(&mut self.surface),
            UiEvent::PreviewAddToCart(id) => {
                // Close first so the open cart keeps the page scroll locked.
                self.preview.close(&mut self.surface);
                self.cart.add_item(&mut self.surface, &self.catalog, id);
            }
            UiEvent::CategoryToggle(category) => {
                self.browser.toggle(&mut self.surface, &self.catalog, category)
            }
            UiEvent::CategoryClose => self.browser.close(&mut self.surface),
            UiEvent::EnquiryClose => {
                if let Err(err) = self.desk.close(&mut self.surface) {
                    self.logger
                        .debug_builder("enquiry form not closed")
                        .field("reason", err.to_string())
                        .emit();
                }
            }
            UiEvent::NewsletterSubmit => {
                self.subscribe_newsletter();
            }
        }
    }

    /// Open the enquiry form. An empty cart is reported to the customer.
    pub fn checkout(&mut self) -> bool {
        match self.desk.open(&mut self.surface, self.cart.cart()) {
            Ok(()) => true,
            Err(err @ CommerceError::EmptyCart) => {
                self.surface.notify(&err.to_string());
                false
            }
            Err(err) => {
                self.logger
                    .debug_builder("checkout ignored")
                    .field("reason", err.to_string())
                    .emit();
                false
            }
        }
    }

    /// Footer newsletter signup. Blank input is ignored.
    pub fn subscribe_newsletter(&mut self) -> bool {
        if self.surface.read_value(FormField::Newsletter).is_empty() {
            return false;
        }
        self.surface.notify(NEWSLETTER_NOTICE);
        self.surface.write_value(FormField::Newsletter, "");
        true
    }

    /// Submit the enquiry form and deliver it.
    ///
    /// With [`DeliveryPolicy::Acknowledge`] the customer is thanked and the
    /// cart cleared as soon as the send starts, then the delivery result is
    /// reported. With [`DeliveryPolicy::RequireDelivery`] that only happens
    /// once the email service accepts the enquiry.
    pub async fn submit_enquiry(&mut self) -> SubmitOutcome {
        let pending = match self.begin_submission() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };

        pause(pending.delay).await;

        let mailer = Rc::clone(&self.mailer);
        let delivery = mailer.send(&pending.params);
        self.dispatched(&pending);
        let result = delivery.await;
        self.settle(&pending, result)
    }

    /// Validate the form and put the checkout button in its sending state.
    ///
    /// `Err` carries the final outcome when there is nothing to send.
    pub fn begin_submission(&mut self) -> Result<PendingEnquiry, SubmitOutcome> {
        let accepted =
            self.desk
                .accept(&mut self.surface, self.cart.cart(), &self.config.checkout);
        match accepted {
            Ok(payload) => {
                self.logger
                    .info_builder("enquiry accepted")
                    .field("enquiry_id", payload.id.as_str())
                    .field_u64("items", payload.item_count())
                    .field_i64("total", payload.total.amount)
                    .emit();
                self.cart.set_busy(&mut self.surface, true);
                Ok(PendingEnquiry::new(payload, &self.config.checkout))
            }
            Err(CommerceError::Validation(invalid)) => Err(SubmitOutcome::Rejected(invalid)),
            Err(err) => {
                self.logger
                    .debug_builder("submission ignored")
                    .field("reason", err.to_string())
                    .emit();
                Err(SubmitOutcome::Ignored)
            }
        }
    }

    /// The send for `pending` has started.
    pub fn dispatched(&mut self, pending: &PendingEnquiry) {
        if pending.policy == DeliveryPolicy::Acknowledge {
            self.acknowledge(pending);
        }
    }

    /// The send for `pending` has finished.
    pub fn settle(
        &mut self,
        pending: &PendingEnquiry,
        result: Result<(), MailError>,
    ) -> SubmitOutcome {
        let acknowledged = match pending.policy {
            DeliveryPolicy::Acknowledge => true,
            DeliveryPolicy::RequireDelivery if result.is_ok() => {
                self.acknowledge(pending);
                true
            }
            DeliveryPolicy::RequireDelivery => {
                self.cart.set_busy(&mut self.surface, false);
                self.finish_flow();
                false
            }
        };

        match result {
            Ok(()) => {
                self.logger
                    .info_builder("enquiry delivered")
                    .field("enquiry_id", pending.payload.id.as_str())
                    .emit();
                self.surface.notify(SENT_NOTICE);
                SubmitOutcome::Sent
            }
            Err(error) => {
                self.logger
                    .error_builder("enquiry delivery failed")
                    .field("enquiry_id", pending.payload.id.as_str())
                    .field("error", error.to_string())
                    .field_bool("acknowledged", acknowledged)
                    .emit();
                self.surface.notify(FAILED_NOTICE);
                SubmitOutcome::Failed {
                    error,
                    acknowledged,
                }
            }
        }
    }

    /// Close the enquiry flow, restore the checkout button, thank the
    /// customer, then clear and close the cart.
    ///
    /// The form can be reopened from here on, even while the send is still
    /// in flight.
    fn acknowledge(&mut self, pending: &PendingEnquiry) {
        self.finish_flow();
        self.cart.set_busy(&mut self.surface, false);
        self.surface.notify(&thank_you(pending.customer()));
        self.cart.clear(&mut self.surface);
        self.cart.close(&mut self.surface);
    }

    fn finish_flow(&mut self) {
        if let Err(err) = self.desk.finish() {
            self.logger
                .warn_builder("enquiry flow out of step")
                .field("reason", err.to_string())
                .emit();
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Shared handle to the sender, for sends that outlive a borrow of the
    /// storefront.
    pub fn mailer_handle(&self) -> Rc<M> {
        Rc::clone(&self.mailer)
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn enquiry_step(&self) -> EnquiryStep {
        self.desk.step()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.browser.selected()
    }

    pub fn previewing(&self) -> Option<&ProductId> {
        self.preview.current()
    }
}
