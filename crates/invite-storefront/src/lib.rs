//! Storefront widget for the invitation card shop.
//!
//! Ties the catalog, cart and enquiry domain to a page:
//!
//! - **Surface**: Named slots the widget writes into and form fields it reads
//! - **Render**: HTML fragments for product cards, details and cart lines
//! - **Controllers**: Cart panel, category browser, product preview, enquiry form
//! - **Storefront**: Application state routing [`UiEvent`]s to the controllers
//!   and delivering enquiries through an [`EmailSender`]
//!
//! On `wasm32` the crate also exports `mountStorefront`, which binds the
//! widget to the live page.
//!
//! # Example
//!
//! ```rust,ignore
//! use invite_storefront::prelude::*;
//!
//! let mut config = StorefrontConfig::default();
//! config.checkout.send_delay_ms = 0;
//!
//! let mut shop = Storefront::new(MemorySurface::new(), MemorySender::new(), config);
//! shop.mount();
//! shop.handle(UiEvent::AddToCart(ProductId::new("1")));
//! shop.handle(UiEvent::Checkout);
//!
//! shop.surface_mut()
//!     .fill(FormField::Name, "Asha")
//!     .fill(FormField::Email, "asha@example.com")
//!     .fill(FormField::Phone, "9876543210");
//!
//! assert!(shop.submit_enquiry().await.is_sent());
//! ```
//!
//! [`EmailSender`]: invite_mail::EmailSender

mod app;
mod browser;
mod cart;
mod checkout;
mod config;
mod error;
mod events;
mod preview;
mod timer;

pub mod render;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::{Storefront, NEWSLETTER_NOTICE};
pub use browser::{CategoryBrowser, HIDE_LABEL, VIEW_LABEL};
pub use cart::{ShoppingCart, CHECKOUT_LABEL, SENDING_LABEL};
pub use checkout::{
    thank_you, EnquiryDesk, PendingEnquiry, SubmitOutcome, FAILED_NOTICE, SENT_NOTICE,
};
pub use config::{
    CheckoutSettings, DeliveryPolicy, LoggingSettings, StorefrontConfig, MAX_SEND_DELAY_MS,
};
pub use error::StorefrontError;
pub use events::UiEvent;
pub use preview::ProductPreview;
pub use timer::pause;

#[cfg(target_arch = "wasm32")]
pub use web::mount_storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CheckoutSettings, DeliveryPolicy, StorefrontConfig};
    pub use crate::error::StorefrontError;
    pub use crate::events::UiEvent;
    pub use crate::surface::{FormField, MemorySurface, Slot, Surface};
    pub use crate::{Storefront, SubmitOutcome};

    pub use invite_commerce::prelude::*;
    pub use invite_mail::{EmailSender, MailError, MemorySender};
}
