//! The page the storefront draws on.
//!
//! Controllers never touch the document directly. They write text and markup
//! into named [`Slot`]s and read [`FormField`] values through the [`Surface`]
//! trait, so the same logic drives a browser page or an in-memory stand-in.

mod memory;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use memory::MemorySurface;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

use invite_commerce::catalog::Category;
use serde::{Deserialize, Serialize};

/// Named insertion points on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Item count bubble on the cart button.
    CartBadge,
    /// Slide-out cart sidebar.
    CartPanel,
    /// Backdrop behind the open cart.
    CartOverlay,
    /// Line item list.
    CartItems,
    /// Placeholder shown when the cart has no lines.
    CartEmpty,
    /// Subtotal, warning and checkout button block.
    CartFooter,
    CartSubtotal,
    MinimumWarning,
    CheckoutButton,
    /// Featured products grid.
    FeaturedGrid,
    /// Expanded category block.
    CategorySection,
    CategoryTitle,
    CategoryGrid,
    /// "View Cards" button of one category.
    CategoryButton(Category),
    PreviewOverlay,
    PreviewContent,
    /// Contact details form overlay.
    EnquiryOverlay,
}

/// Input fields the storefront reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Comments,
    /// Footer newsletter signup.
    Newsletter,
}

impl FormField {
    /// Enquiry form fields in order.
    pub const CONTACT: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Comments,
    ];
}

impl From<invite_commerce::enquiry::ContactField> for FormField {
    fn from(field: invite_commerce::enquiry::ContactField) -> Self {
        use invite_commerce::enquiry::ContactField;
        match field {
            ContactField::Name => FormField::Name,
            ContactField::Email => FormField::Email,
            ContactField::Phone => FormField::Phone,
            ContactField::Comments => FormField::Comments,
        }
    }
}

/// Capabilities the storefront needs from a page.
///
/// Writes to a slot the page does not have are dropped.
pub trait Surface {
    /// Replace a slot's text content.
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Replace a slot's inner markup.
    fn set_markup(&mut self, slot: Slot, html: &str);

    /// Show or hide a slot.
    fn set_visible(&mut self, slot: Slot, visible: bool);

    /// Enable or disable a control.
    fn set_enabled(&mut self, slot: Slot, enabled: bool);

    /// Stop the page behind an overlay from scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Current value of an input.
    fn read_value(&self, field: FormField) -> String;

    /// Overwrite an input.
    fn write_value(&mut self, field: FormField, value: &str);

    /// Move keyboard focus to an input.
    fn focus(&mut self, field: FormField);

    /// Show a blocking message to the customer.
    fn notify(&mut self, message: &str);
}
