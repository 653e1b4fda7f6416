//! User interface events.

use invite_commerce::catalog::Category;
use invite_commerce::ids::ProductId;
use serde::{Deserialize, Serialize};

use crate::render::actions;

/// Everything a customer can do on the page, apart from submitting the
/// enquiry form (see [`Storefront::submit_enquiry`]).
///
/// [`Storefront::submit_enquiry`]: crate::Storefront::submit_enquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "kebab-case")]
pub enum UiEvent {
    /// Cart button in the header.
    CartButton,
    CartClose,
    /// Click on the backdrop behind the cart.
    CartOverlay,
    ClearCart,
    Checkout,
    RemoveItem(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    AddToCart(ProductId),
    Preview(ProductId),
    PreviewClose,
    /// Add to cart from inside the preview.
    PreviewAddToCart(ProductId),
    CategoryToggle(Category),
    CategoryClose,
    EnquiryClose,
    NewsletterSubmit,
}

impl UiEvent {
    /// Decode a rendered button's `data-action` and id attributes.
    pub fn from_action(action: &str, id: &str) -> Option<Self> {
        let id = ProductId::new(id);
        let event = match action {
            actions::PREVIEW => UiEvent::Preview(id),
            actions::ADD_TO_CART => UiEvent::AddToCart(id),
            actions::PREVIEW_ADD_TO_CART => UiEvent::PreviewAddToCart(id),
            actions::REMOVE_ITEM => UiEvent::RemoveItem(id),
            actions::INCREASE_QUANTITY => UiEvent::IncreaseQuantity(id),
            actions::DECREASE_QUANTITY => UiEvent::DecreaseQuantity(id),
            _ => return None,
        };
        Some(event)
    }

    /// Event for a category button's `data-category` key.
    pub fn category(key: &str) -> Option<Self> {
        Category::from_key(key).map(UiEvent::CategoryToggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_action() {
        assert_eq!(
            UiEvent::from_action("add-to-cart", "w1"),
            Some(UiEvent::AddToCart(ProductId::new("w1")))
        );
        assert_eq!(
            UiEvent::from_action("decrease-quantity", "2"),
            Some(UiEvent::DecreaseQuantity(ProductId::new("2")))
        );
        assert_eq!(UiEvent::from_action("buy-now", "w1"), None);
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(
            UiEvent::category("baby-shower"),
            Some(UiEvent::CategoryToggle(Category::BabyShower))
        );
        assert_eq!(UiEvent::category("birthday"), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&UiEvent::Preview(ProductId::new("b2"))).unwrap();
        assert_eq!(json, r#"{"type":"preview","target":"b2"}"#);
        let event: UiEvent = serde_json::from_str(r#"{"type":"clear-cart"}"#).unwrap();
        assert_eq!(event, UiEvent::ClearCart);
    }
}
