//! HTML fragment renderers.
//!
//! Buttons carry `data-action` and `data-product-id` / `data-item-id`
//! attributes; the page binding turns clicks on them into [`UiEvent`]s.
//!
//! [`UiEvent`]: crate::UiEvent

mod card;
mod cart;
mod detail;
mod stars;

pub use card::*;
pub use cart::*;
pub use detail::*;
pub use stars::*;

/// `data-action` values written into rendered buttons.
pub mod actions {
    pub const PREVIEW: &str = "preview";
    pub const ADD_TO_CART: &str = "add-to-cart";
    pub const PREVIEW_ADD_TO_CART: &str = "preview-add-to-cart";
    pub const REMOVE_ITEM: &str = "remove-item";
    pub const INCREASE_QUANTITY: &str = "increase-quantity";
    pub const DECREASE_QUANTITY: &str = "decrease-quantity";
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
