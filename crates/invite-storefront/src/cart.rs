//! Cart controller.
//!
//! Owns the [`Cart`] and keeps the badge, line list, footer and panel on the
//! surface in step with it. Every mutation ends with a full refresh.

use invite_commerce::cart::Cart;
use invite_commerce::catalog::{Catalog, ProductRef};
use invite_commerce::ids::ProductId;
use invite_observability::StructuredLogger;

use crate::render::render_cart_lines;
use crate::surface::{Slot, Surface};

/// Checkout button content while idle.
pub const CHECKOUT_LABEL: &str = "Send Enquiry";

/// Checkout button content while an enquiry is being sent.
pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// The cart widget.
pub struct ShoppingCart {
    cart: Cart,
    busy: bool,
    logger: StructuredLogger,
}

impl ShoppingCart {
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            cart: Cart::new(),
            busy: false,
            logger: logger.for_component("cart"),
        }
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether an enquiry is being sent.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Add one unit of a product and open the panel.
    ///
    /// An id the catalog does not know is logged and otherwise ignored.
    pub fn add_item<S: Surface>(
        &mut self,
        surface: &mut S,
        catalog: &Catalog,
        product: impl Into<ProductRef>,
    ) -> Option<u32> {
        let product = product.into();
        let requested = match &product {
            ProductRef::Id(id) => id.clone(),
            ProductRef::Record(record) => record.id.clone(),
        };

        let Some(quantity) = self.cart.add(catalog, product) else {
            self.logger
                .debug_builder("product not found")
                .field("product_id", requested.as_str())
                .emit();
            return None;
        };

        self.logger
            .debug_builder("item added")
            .field("product_id", requested.as_str())
            .field_u64("quantity", u64::from(quantity))
            .emit();
        self.refresh(surface);
        self.render_panel(surface);
        Some(quantity)
    }

    /// Remove a line.
    pub fn remove_item<S: Surface>(&mut self, surface: &mut S, id: &ProductId) -> bool {
        let removed = self.cart.remove(id);
        self.logger
            .debug_builder("item removed")
            .field("product_id", id.as_str())
            .field_bool("found", removed)
            .emit();
        self.refresh(surface);
        removed
    }

    /// Set a line's quantity, clamped to at least one.
    pub fn update_quantity<S: Surface>(
        &mut self,
        surface: &mut S,
        id: &ProductId,
        quantity: i64,
    ) -> bool {
        if !self.cart.update_quantity(id, quantity) {
            return false;
        }
        self.logger
            .debug_builder("quantity updated")
            .field("product_id", id.as_str())
            .field_i64("requested", quantity)
            .emit();
        self.refresh(surface);
        true
    }

    pub fn increase<S: Surface>(&mut self, surface: &mut S, id: &ProductId) -> bool {
        match self.cart.get(id).map(|line| line.quantity) {
            Some(current) => self.update_quantity(surface, id, i64::from(current) + 1),
            None => false,
        }
    }

    pub fn decrease<S: Surface>(&mut self, surface: &mut S, id: &ProductId) -> bool {
        match self.cart.get(id).map(|line| line.quantity) {
            Some(current) => self.update_quantity(surface, id, i64::from(current) - 1),
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear<S: Surface>(&mut self, surface: &mut S) {
        self.cart.clear();
        self.logger.debug("cart cleared");
        self.refresh(surface);
    }

    pub fn open<S: Surface>(&mut self, surface: &mut S) {
        self.cart.open();
        self.render_panel(surface);
    }

    pub fn close<S: Surface>(&mut self, surface: &mut S) {
        self.cart.close();
        self.render_panel(surface);
    }

    /// Flip the panel. Returns whether it is now open.
    pub fn toggle<S: Surface>(&mut self, surface: &mut S) -> bool {
        let open = self.cart.toggle();
        self.render_panel(surface);
        open
    }

    /// Redraw the badge, line list and footer.
    pub fn refresh<S: Surface>(&self, surface: &mut S) {
        let summary = self.cart.summary();

        surface.set_text(Slot::CartBadge, &summary.item_count.to_string());
        surface.set_visible(Slot::CartBadge, summary.show_badge());

        if summary.is_empty() {
            surface.set_markup(Slot::CartItems, "");
            surface.set_visible(Slot::CartItems, false);
            surface.set_visible(Slot::CartEmpty, true);
            surface.set_visible(Slot::CartFooter, false);
        } else {
            surface.set_markup(Slot::CartItems, &render_cart_lines(self.cart.lines()));
            surface.set_visible(Slot::CartItems, true);
            surface.set_visible(Slot::CartEmpty, false);
            surface.set_visible(Slot::CartFooter, true);
        }

        surface.set_text(Slot::CartSubtotal, &summary.subtotal.display_fixed());
        surface.set_visible(Slot::MinimumWarning, summary.minimum_warning);
        surface.set_enabled(Slot::CheckoutButton, summary.checkout_enabled && !self.busy);
    }

    /// Switch the checkout button between its idle and sending states.
    pub fn set_busy<S: Surface>(&mut self, surface: &mut S, busy: bool) {
        self.busy = busy;
        let label = if busy { SENDING_LABEL } else { CHECKOUT_LABEL };
        surface.set_markup(Slot::CheckoutButton, label);
        surface.set_enabled(
            Slot::CheckoutButton,
            !busy && self.cart.summary().checkout_enabled,
        );
    }

    fn render_panel<S: Surface>(&self, surface: &mut S) {
        let open = self.cart.is_open();
        surface.set_visible(Slot::CartPanel, open);
        surface.set_visible(Slot::CartOverlay, open);
        surface.set_scroll_locked(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use invite_commerce::catalog::Product;
    use invite_observability::{LogLevel, SessionId};

    fn setup() -> (ShoppingCart, MemorySurface, Catalog) {
        let logger = StructuredLogger::capturing(SessionId::from_string("test"))
            .with_min_level(LogLevel::Debug);
        (ShoppingCart::new(&logger), MemorySurface::new(), Catalog::builtin())
    }

    #[test]
    fn test_add_opens_and_refreshes() {
        let (mut cart, mut surface, catalog) = setup();

        assert_eq!(cart.add_item(&mut surface, &catalog, "1"), Some(1));
        assert_eq!(cart.add_item(&mut surface, &catalog, "1"), Some(2));

        assert!(surface.is_visible(Slot::CartPanel));
        assert!(surface.is_visible(Slot::CartOverlay));
        assert!(surface.is_scroll_locked());
        assert_eq!(surface.text(Slot::CartBadge), Some("2"));
        assert!(surface.is_visible(Slot::CartBadge));
        assert!(surface.is_visible(Slot::CartFooter));
        assert!(!surface.is_visible(Slot::CartEmpty));
        assert_eq!(surface.text(Slot::CartSubtotal), Some("₹798.00"));
        assert!(surface.markup(Slot::CartItems).unwrap().contains("Royal Marathi"));
    }

    #[test]
    fn test_unknown_id_is_silent() {
        let (mut cart, mut surface, catalog) = setup();

        assert_eq!(cart.add_item(&mut surface, &catalog, "nope"), None);
        assert!(cart.cart().is_empty());
        assert!(!surface.is_visible(Slot::CartPanel));
        assert_eq!(surface.text(Slot::CartBadge), None);
        assert!(surface.notices().is_empty());

        let logged = cart.logger.captured();
        assert_eq!(logged.last().unwrap().message, "product not found");
    }

    #[test]
    fn test_add_full_record() {
        let (mut cart, mut surface, catalog) = setup();
        let custom = Product::new("custom", "Custom Card", 120, 4.0, "");
        assert_eq!(cart.add_item(&mut surface, &catalog, &custom), Some(1));
        assert_eq!(cart.cart().total().amount, 120);
    }

    #[test]
    fn test_quantity_controls() {
        let (mut cart, mut surface, catalog) = setup();
        let id = ProductId::new("e1");
        cart.add_item(&mut surface, &catalog, &id);

        assert!(cart.increase(&mut surface, &id));
        assert_eq!(cart.cart().get(&id).unwrap().quantity, 2);
        assert!(cart.decrease(&mut surface, &id));
        assert!(cart.decrease(&mut surface, &id));
        assert_eq!(cart.cart().get(&id).unwrap().quantity, 1);

        assert!(cart.update_quantity(&mut surface, &id, -4));
        assert_eq!(cart.cart().get(&id).unwrap().quantity, 1);
        assert!(!cart.update_quantity(&mut surface, &ProductId::new("zz"), 3));
        assert!(!cart.increase(&mut surface, &ProductId::new("zz")));
    }

    #[test]
    fn test_remove_keeps_panel_state() {
        let (mut cart, mut surface, catalog) = setup();
        cart.add_item(&mut surface, &catalog, "w1");
        assert!(cart.remove_item(&mut surface, &ProductId::new("w1")));
        assert!(!cart.remove_item(&mut surface, &ProductId::new("w1")));

        assert!(surface.is_visible(Slot::CartPanel));
        assert!(surface.is_visible(Slot::CartEmpty));
        assert!(!surface.is_visible(Slot::CartBadge));
    }

    #[test]
    fn test_clear_shows_empty_state() {
        let (mut cart, mut surface, catalog) = setup();
        cart.add_item(&mut surface, &catalog, "b1");
        cart.add_item(&mut surface, &catalog, "f1");
        cart.clear(&mut surface);

        assert_eq!(cart.cart().item_count(), 0);
        assert!(surface.is_visible(Slot::CartEmpty));
        assert!(!surface.is_visible(Slot::CartItems));
        assert!(!surface.is_visible(Slot::CartFooter));
        assert_eq!(surface.markup(Slot::CartItems), Some(""));
    }

    #[test]
    fn test_toggle_panel() {
        let (mut cart, mut surface, _) = setup();
        assert!(cart.toggle(&mut surface));
        assert!(surface.is_scroll_locked());
        assert!(!cart.toggle(&mut surface));
        assert!(!surface.is_visible(Slot::CartPanel));
        assert!(!surface.is_scroll_locked());

        cart.open(&mut surface);
        cart.open(&mut surface);
        assert!(cart.cart().is_open());
        cart.close(&mut surface);
        assert!(!surface.is_visible(Slot::CartOverlay));
    }

    #[test]
    fn test_busy_disables_checkout() {
        let (mut cart, mut surface, catalog) = setup();
        cart.add_item(&mut surface, &catalog, "1");

        cart.set_busy(&mut surface, true);
        assert_eq!(surface.markup(Slot::CheckoutButton), Some(SENDING_LABEL));
        assert!(!surface.is_enabled(Slot::CheckoutButton));

        cart.refresh(&mut surface);
        assert!(!surface.is_enabled(Slot::CheckoutButton));

        cart.set_busy(&mut surface, false);
        assert_eq!(surface.markup(Slot::CheckoutButton), Some(CHECKOUT_LABEL));
        assert!(surface.is_enabled(Slot::CheckoutButton));
    }
}
