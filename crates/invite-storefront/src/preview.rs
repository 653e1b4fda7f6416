//! Product preview overlay.

use invite_commerce::catalog::Catalog;
use invite_commerce::ids::ProductId;
use invite_observability::StructuredLogger;

use crate::render::render_product_detail;
use crate::surface::{Slot, Surface};

/// Shows one product's detail at a time.
pub struct ProductPreview {
    current: Option<ProductId>,
    logger: StructuredLogger,
}

impl ProductPreview {
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            current: None,
            logger: logger.for_component("preview"),
        }
    }

    /// Product on screen, if any.
    pub fn current(&self) -> Option<&ProductId> {
        self.current.as_ref()
    }

    /// Show a product, replacing the previous one in place.
    ///
    /// Returns `false` and leaves the overlay as it was when the catalog has
    /// no such product.
    pub fn open<S: Surface>(&mut self, surface: &mut S, catalog: &Catalog, id: &ProductId) -> bool {
        let Some(product) = catalog.find(id) else {
            self.logger
                .debug_builder("product not found")
                .field("product_id", id.as_str())
                .emit();
            return false;
        };

        surface.set_markup(Slot::PreviewContent, &render_product_detail(product));
        surface.set_visible(Slot::PreviewOverlay, true);
        surface.set_scroll_locked(true);
        self.current = Some(id.clone());
        true
    }

    pub fn close<S: Surface>(&mut self, surface: &mut S) {
        self.current = None;
        surface.set_visible(Slot::PreviewOverlay, false);
        surface.set_scroll_locked(false);
    }
}
