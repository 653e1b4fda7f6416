//! Browser document surface.

use invite_observability::StructuredLogger;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use super::{FormField, Slot, Surface};
use crate::StorefrontError;

/// How a slot is found in the document.
enum Locator {
    Id(&'static str),
    Query(String),
}

/// How a slot is shown and hidden.
#[derive(Clone, Copy)]
enum Reveal {
    /// Toggle a CSS class.
    Class(&'static str),
    /// Set `display` to the value, or `none`.
    Display(&'static str),
}

fn slot_target(slot: Slot) -> (Locator, Reveal) {
    use Locator::Id;
    match slot {
        Slot::CartBadge => (Id("cartBadge"), Reveal::Display("flex")),
        Slot::CartPanel => (Id("cartSidebar"), Reveal::Class("open")),
        Slot::CartOverlay => (Id("cartOverlay"), Reveal::Class("active")),
        Slot::CartItems => (Id("cartItems"), Reveal::Display("block")),
        Slot::CartEmpty => (Id("cartEmpty"), Reveal::Display("flex")),
        Slot::CartFooter => (Id("cartFooter"), Reveal::Display("block")),
        Slot::CartSubtotal => (Id("cartSubtotal"), Reveal::Display("inline")),
        Slot::MinimumWarning => (Id("minimumWarning"), Reveal::Display("block")),
        Slot::CheckoutButton => (Id("checkoutBtn"), Reveal::Display("block")),
        Slot::FeaturedGrid => (Id("bestSellersGrid"), Reveal::Display("grid")),
        Slot::CategorySection => (Id("expandedCategory"), Reveal::Display("block")),
        Slot::CategoryTitle => (Id("expandedTitle"), Reveal::Display("block")),
        Slot::CategoryGrid => (Id("expandedGrid"), Reveal::Display("grid")),
        Slot::CategoryButton(category) => (
            Locator::Query(format!(r#".category-btn[data-category="{}"]"#, category.key())),
            Reveal::Display("inline-block"),
        ),
        Slot::PreviewOverlay => (Id("modalOverlay"), Reveal::Class("active")),
        Slot::PreviewContent => (Id("modalContent"), Reveal::Display("block")),
        Slot::EnquiryOverlay => (Id("customerModalOverlay"), Reveal::Class("active")),
    }
}

fn field_locator(field: FormField) -> Locator {
    match field {
        FormField::Name => Locator::Id("customerName"),
        FormField::Email => Locator::Id("customerEmail"),
        FormField::Phone => Locator::Id("customerPhone"),
        FormField::Comments => Locator::Id("customerComments"),
        FormField::Newsletter => Locator::Query(".newsletter-input".to_string()),
    }
}

/// Draws on the live page through `web-sys`.
///
/// Slots map to the element ids of the storefront page. Missing elements and
/// DOM exceptions are logged at warn and otherwise ignored.
pub struct DomSurface {
    window: Window,
    document: Document,
    logger: StructuredLogger,
}

impl DomSurface {
    /// Attach to the current window's document.
    pub fn new(logger: StructuredLogger) -> Result<Self, StorefrontError> {
        let window = web_sys::window()
            .ok_or_else(|| StorefrontError::Surface("Window is unavailable".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| StorefrontError::Surface("Document is unavailable".to_string()))?;
        Ok(Self {
            window,
            document,
            logger: logger.for_component("dom"),
        })
    }

    /// The attached document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn find(&self, locator: &Locator) -> Option<Element> {
        let found = match locator {
            Locator::Id(id) => self.document.get_element_by_id(id),
            Locator::Query(selector) => self.document.query_selector(selector).ok().flatten(),
        };
        if found.is_none() {
            let name = match locator {
                Locator::Id(id) => (*id).to_string(),
                Locator::Query(selector) => selector.clone(),
            };
            self.logger
                .warn_builder("element not found")
                .field("locator", name)
                .emit();
        }
        found
    }

    fn slot_element(&self, slot: Slot) -> Option<(Element, Reveal)> {
        let (locator, reveal) = slot_target(slot);
        self.find(&locator).map(|element| (element, reveal))
    }

    fn check(&self, action: &str, result: Result<(), JsValue>) {
        if let Err(error) = result {
            self.logger
                .warn_builder("DOM operation failed")
                .field("action", action)
                .field("error", error.as_string().unwrap_or_default())
                .emit();
        }
    }
}

impl Surface for DomSurface {
    fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some((element, _)) = self.slot_element(slot) {
            element.set_text_content(Some(text));
        }
    }

    fn set_markup(&mut self, slot: Slot, html: &str) {
        if let Some((element, _)) = self.slot_element(slot) {
            element.set_inner_html(html);
        }
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        let Some((element, reveal)) = self.slot_element(slot) else {
            return;
        };
        let result = match reveal {
            Reveal::Class(class) if visible => element.class_list().add_1(class),
            Reveal::Class(class) => element.class_list().remove_1(class),
            Reveal::Display(display) => match element.dyn_ref::<HtmlElement>() {
                Some(html) => html
                    .style()
                    .set_property("display", if visible { display } else { "none" }),
                None => Ok(()),
            },
        };
        self.check("set_visible", result);
    }

    fn set_enabled(&mut self, slot: Slot, enabled: bool) {
        let Some((element, _)) = self.slot_element(slot) else {
            return;
        };
        let result = if enabled {
            element.remove_attribute("disabled")
        } else {
            element.set_attribute("disabled", "")
        };
        self.check("set_enabled", result);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            let result = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
            self.check("set_scroll_locked", result);
        }
    }

    fn read_value(&self, field: FormField) -> String {
        let Some(element) = self.find(&field_locator(field)) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn write_value(&mut self, field: FormField, value: &str) {
        let Some(element) = self.find(&field_locator(field)) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn focus(&mut self, field: FormField) {
        let Some(element) = self.find(&field_locator(field)) else {
            return;
        };
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            self.check("focus", html.focus());
        }
    }

    fn notify(&mut self, message: &str) {
        let result = self.window.alert_with_message(message);
        self.check("notify", result);
    }
}
