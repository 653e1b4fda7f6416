//! In-memory surface for headless runs and tests.

use std::collections::HashMap;

use super::{FormField, Slot, Surface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SlotState {
    text: Option<String>,
    markup: Option<String>,
    visible: Option<bool>,
    enabled: Option<bool>,
}

/// Records everything written to it.
///
/// Slots start hidden and enabled with no content, matching a freshly
/// loaded page where overlays and the cart are closed.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    slots: HashMap<Slot, SlotState>,
    values: HashMap<FormField, String>,
    focused: Option<FormField>,
    scroll_locked: bool,
    notices: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written to a slot.
    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot)?.text.as_deref()
    }

    /// Last markup written to a slot.
    pub fn markup(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot)?.markup.as_deref()
    }

    pub fn is_visible(&self, slot: Slot) -> bool {
        self.slots
            .get(&slot)
            .and_then(|s| s.visible)
            .unwrap_or(false)
    }

    pub fn is_enabled(&self, slot: Slot) -> bool {
        self.slots
            .get(&slot)
            .and_then(|s| s.enabled)
            .unwrap_or(true)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Input that last received focus.
    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    /// Every message shown so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Most recent message.
    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }

    /// Forget shown messages.
    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }

    /// Type into an input, as a customer would.
    pub fn fill(&mut self, field: FormField, value: &str) -> &mut Self {
        self.write_value(field, value);
        self
    }

    fn slot(&mut self, slot: Slot) -> &mut SlotState {
        self.slots.entry(slot).or_default()
    }
}

impl Surface for MemorySurface {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.slot(slot).text = Some(text.to_string());
    }

    fn set_markup(&mut self, slot: Slot, html: &str) {
        self.slot(slot).markup = Some(html.to_string());
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        self.slot(slot).visible = Some(visible);
    }

    fn set_enabled(&mut self, slot: Slot, enabled: bool) {
        self.slot(slot).enabled = Some(enabled);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn read_value(&self, field: FormField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn write_value(&mut self, field: FormField, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let surface = MemorySurface::new();
        assert!(!surface.is_visible(Slot::CartPanel));
        assert!(surface.is_enabled(Slot::CheckoutButton));
        assert_eq!(surface.text(Slot::CartBadge), None);
        assert_eq!(surface.read_value(FormField::Email), "");
    }

    #[test]
    fn test_records_writes() {
        let mut surface = MemorySurface::new();
        surface.set_text(Slot::CartBadge, "3");
        surface.set_visible(Slot::CartBadge, true);
        surface.set_enabled(Slot::CheckoutButton, false);
        surface.fill(FormField::Phone, "12345");
        surface.focus(FormField::Phone);
        surface.notify("hello");

        assert_eq!(surface.text(Slot::CartBadge), Some("3"));
        assert!(surface.is_visible(Slot::CartBadge));
        assert!(!surface.is_enabled(Slot::CheckoutButton));
        assert_eq!(surface.read_value(FormField::Phone), "12345");
        assert_eq!(surface.focused(), Some(FormField::Phone));
        assert_eq!(surface.last_notice(), Some("hello"));
    }
}
