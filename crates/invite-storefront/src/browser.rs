//! Category browser.

use invite_commerce::catalog::{Catalog, Category};
use invite_observability::StructuredLogger;

use crate::render::render_product_grid;
use crate::surface::{Slot, Surface};

/// Label of the button of the expanded category.
pub const HIDE_LABEL: &str = "Hide Cards";

/// Label of every other category button.
pub const VIEW_LABEL: &str = "View Cards";

/// Expands one category at a time below the category buttons.
pub struct CategoryBrowser {
    selected: Option<Category>,
    logger: StructuredLogger,
}

impl CategoryBrowser {
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            selected: None,
            logger: logger.for_component("categories"),
        }
    }

    /// The expanded category, if any.
    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    /// Expand a category, or collapse it if it is already expanded.
    pub fn toggle<S: Surface>(&mut self, surface: &mut S, catalog: &Catalog, category: Category) {
        if self.selected == Some(category) {
            self.close(surface);
        } else {
            self.open(surface, catalog, category);
        }
    }

    /// Expand a category, replacing whichever one was open.
    pub fn open<S: Surface>(&mut self, surface: &mut S, catalog: &Catalog, category: Category) {
        self.selected = Some(category);
        let products = catalog.category(category);

        surface.set_text(Slot::CategoryTitle, category.title());
        surface.set_markup(Slot::CategoryGrid, &render_product_grid(products));
        surface.set_visible(Slot::CategorySection, true);

        for other in Category::ALL {
            let label = if other == category { HIDE_LABEL } else { VIEW_LABEL };
            surface.set_text(Slot::CategoryButton(other), label);
        }

        self.logger
            .debug_builder("category opened")
            .field("category", category.key())
            .field_u64("products", products.len() as u64)
            .emit();
    }

    /// Collapse the expanded category.
    pub fn close<S: Surface>(&mut self, surface: &mut S) {
        self.selected = None;
        surface.set_visible(Slot::CategorySection, false);
        for category in Category::ALL {
            surface.set_text(Slot::CategoryButton(category), VIEW_LABEL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use invite_observability::SessionId;

    fn browser() -> CategoryBrowser {
        CategoryBrowser::new(&StructuredLogger::capturing(SessionId::from_string("t")))
    }

    #[test]
    fn test_open_renders_category() {
        let catalog = Catalog::builtin();
        let mut surface = MemorySurface::new();
        let mut browser = browser();

        browser.open(&mut surface, &catalog, Category::Festival);

        assert_eq!(browser.selected(), Some(Category::Festival));
        assert!(surface.is_visible(Slot::CategorySection));
        assert_eq!(surface.text(Slot::CategoryTitle), Some("Festival Cards"));
        let grid = surface.markup(Slot::CategoryGrid).unwrap();
        assert_eq!(grid.matches(r#"class="product-card""#).count(), 4);
        assert!(grid.contains("Diwali Celebration"));
        assert_eq!(
            surface.text(Slot::CategoryButton(Category::Festival)),
            Some(HIDE_LABEL)
        );
        assert_eq!(
            surface.text(Slot::CategoryButton(Category::Wedding)),
            Some(VIEW_LABEL)
        );
    }

    #[test]
    fn test_single_selection() {
        let catalog = Catalog::builtin();
        let mut surface = MemorySurface::new();
        let mut browser = browser();

        browser.toggle(&mut surface, &catalog, Category::Wedding);
        browser.toggle(&mut surface, &catalog, Category::Engagement);

        assert_eq!(browser.selected(), Some(Category::Engagement));
        assert_eq!(surface.text(Slot::CategoryTitle), Some("Engagement Cards"));
        assert_eq!(
            surface.text(Slot::CategoryButton(Category::Wedding)),
            Some(VIEW_LABEL)
        );
        assert_eq!(
            surface.text(Slot::CategoryButton(Category::Engagement)),
            Some(HIDE_LABEL)
        );
    }

    #[test]
    fn test_toggle_same_category_closes() {
        let catalog = Catalog::builtin();
        let mut surface = MemorySurface::new();
        let mut browser = browser();

        browser.toggle(&mut surface, &catalog, Category::BabyShower);
        browser.toggle(&mut surface, &catalog, Category::BabyShower);

        assert_eq!(browser.selected(), None);
        assert!(!surface.is_visible(Slot::CategorySection));
        for category in Category::ALL {
            assert_eq!(surface.text(Slot::CategoryButton(category)), Some(VIEW_LABEL));
        }
    }
}
