//! The catalog table and lookups over it.

use super::{Badge, Category, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PHOTO_BLOSSOM: &str =
    "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=300&h=400&fit=crop";
const PHOTO_PAPER: &str =
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=400&fit=crop";
const PHOTO_FLORAL: &str =
    "https://images.unsplash.com/photo-1594736797933-d0401ba2fe65?w=300&h=400&fit=crop";

/// Read-only product table: a featured list plus per-category lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    featured: Vec<Product>,
    categories: BTreeMap<Category, Vec<Product>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a featured product.
    pub fn with_featured(mut self, product: Product) -> Self {
        self.featured.push(product);
        self
    }

    /// Append a product to a category.
    pub fn with_product(mut self, category: Category, product: Product) -> Self {
        self.categories.entry(category).or_default().push(product);
        self
    }

    /// Look up a product by id.
    ///
    /// Featured products are searched first, then each category in
    /// [`Category::ALL`] order. The first match wins.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.iter().find(|p| &p.id == id)
    }

    /// Featured products in display order.
    pub fn featured(&self) -> &[Product] {
        &self.featured
    }

    /// Products of one category in display order.
    pub fn category(&self, category: Category) -> &[Product] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every product in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.featured
            .iter()
            .chain(Category::ALL.into_iter().flat_map(move |c| self.category(c)))
    }

    /// Total number of products, counting duplicates across lists.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The storefront's hand-authored card table.
    pub fn builtin() -> Self {
        use Category::*;

        Catalog::new()
            .with_featured(
                Product::new("1", "Royal Marathi Wedding Card", 399, 4.9, "Sample/Aadhya.jpg")
                    .with_original_price(499)
                    .with_reviews(234),
            )
            .with_featured(
                Product::new(
                    "2",
                    "Elegant Punjabi Invitation",
                    299,
                    4.8,
                    "Sample/gruhpravesh_tejas.jpg",
                )
                .with_original_price(399)
                .with_reviews(189)
                .with_badge(Badge::New),
            )
            .with_featured(
                Product::new(
                    "3",
                    "Traditional South Indian Card",
                    349,
                    4.9,
                    "Sample/pooja_printready_file_maroon_ol.jpg",
                )
                .with_original_price(449)
                .with_reviews(156)
                .with_badge(Badge::Popular),
            )
            .with_featured(
                Product::new("4", "Modern Gujarati Design", 279, 4.7, "Sample/mehandi.jpg")
                    .with_original_price(359)
                    .with_reviews(98)
                    .with_badge(Badge::Sale),
            )
            .with_product(Wedding, Product::new("w1", "Royal Marathi Wedding", 399, 4.9, PHOTO_BLOSSOM))
            .with_product(Wedding, Product::new("w2", "Elegant Punjabi Card", 299, 4.8, PHOTO_PAPER))
            .with_product(Wedding, Product::new("w3", "Traditional South Indian", 349, 4.9, PHOTO_FLORAL))
            .with_product(Wedding, Product::new("w4", "Modern Gujarati Design", 279, 4.7, PHOTO_BLOSSOM))
            .with_product(Engagement, Product::new("e1", "Rose Gold Engagement", 249, 4.8, PHOTO_PAPER))
            .with_product(Engagement, Product::new("e2", "Classic Ring Design", 199, 4.6, PHOTO_FLORAL))
            .with_product(Engagement, Product::new("e3", "Floral Engagement Card", 229, 4.7, PHOTO_PAPER))
            .with_product(Engagement, Product::new("e4", "Modern Minimalist", 189, 4.5, PHOTO_PAPER))
            .with_product(BabyShower, Product::new("b1", "Cute Baby Elephant", 179, 4.9, PHOTO_FLORAL))
            .with_product(BabyShower, Product::new("b2", "Pink Princess Theme", 159, 4.8, PHOTO_PAPER))
            .with_product(BabyShower, Product::new("b3", "Blue Safari Adventure", 169, 4.7, PHOTO_PAPER))
            .with_product(BabyShower, Product::new("b4", "Gender Neutral Stars", 149, 4.6, PHOTO_PAPER))
            .with_product(Festival, Product::new("f1", "Diwali Celebration", 129, 4.8, PHOTO_BLOSSOM))
            .with_product(Festival, Product::new("f2", "Raksha Bandhan Special", 99, 4.7, PHOTO_PAPER))
            .with_product(Festival, Product::new("f3", "Holi Colors", 109, 4.6, PHOTO_PAPER))
            .with_product(Festival, Product::new("f4", "Ganesh Chaturthi", 139, 4.9, PHOTO_BLOSSOM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.featured().len(), 4);
        for category in Category::ALL {
            assert_eq!(catalog.category(category).len(), 4, "{category}");
        }
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_find_featured_and_categorized() {
        let catalog = Catalog::builtin();

        let card = catalog.find(&ProductId::new("1")).unwrap();
        assert_eq!(card.price, Money::new(399));
        assert_eq!(card.original_price, Some(Money::new(499)));

        let festival = catalog.find(&ProductId::new("f2")).unwrap();
        assert_eq!(festival.name, "Raksha Bandhan Special");
        assert_eq!(festival.price, Money::new(99));
    }

    #[test]
    fn test_find_miss() {
        assert!(Catalog::builtin().find(&ProductId::new("zz")).is_none());
    }

    #[test]
    fn test_featured_wins_on_duplicate_id() {
        let catalog = Catalog::new()
            .with_product(Category::Wedding, Product::new("x", "Category copy", 10, 4.0, "c.jpg"))
            .with_featured(Product::new("x", "Featured copy", 20, 4.0, "f.jpg"));

        assert_eq!(catalog.find(&ProductId::new("x")).unwrap().name, "Featured copy");
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.category(Category::Festival).is_empty());
        assert!(catalog.is_empty());
    }
}
