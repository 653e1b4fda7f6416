//! Product and badge types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Promotional tag shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    Bestseller,
    New,
    Popular,
    Sale,
}

impl Badge {
    /// Text printed on the badge.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Bestseller => "BESTSELLER",
            Badge::New => "NEW",
            Badge::Popular => "POPULAR",
            Badge::Sale => "SALE",
        }
    }

    /// CSS class selecting the badge colour.
    pub fn css_class(&self) -> &'static str {
        match self {
            Badge::Bestseller => "badge-bestseller",
            Badge::New => "badge-new",
            Badge::Popular => "badge-popular",
            Badge::Sale => "badge-sale",
        }
    }
}

/// A product in the catalog.
///
/// Products are built once when the catalog is constructed and never change
/// for the lifetime of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Selling price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Optional promotional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Average rating between 0 and 5.
    pub rating: f64,
    /// Number of reviews, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    /// Image URL or relative path.
    pub image: String,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: i64,
        rating: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Money::new(price),
            original_price: None,
            badge: None,
            rating: rating.clamp(0.0, 5.0),
            reviews: None,
            image: image.into(),
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, price: i64) -> Self {
        self.original_price = Some(Money::new(price));
        self
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the review count.
    pub fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = Some(reviews);
        self
    }

    /// Review count to display. Products without a recorded count show
    /// fifty reviews per rating point.
    pub fn review_count(&self) -> u32 {
        self.reviews
            .unwrap_or_else(|| (self.rating * 50.0).floor() as u32)
    }

    /// Check if the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Rounded discount percentage, if the product is discounted.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if original.amount <= 0 {
            return None;
        }
        let ratio = 1.0 - self.price.amount as f64 / original.amount as f64;
        let percent = (ratio * 100.0).round();
        (percent > 0.0).then(|| percent.min(100.0) as u8)
    }
}

/// What the cart is asked to add: an identifier to look up, or a full record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductRef {
    /// Resolve through the catalog.
    Id(ProductId),
    /// Use the record as given.
    Record(Product),
}

impl From<ProductId> for ProductRef {
    fn from(id: ProductId) -> Self {
        ProductRef::Id(id)
    }
}

impl From<&ProductId> for ProductRef {
    fn from(id: &ProductId) -> Self {
        ProductRef::Id(id.clone())
    }
}

impl From<&str> for ProductRef {
    fn from(id: &str) -> Self {
        ProductRef::Id(ProductId::new(id))
    }
}

impl From<Product> for ProductRef {
    fn from(product: Product) -> Self {
        ProductRef::Record(product)
    }
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        ProductRef::Record(product.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_count_fallback() {
        let product = Product::new("w1", "Royal Marathi Wedding", 399, 4.9, "w1.jpg");
        assert_eq!(product.review_count(), 245);

        let product = product.with_reviews(234);
        assert_eq!(product.review_count(), 234);

        let product = Product::new("w4", "Modern Gujarati Design", 279, 4.7, "w4.jpg");
        assert_eq!(product.review_count(), 235);
    }

    #[test]
    fn test_discount_percent() {
        let product = Product::new("1", "Royal Marathi Wedding Card", 399, 4.9, "a.jpg")
            .with_original_price(499);
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percent(), Some(20));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let product = Product::new("f2", "Raksha Bandhan Special", 99, 4.7, "f2.jpg");
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_badge_serde_names() {
        let json = serde_json::to_string(&Badge::Bestseller).unwrap();
        assert_eq!(json, "\"BESTSELLER\"");
        let badge: Badge = serde_json::from_str("\"SALE\"").unwrap();
        assert_eq!(badge, Badge::Sale);
        assert!(serde_json::from_str::<Badge>("\"HOT\"").is_err());
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(Badge::New.css_class(), "badge-new");
        assert_eq!(Badge::Popular.label(), "POPULAR");
    }

    #[test]
    fn test_product_ref_conversions() {
        assert_eq!(ProductRef::from("b2"), ProductRef::Id(ProductId::new("b2")));
        let product = Product::new("b2", "Pink Princess Theme", 159, 4.8, "b2.jpg");
        assert!(matches!(ProductRef::from(&product), ProductRef::Record(p) if p == product));
    }
}
