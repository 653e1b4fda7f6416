//! Product detail (preview) renderer.

use invite_commerce::catalog::Product;

use super::{actions, escape_html, render_stars};

const DESCRIPTION: &str = "Exquisite traditional wedding invitation featuring intricate design \
work and premium cardstock. Perfect for celebrating your special day with elegance and cultural \
authenticity.";

/// Selling points listed under every product.
pub const PRODUCT_FEATURES: [&str; 6] = [
    "Premium 300gsm cardstock",
    "Gold foil embossing",
    "Traditional design elements",
    "Customizable text and colors",
    "Matching envelope included",
    "Minimum order: 50 pieces",
];

const ORDER_NOTES: [&str; 3] = [
    "Free shipping on orders above ₹500",
    "7-10 business days delivery",
    "Quality guarantee with premium materials",
];

/// Render the preview overlay content for a product.
pub fn render_product_detail(product: &Product) -> String {
    let id = escape_html(product.id.as_str());
    let name = escape_html(&product.name);

    let badge = product
        .badge
        .map(|badge| {
            format!(
                r#"<div class="modal-badge {}">{}</div>"#,
                badge.css_class(),
                badge.label()
            )
        })
        .unwrap_or_default();

    let original_price = product
        .original_price
        .map(|price| {
            format!(
                r#"<span class="modal-original-price">{}</span>"#,
                price.display()
            )
        })
        .unwrap_or_default();

    let discount = product
        .discount_percent()
        .map(|percent| format!(r#"<span class="modal-discount">{}% OFF</span>"#, percent))
        .unwrap_or_default();

    let features: String = PRODUCT_FEATURES
        .iter()
        .map(|feature| format!("<li>• {}</li>", feature))
        .collect();

    let notes: String = ORDER_NOTES
        .iter()
        .map(|note| format!("<p>• {}</p>", note))
        .collect();

    format!(
        r#"<div class="modal-grid">
    <div class="modal-image">
        <img src="{image}" alt="{name}">
        {badge}
        <button class="modal-favorite" aria-label="Add {name} to favorites">
            <i class="fas fa-heart"></i>
        </button>
    </div>
    <div class="modal-details">
        <div class="modal-product-info">
            <h2>{name}</h2>
            <div class="modal-rating">
                <div class="stars">{stars}</div>
                <span class="rating-count">({reviews} reviews)</span>
            </div>
            <div class="modal-pricing">
                <span class="modal-current-price">{price}</span>
                {original_price}
                {discount}
            </div>
        </div>
        <div class="modal-description">
            <p>{description}</p>
        </div>
        <div class="modal-features">
            <h4>Key Features:</h4>
            <ul>{features}</ul>
        </div>
        <div class="modal-actions">
            <button class="modal-add-to-cart" data-action="{add}" data-product-id="{id}">
                <i class="fas fa-shopping-cart"></i>
                Add to Cart
            </button>
            <button class="modal-customize">Customize This Design</button>
        </div>
        <div class="modal-info">{notes}</div>
    </div>
</div>"#,
        image = escape_html(&product.image),
        name = name,
        badge = badge,
        stars = render_stars(product.rating),
        reviews = product.review_count(),
        price = product.price.display(),
        original_price = original_price,
        discount = discount,
        description = DESCRIPTION,
        features = features,
        add = actions::PREVIEW_ADD_TO_CART,
        id = id,
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_commerce::catalog::Catalog;
    use invite_commerce::ProductId;

    #[test]
    fn test_discounted_detail() {
        let catalog = Catalog::builtin();
        let html = render_product_detail(catalog.find(&ProductId::new("1")).unwrap());

        assert!(html.contains("<h2>Royal Marathi Wedding Card</h2>"));
        assert!(html.contains("(234 reviews)"));
        assert!(html.contains(r#"<span class="modal-discount">20% OFF</span>"#));
        assert!(html.contains(r#"<span class="modal-original-price">₹499</span>"#));
        assert!(html.contains(r#"data-action="preview-add-to-cart" data-product-id="1""#));
        for feature in PRODUCT_FEATURES {
            assert!(html.contains(feature), "{feature}");
        }
    }

    #[test]
    fn test_undiscounted_detail() {
        let catalog = Catalog::builtin();
        let html = render_product_detail(catalog.find(&ProductId::new("e4")).unwrap());

        assert!(!html.contains("% OFF"));
        assert!(!html.contains("modal-original-price"));
        assert!(!html.contains("modal-badge"));
        assert!(html.contains("(225 reviews)"));
    }
}
