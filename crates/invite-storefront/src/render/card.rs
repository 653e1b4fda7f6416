//! Product card renderer.

use invite_commerce::catalog::Product;

use super::{actions, escape_html, render_stars};

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let id = escape_html(product.id.as_str());
    let name = escape_html(&product.name);

    let badge = product
        .badge
        .map(|badge| {
            format!(
                r#"<div class="product-badge {}">{}</div>"#,
                badge.css_class(),
                badge.label()
            )
        })
        .unwrap_or_default();

    let original_price = product
        .original_price
        .map(|price| format!(r#"<span class="original-price">{}</span>"#, price.display()))
        .unwrap_or_default();

    format!(
        r#"<div class="product-card" data-product-id="{id}">
    <div class="product-image">
        <img src="{image}" alt="{name}">
        {badge}
        <button class="product-favorite" aria-label="Add {name} to favorites">
            <i class="fas fa-heart"></i>
        </button>
        <div class="product-overlay">
            <button class="preview-btn" data-action="{preview}" data-product-id="{id}">
                <i class="fas fa-eye"></i> Preview
            </button>
        </div>
    </div>
    <div class="product-info">
        <h4 class="product-name">{name}</h4>
        <div class="product-rating">
            <div class="stars">{stars}</div>
            <span class="rating-count">({reviews})</span>
        </div>
        <div class="product-pricing">
            <div class="price-section">
                <span class="current-price">{price}</span>
                {original_price}
            </div>
            <button class="add-to-cart-btn" data-action="{add}" data-product-id="{id}">Add to Cart</button>
        </div>
    </div>
</div>"#,
        id = id,
        image = escape_html(&product.image),
        name = name,
        badge = badge,
        preview = actions::PREVIEW,
        stars = render_stars(product.rating),
        reviews = product.review_count(),
        price = product.price.display(),
        original_price = original_price,
        add = actions::ADD_TO_CART,
    )
}

/// Render a grid's worth of cards.
pub fn render_product_grid(products: &[Product]) -> String {
    products.iter().map(render_product_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_commerce::catalog::{Badge, Catalog, Category};
    use invite_commerce::ProductId;

    #[test]
    fn test_featured_card() {
        let catalog = Catalog::builtin();
        let html = render_product_card(catalog.find(&ProductId::new("2")).unwrap());

        assert!(html.contains("Elegant Punjabi Invitation"));
        assert!(html.contains(r#"<div class="product-badge badge-new">NEW</div>"#));
        assert!(html.contains("(189)"));
        assert!(html.contains(r#"<span class="current-price">₹299</span>"#));
        assert!(html.contains(r#"<span class="original-price">₹399</span>"#));
        assert!(html.contains(r#"data-action="preview" data-product-id="2""#));
        assert!(html.contains(r#"data-action="add-to-cart" data-product-id="2""#));
    }

    #[test]
    fn test_plain_card() {
        let catalog = Catalog::builtin();
        let html = render_product_card(catalog.find(&ProductId::new("f3")).unwrap());

        assert!(!html.contains("product-badge"));
        assert!(!html.contains("original-price"));
        // floor(4.6 * 50) in double precision
        assert!(html.contains("(229)"));
    }

    #[test]
    fn test_card_escapes_text() {
        let product = Product::new("x\"1", "<Fancy & Co>", 100, 4.0, "a.jpg").with_badge(Badge::Sale);
        let html = render_product_card(&product);
        assert!(html.contains("&lt;Fancy &amp; Co&gt;"));
        assert!(html.contains(r#"data-product-id="x&quot;1""#));
        assert!(!html.contains("<Fancy"));
    }

    #[test]
    fn test_grid_renders_each_product() {
        let catalog = Catalog::builtin();
        let html = render_product_grid(catalog.category(Category::Engagement));
        assert_eq!(html.matches(r#"class="product-card""#).count(), 4);
    }
}
