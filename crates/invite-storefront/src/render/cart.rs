//! Cart line list renderer.

use invite_commerce::cart::CartLine;

use super::{actions, escape_html};

/// Render the cart's line items.
pub fn render_cart_lines(lines: &[CartLine]) -> String {
    lines.iter().map(render_cart_line).collect()
}

fn render_cart_line(line: &CartLine) -> String {
    let id = escape_html(line.id.as_str());
    let name = escape_html(&line.name);

    let image = if line.image.is_empty() {
        r#"<div class="no-image">No image</div>"#.to_string()
    } else {
        format!(r#"<img src="{}" alt="{}">"#, escape_html(&line.image), name)
    };

    let decrease_disabled = if line.quantity <= 1 { " disabled" } else { "" };

    format!(
        r#"<div class="cart-item" role="listitem">
    <div class="cart-item-image">{image}</div>
    <div class="cart-item-details">
        <div class="cart-item-header">
            <div class="cart-item-info">
                <h4>{name}</h4>
                <p>Personalized Name Title: Yes</p>
            </div>
            <button class="cart-item-remove" data-action="{remove}" data-item-id="{id}" aria-label="Remove {name} from cart">
                <i class="fas fa-times"></i>
            </button>
        </div>
        <div class="cart-item-controls">
            <div class="cart-item-price">{price}</div>
            <div class="quantity-controls" role="group" aria-label="Quantity controls for {name}">
                <button class="quantity-btn quantity-decrease" data-action="{decrease}" data-item-id="{id}"{decrease_disabled} aria-label="Decrease quantity">
                    <i class="fas fa-minus"></i>
                </button>
                <span class="quantity-display" aria-label="Quantity">{quantity}</span>
                <button class="quantity-btn quantity-increase" data-action="{increase}" data-item-id="{id}" aria-label="Increase quantity">
                    <i class="fas fa-plus"></i>
                </button>
            </div>
            <div class="cart-item-total">{total}</div>
        </div>
        <button class="remove-link" data-action="{remove}" data-item-id="{id}" aria-label="Remove {name} from cart">Remove</button>
    </div>
</div>"#,
        image = image,
        name = name,
        remove = actions::REMOVE_ITEM,
        id = id,
        price = line.price.display_fixed(),
        decrease = actions::DECREASE_QUANTITY,
        decrease_disabled = decrease_disabled,
        quantity = line.quantity,
        increase = actions::INCREASE_QUANTITY,
        total = line.line_total().display_fixed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_commerce::prelude::*;

    fn cart_with(ids: &[&str]) -> Cart {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for id in ids {
            cart.add(&catalog, *id);
        }
        cart
    }

    #[test]
    fn test_line_prices_and_quantity() {
        let cart = cart_with(&["1", "1"]);
        let html = render_cart_lines(cart.lines());

        assert!(html.contains(r#"<div class="cart-item-price">₹399.00</div>"#));
        assert!(html.contains(r#"<div class="cart-item-total">₹798.00</div>"#));
        assert!(html.contains(r#"<span class="quantity-display" aria-label="Quantity">2</span>"#));
        assert!(html.contains("Personalized Name Title: Yes"));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_decrease_disabled_at_one() {
        let cart = cart_with(&["w2"]);
        let html = render_cart_lines(cart.lines());
        assert!(html.contains(r#"data-action="decrease-quantity" data-item-id="w2" disabled"#));
    }

    #[test]
    fn test_remove_buttons() {
        let cart = cart_with(&["b3"]);
        let html = render_cart_lines(cart.lines());
        assert_eq!(
            html.matches(r#"data-action="remove-item" data-item-id="b3""#).count(),
            2
        );
    }

    #[test]
    fn test_missing_image_placeholder() {
        let mut cart = Cart::new();
        cart.add_product(&Product::new("p", "Plain", 50, 4.0, ""));
        let html = render_cart_lines(cart.lines());
        assert!(html.contains(r#"<div class="no-image">No image</div>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_one_block_per_line() {
        let cart = cart_with(&["w1", "e1", "w1"]);
        let html = render_cart_lines(cart.lines());
        assert_eq!(html.matches(r#"class="cart-item""#).count(), 2);
    }
}
