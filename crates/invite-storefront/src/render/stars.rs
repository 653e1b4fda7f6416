//! Star rating renderer.

/// Number of stars in a rating row.
pub const MAX_STARS: usize = 5;

/// Render a five-star row with `round(rating)` stars filled.
pub fn render_stars(rating: f64) -> String {
    let filled = (rating.round().max(0.0) as usize).min(MAX_STARS);

    let mut html = String::new();
    for _ in 0..filled {
        html.push_str(r#"<i class="fas fa-star star"></i>"#);
    }
    for _ in filled..MAX_STARS {
        html.push_str(r#"<i class="far fa-star star star-empty"></i>"#);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str, class: &str) -> usize {
        html.matches(class).count()
    }

    #[test]
    fn test_high_rating_fills_all() {
        let html = render_stars(4.9);
        assert_eq!(count(&html, "fas fa-star"), 5);
        assert_eq!(count(&html, "star-empty"), 0);
    }

    #[test]
    fn test_partial_rating() {
        let html = render_stars(3.4);
        assert_eq!(count(&html, "fas fa-star"), 3);
        assert_eq!(count(&html, "star-empty"), 2);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(count(&render_stars(-1.0), "star-empty"), 5);
        assert_eq!(count(&render_stars(9.0), "fas fa-star"), 5);
    }
}
