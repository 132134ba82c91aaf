//! Flash-sale price arithmetic.

/// Price after applying a percentage discount.
///
/// A missing discount means no discount. The percentage is not clamped, so
/// callers must keep it within `0..=100` for a meaningful result.
#[must_use]
pub fn discounted_price(discount: Option<f64>, price: f64) -> f64 {
    let discount = discount.unwrap_or(0.0);
    price * (100.0 - discount) / 100.0
}

/// Render a price with a leading `$`, using the shortest decimal form.
#[must_use]
pub fn price_label(value: f64) -> String {
    format!("${value}")
}

/// Render a discount badge such as `25% off`.
///
/// A missing discount leaves the number out and renders `% off`.
#[must_use]
pub fn discount_label(discount: Option<f64>) -> String {
    discount.map_or_else(|| "% off".to_string(), |discount| format!("{discount}% off"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_discount_keeps_price() {
        assert!((discounted_price(None, 200.0) - 200.0).abs() < f64::EPSILON);
        assert!((discounted_price(Some(0.0), 50.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn discount_is_applied_as_percentage() {
        assert!((discounted_price(Some(25.0), 200.0) - 150.0).abs() < f64::EPSILON);
        assert!((discounted_price(Some(100.0), 80.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_discounts_are_not_clamped() {
        assert!((discounted_price(Some(150.0), 100.0) + 50.0).abs() < f64::EPSILON);
        assert!((discounted_price(Some(-10.0), 100.0) - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn labels_use_shortest_form() {
        assert_eq!(price_label(150.0), "$150");
        assert_eq!(price_label(12.5), "$12.5");
        assert_eq!(discount_label(Some(25.0)), "25% off");
        assert_eq!(discount_label(None), "% off");
        assert_eq!(discount_label(Some(12.5)), "12.5% off");
    }
}
