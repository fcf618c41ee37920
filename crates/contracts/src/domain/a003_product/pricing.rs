//! Sale price derivation from purchase price and margin.
//!
//! `harga = round(harga_beli * (1 + margin / 100))`. The result is always
//! derived, never typed in by the user.

/// Parses a form input as a number. Empty or non-numeric text is 0.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Sale price for `purchase_price` marked up by `margin_percent`.
///
/// Halves round up. Margins are not clamped.
pub fn sale_price(purchase_price: f64, margin_percent: f64) -> i64 {
    let raw = purchase_price * (1.0 + margin_percent / 100.0);
    if !raw.is_finite() {
        return 0;
    }
    round_half_up(raw) as i64
}

/// `x + 0.5` can itself round up in floating point, so compare the fraction.
fn round_half_up(x: f64) -> f64 {
    let whole = x.floor();
    if x - whole >= 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

/// [`sale_price`] over raw form inputs.
pub fn sale_price_from_input(purchase_price: &str, margin_percent: &str) -> i64 {
    sale_price(parse_amount(purchase_price), parse_amount(margin_percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(sale_price(10000.0, 15.0), 11500);
        assert_eq!(sale_price(0.0, 50.0), 0);
        assert_eq!(sale_price(9999.0, 0.0), 9999);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(sale_price(1000.0, 12.5), 1125);
        assert_eq!(sale_price(1001.0, 12.5), 1126); // 1126.125
        assert_eq!(sale_price(3.0, 50.0), 5); // 4.5 rounds up
        assert_eq!(sale_price(7.0, 10.0), 8); // 7.7
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(sale_price(0.49999999999999994, 0.0), 0);
        assert_eq!(sale_price(0.5, 0.0), 1);
        assert_eq!(sale_price(2.4999999999999996, 0.0), 2);
    }

    #[test]
    fn test_large_margin_not_clamped() {
        assert_eq!(sale_price(1000.0, 1000.0), 11000);
        assert_eq!(sale_price(2500.0, 250.0), 8750);
    }

    #[test]
    fn test_invalid_input_degrades_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(sale_price_from_input("", "20"), 0);
        assert_eq!(sale_price_from_input("5000", "x"), 5000);
        assert_eq!(sale_price_from_input("10000", "15"), 11500);
    }

    #[test]
    fn test_idempotent() {
        let first = sale_price(12345.0, 17.0);
        let second = sale_price(12345.0, 17.0);
        assert_eq!(first, second);
        assert_eq!(first, 14444); // 14443.65
    }
}
