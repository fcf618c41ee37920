//! Number formatting for tables (Indonesian style: `.` thousands, `,` decimals)

/// Formats a number with a thousands separator and the given decimals
///
/// # Examples
///
/// ```
/// # use frontend::shared::components::table::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{},{}", result, d),
        None => result,
    }
}

/// Whole number with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Rupiah amount, no decimals: `Rp 11.500`
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_number_int(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(11500.0), "Rp 11.500");
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-2500.0), "Rp -2.500");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(999.0), "999");
    }
}
