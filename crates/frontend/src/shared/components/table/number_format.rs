//! Number formatting helpers for tables and stat cards

/// Formats a number with a thousands separator and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value);

    // Split integer and fractional parts
    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or_default();
    let decimal_part = parts.next();

    // Insert the separator every 3 digits from the end of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(separator);
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Unit price: dollar sign and exactly two decimals, no grouping
///
/// ```
/// use frontend::shared::components::table::format_price;
/// assert_eq!(format_price(5.5), "$5.50");
/// ```
pub fn format_price(value: f64) -> String {
    format!("${:.2}", positive_zero(value))
}

/// Money total: dollar sign, comma grouping, two decimals
///
/// ```
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(1234567.891), "$1,234,567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let value = positive_zero(value);
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 2, ','))
    } else {
        format!("${}", format_number_with_decimals(value, 2, ','))
    }
}

/// Maps `-0.0` to `0.0`
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
