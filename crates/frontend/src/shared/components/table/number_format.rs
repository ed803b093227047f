//! Number and money formatting for table cells

/// Formats a number with a thousands separator and the given number of
/// decimal places
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let precision = if decimals > 3 { 2 } else { decimals as usize };
    let formatted = format!("{:.*}", precision, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (digits, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money in the fixed display currency: code, grouping, 2 decimals
///
/// ```
/// use frontend::shared::components::table::format_currency;
/// assert_eq!(format_currency(1234567.891, "NPR"), "NPR 1,234,567.89");
/// ```
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_number_with_decimals(value, 2))
}

/// Optional price cell; absent prices render as `N/A`
pub fn format_price(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(v) => format_currency(v, currency),
        None => "N/A".to_string(),
    }
}

/// Integer with a thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
