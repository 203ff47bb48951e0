//! # Formatting Helpers
//!
//! Pure string transforms of already-computed numbers. None of these
//! validate or modify the underlying value.

use crate::settings::{FormatSettings, SymbolPosition};

/// Decimal places used when the caller does not ask for any.
pub const DEFAULT_DECIMALS: usize = 2;

/// Decimal places for friability sample weights.
pub const FRIABILITY_WEIGHT_DECIMALS: usize = 4;

/// Fixed two-decimal monetary string with digit grouping.
///
/// Negative values carry a leading minus before the symbol (`-$1,234.56`).
///
/// ```rust
/// use calc_core::formatting::format_currency;
/// use calc_core::settings::FormatSettings;
///
/// let us = FormatSettings::default();
/// assert_eq!(format_currency(1234567.891, &us), "$1,234,567.89");
/// assert_eq!(format_currency(-42.0, &us), "-$42.00");
/// ```
pub fn format_currency(value: f64, settings: &FormatSettings) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_digits(int_part, &settings.thousands_separator);
    let number = format!("{}{}{}", grouped, settings.decimal_separator, frac_part);

    // "-0.00" would otherwise appear for tiny negatives
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    match settings.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, settings.currency_symbol, number),
        SymbolPosition::Suffix => format!("{}{}\u{a0}{}", sign, number, settings.currency_symbol),
    }
}

/// Fixed two-decimal value followed by a percent sign.
///
/// ```rust
/// use calc_core::formatting::format_percentage;
///
/// assert_eq!(format_percentage(0.5), "0.50%");
/// ```
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Fixed-precision numeric string.
///
/// ```rust
/// use calc_core::formatting::{format_decimal, DEFAULT_DECIMALS};
///
/// assert_eq!(format_decimal(6.5, 4), "6.5000");
/// assert_eq!(format_decimal(10.0, DEFAULT_DECIMALS), "10.00");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_en_us() {
        let us = FormatSettings::default();
        assert_eq!(format_currency(0.0, &us), "$0.00");
        assert_eq!(format_currency(999.999, &us), "$1,000.00");
        assert_eq!(format_currency(243.43, &us), "$243.43");
        assert_eq!(format_currency(-1234.5, &us), "-$1,234.50");
    }

    #[test]
    fn test_currency_tiny_negative_has_no_sign() {
        let us = FormatSettings::default();
        assert_eq!(format_currency(-0.001, &us), "$0.00");
    }

    #[test]
    fn test_currency_suffix_locale() {
        let de = FormatSettings::for_locale("de-DE").unwrap();
        assert_eq!(format_currency(1234567.5, &de), "1.234.567,50\u{a0}€");
        assert_eq!(format_currency(-12.0, &de), "-12,00\u{a0}€");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("123456", ","), "123,456");
        assert_eq!(group_digits("1234567", ","), "1,234,567");
        assert_eq!(group_digits("1234567", ""), "1234567");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(1.0), "1.00%");
        assert_eq!(format_percentage(12.3456), "12.35%");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(format_decimal(0.0325, FRIABILITY_WEIGHT_DECIMALS), "0.0325");
        assert_eq!(format_decimal(2.0, 0), "2");
    }
}
