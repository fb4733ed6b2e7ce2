//! Amount formatting using rust_decimal for precision
//!
//! Purchase amounts are kept as `Decimal` end to end and only turned into
//! text at the rendering edge.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Format an amount with two decimal places and comma thousands separators.
///
/// `1234567.891` becomes `"1,234,567.89"`, `-1500` becomes `"-1,500.00"`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(dec("7")), "7.00");
        assert_eq!(format_amount(dec("999.5")), "999.50");
    }

    #[test]
    fn test_format_thousands_separators() {
        assert_eq!(format_amount(dec("1000")), "1,000.00");
        assert_eq!(format_amount(dec("45999")), "45,999.00");
        assert_eq!(format_amount(dec("1234567.891")), "1,234,567.89");
        assert_eq!(format_amount(dec("100000000")), "100,000,000.00");
    }

    #[test]
    fn test_format_rounds_half_up() {
        assert_eq!(format_amount(dec("0.005")), "0.01");
        assert_eq!(format_amount(dec("2.675")), "2.68");
        assert_eq!(format_amount(dec("1999.994")), "1,999.99");
        assert_eq!(format_amount(dec("999.995")), "1,000.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_amount(dec("-1500")), "-1,500.00");
        assert_eq!(format_amount(dec("-0.001")), "0.00");
    }
}
