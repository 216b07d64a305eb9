//! Lenient parsing and compact formatting of large numbers ("2.5M", "1,000")

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const THOUSAND: Decimal = dec!(1000);
const MILLION: Decimal = dec!(1000000);
const BILLION: Decimal = dec!(1000000000);

/// Parse a number with an optional trailing `k`, `m` or `b` (any case).
///
/// Thousands separators and surrounding whitespace are ignored. Anything
/// that still fails to parse, including the empty string, yields zero.
pub fn parse_magnitude(text: &str) -> Decimal {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let (number, scale) = match cleaned.chars().last().map(|c| c.to_ascii_lowercase()) {
        Some('k') => (&cleaned[..cleaned.len() - 1], THOUSAND),
        Some('m') => (&cleaned[..cleaned.len() - 1], MILLION),
        Some('b') => (&cleaned[..cleaned.len() - 1], BILLION),
        _ => (cleaned.as_str(), Decimal::ONE),
    };

    Decimal::from_str(number.trim())
        .ok()
        .and_then(|value| value.checked_mul(scale))
        .unwrap_or(Decimal::ZERO)
}

/// Format a number compactly with an upper-case suffix and at most two
/// decimals, e.g. 2_500_000 -> "2.5M". Digits past the second decimal of the
/// scaled value are dropped, so parsing the output may not give back the
/// exact input.
pub fn format_number(value: Decimal) -> String {
    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= BILLION {
        (value / BILLION, "B")
    } else if magnitude >= MILLION {
        (value / MILLION, "M")
    } else if magnitude >= THOUSAND {
        (value / THOUSAND, "K")
    } else {
        (value, "")
    };

    format!("{}{}", scaled.round_dp(2).normalize(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_case_insensitive() {
        assert_eq!(parse_magnitude("3b"), dec!(3000000000));
        assert_eq!(parse_magnitude("3B"), dec!(3000000000));
        assert_eq!(parse_magnitude("40K"), dec!(40000));
    }

    #[test]
    fn bare_suffix_is_zero() {
        assert_eq!(parse_magnitude("k"), Decimal::ZERO);
    }

    #[test]
    fn formats_below_thousand_without_suffix() {
        assert_eq!(format_number(dec!(999.5)), "999.5");
        assert_eq!(format_number(Decimal::ZERO), "0");
    }
}
