//! Price parsing for scraped storefront text such as `"R$ 1.234,56"`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

static PRICE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.,]*").expect("valid regex"));

/// Parses the first price found in `raw`.
///
/// Currency symbols, spaces and labels are ignored. Both Brazilian
/// (`1.234,56`) and US (`1,234.56`) separators are understood:
///
/// - with both `,` and `.` present, the right-most one is the decimal mark;
/// - a single `,` is the decimal mark, repeated `,` are thousands separators;
/// - repeated `.`, or a single `.` followed by exactly three digits, are
///   thousands separators; otherwise `.` is the decimal mark.
///
/// Returns `None` unless the result is strictly greater than zero.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let token = PRICE_TOKEN_RE.find(raw)?.as_str();
    let token = token.trim_end_matches([',', '.']);
    let normalized = normalize_separators(token);
    let value = Decimal::from_str(&normalized).ok()?;
    (value > Decimal::ZERO).then_some(value)
}

fn normalize_separators(token: &str) -> String {
    let last_comma = token.rfind(',');
    let last_dot = token.rfind('.');

    match (last_comma, last_dot) {
        (Some(comma), Some(dot)) => {
            let split = comma.max(dot);
            let (int_part, frac_part) = token.split_at(split);
            format!("{}.{}", digits_only(int_part), &frac_part[1..])
        }
        (Some(comma), None) => {
            if token.matches(',').count() > 1 {
                digits_only(token)
            } else {
                format!("{}.{}", &token[..comma], &token[comma + 1..])
            }
        }
        (None, Some(dot)) => {
            let frac_len = token.len() - dot - 1;
            if token.matches('.').count() > 1 || frac_len == 3 {
                digits_only(token)
            } else {
                token.to_string()
            }
        }
        (None, None) => token.to_string(),
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn brazilian_thousands_and_cents() {
        assert_eq!(parse_price("R$ 1.234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn brazilian_cents_only() {
        assert_eq!(parse_price("R$ 59,90"), Some(dec("59.90")));
    }

    #[test]
    fn brazilian_millions() {
        assert_eq!(parse_price("R$\u{a0}1.234.567,89"), Some(dec("1234567.89")));
    }

    #[test]
    fn us_notation() {
        assert_eq!(parse_price("$12.99"), Some(dec("12.99")));
        assert_eq!(parse_price("US$ 1,299.00"), Some(dec("1299.00")));
    }

    #[test]
    fn lone_dot_with_three_digits_is_thousands() {
        assert_eq!(parse_price("R$ 1.299"), Some(dec("1299")));
    }

    #[test]
    fn repeated_commas_are_thousands() {
        assert_eq!(parse_price("1,234,567"), Some(dec("1234567")));
    }

    #[test]
    fn integer_price() {
        assert_eq!(parse_price("R$ 150"), Some(dec("150")));
    }

    #[test]
    fn first_price_wins_when_several_are_present() {
        assert_eq!(
            parse_price("De: R$ 1.999,00 Por: R$ 1.499,00"),
            Some(dec("1999.00"))
        );
    }

    #[test]
    fn trailing_separator_is_ignored() {
        assert_eq!(parse_price("R$ 10."), Some(dec("10")));
    }

    #[test]
    fn zero_and_empty_are_rejected() {
        assert_eq!(parse_price("R$ 0,00"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("Indisponível"), None);
    }
}
