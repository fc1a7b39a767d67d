//! Amount parsing and Indian digit grouping.

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// How amount strings are turned into whole rupees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Keep only ASCII digits. A decimal point is dropped along with the
    /// other separators, so `"1,234.56"` reads as `123456`.
    #[default]
    StripNonDigits,

    /// Read the digits before the decimal point only. A non-zero fractional
    /// part is rejected, `.00` is accepted. The `.` in a `Rs.` prefix is not a
    /// decimal point.
    WholeRupees,
}

/// Parse an amount by keeping only its ASCII digits.
///
/// Fails with [`ExtractionError::MalformedAmount`] when no digit is left or the
/// number does not fit in a `u64`.
pub fn parse_amount(text: &str) -> Result<u64, ExtractionError> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().map_err(|_| malformed(text))
}

/// Parse an amount under the given policy.
pub fn parse_amount_with(text: &str, policy: AmountPolicy) -> Result<u64, ExtractionError> {
    match policy {
        AmountPolicy::StripNonDigits => parse_amount(text),
        AmountPolicy::WholeRupees => {
            let whole = match decimal_point(text) {
                Some(i) => {
                    if text[i + 1..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .any(|c| c != '0')
                    {
                        return Err(malformed(text));
                    }
                    &text[..i]
                }
                None => text,
            };

            parse_amount(whole).map_err(|_| malformed(text))
        }
    }
}

/// Byte offset of the last `.` with a digit on both sides. A `.` after a
/// currency prefix such as `Rs.` is not a decimal point.
fn decimal_point(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    text.char_indices().rev().find_map(|(i, c)| {
        let between_digits = c == '.'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        between_digits.then_some(i)
    })
}

fn malformed(text: &str) -> ExtractionError {
    ExtractionError::MalformedAmount {
        value: text.to_string(),
    }
}

/// Format a number with Indian digit grouping (`12,34,567`).
pub fn format_indian(n: u64) -> String {
    group_indian(&n.to_string())
}

/// Format a digit string with Indian grouping, keeping an optional
/// `.fraction` verbatim (`"1234567.50"` -> `"12,34,567.50"`).
///
/// Strings that are not ASCII are returned unchanged.
pub fn format_indian_str(s: &str) -> String {
    if !s.is_ascii() {
        return s.to_string();
    }

    match s.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() => {
            format!("{}.{}", group_indian(whole), fraction)
        }
        Some((whole, _)) => group_indian(whole),
        None => group_indian(s),
    }
}

fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (rest, last3) = whole.split_at(whole.len() - 3);

    let mut groups = Vec::new();
    let mut end = rest.len();
    while end > 2 {
        groups.push(&rest[end - 2..end]);
        end -= 2;
    }
    groups.push(&rest[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_separators() {
        assert_eq!(parse_amount("1,000"), Ok(1000));
        assert_eq!(parse_amount("₹ 12,34,567"), Ok(1234567));
        assert_eq!(parse_amount(" 900 "), Ok(900));
        assert_eq!(parse_amount("Rs. 0"), Ok(0));
    }

    #[test]
    fn test_parse_amount_drops_decimal_point() {
        assert_eq!(parse_amount("1,234.56"), Ok(123456));
    }

    #[test]
    fn test_parse_amount_without_digits() {
        assert_eq!(
            parse_amount(""),
            Err(ExtractionError::MalformedAmount {
                value: String::new()
            })
        );
        assert!(matches!(
            parse_amount("₹ -"),
            Err(ExtractionError::MalformedAmount { .. })
        ));
    }

    #[test]
    fn test_parse_amount_overflow() {
        assert!(parse_amount("99999999999999999999999").is_err());
    }

    #[test]
    fn test_whole_rupees_policy() {
        let policy = AmountPolicy::WholeRupees;
        assert_eq!(parse_amount_with("1,000.00", policy), Ok(1000));
        assert_eq!(parse_amount_with("₹ 1,000", policy), Ok(1000));
        assert!(parse_amount_with("1,234.56", policy).is_err());
    }

    #[test]
    fn test_whole_rupees_ignores_currency_prefix_dot() {
        let policy = AmountPolicy::WholeRupees;
        assert_eq!(parse_amount_with("Rs. 1,000", policy), Ok(1000));
        assert_eq!(parse_amount_with("Rs.1,000", policy), Ok(1000));
        assert_eq!(parse_amount_with("Rs. 1,000.00", policy), Ok(1000));
        assert_eq!(
            parse_amount_with("Rs. 1,000.50", policy),
            Err(ExtractionError::MalformedAmount {
                value: "Rs. 1,000.50".to_string()
            })
        );
    }

    #[test]
    fn test_format_indian() {
        assert_eq!(format_indian(0), "0");
        assert_eq!(format_indian(100), "100");
        assert_eq!(format_indian(1234), "1,234");
        assert_eq!(format_indian(12345), "12,345");
        assert_eq!(format_indian(123456), "1,23,456");
        assert_eq!(format_indian(1234567), "12,34,567");
        assert_eq!(format_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_indian_str_keeps_fraction() {
        assert_eq!(format_indian_str("1234567.50"), "12,34,567.50");
        assert_eq!(format_indian_str("999"), "999");
        assert_eq!(format_indian_str("1000."), "1,000");
    }
}
