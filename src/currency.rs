//! Currency normalization
//!
//! Converts human-entered decimal amounts into integer minor units ("cents")
//! and back. Both `.` and `,` are accepted as the decimal separator, so
//! `"10295.10"` and `"10295,10"` normalize to the same amount. Thousands
//! grouping is NOT supported: `"10,295"` reads as `10.295`.
//!
//! Every currency is treated as having two minor digits.
//!
//! Invalid input never raises: anything that does not start with a decimal
//! literal normalizes to `0`, indistinguishable from a literal zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::Money;

/// An amount as it arrives from a form field or a numeric payload
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for AmountInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AmountInput {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// Convert an amount in major units to cents
///
/// Rounds to the nearest cent with ties away from zero (`0.125` becomes `13`,
/// `-0.125` becomes `-13`), applied to the binary value of the parsed number.
///
/// # Examples
/// ```
/// use ledgerlens::currency::to_cents;
/// assert_eq!(to_cents("10295.10"), 1029510);
/// assert_eq!(to_cents("10295,10"), 1029510);
/// assert_eq!(to_cents("not a number"), 0);
/// assert_eq!(to_cents(-4.5), -450);
/// ```
pub fn to_cents(input: impl Into<AmountInput>) -> i64 {
    let value = match input.into() {
        AmountInput::Number(n) => n,
        AmountInput::Text(text) => {
            let normalized = text.trim().replacen(',', ".", 1);
            match leading_decimal(&normalized) {
                Some(v) => v,
                None => {
                    debug!(input = %text, "unparseable amount, normalizing to zero");
                    return 0;
                }
            }
        }
    };

    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        debug!(value, "amount out of range, normalizing to zero");
        return 0;
    }
    cents as i64
}

/// Convert cents to an amount in major units, for display
///
/// # Examples
/// ```
/// use ledgerlens::currency::from_cents;
/// assert_eq!(from_cents(1029510), 10295.10);
/// ```
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Parse the longest prefix of `s` that is a decimal literal
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Trailing garbage is ignored (`"12.5abc"` is `12.5`).
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol for USD, EUR and GBP; other codes have none
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            _ => None,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Format an amount the way an en-US currency formatter does
///
/// Groups thousands with `,` and always shows two decimals. Currencies
/// without a symbol are prefixed with their code.
///
/// # Examples
/// ```
/// use ledgerlens::currency::{format_amount, CurrencyCode};
/// use ledgerlens::models::Money;
/// assert_eq!(format_amount(Money::from_cents(1029510), &CurrencyCode::new("usd")), "$10,295.10");
/// assert_eq!(format_amount(Money::from_cents(-5000), &CurrencyCode::new("COP")), "-COP 50.00");
/// ```
pub fn format_amount(amount: Money, code: &CurrencyCode) -> String {
    let units = group_thousands(amount.units().unsigned_abs());
    let sign = if amount.is_negative() { "-" } else { "" };
    let prefix = match code.symbol() {
        Some(symbol) => symbol.to_string(),
        None => format!("{} ", code.as_str()),
    };
    format!("{}{}{}.{:02}", sign, prefix, units, amount.cents_part())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_and_comma_are_equivalent() {
        assert_eq!(to_cents("10295.10"), 1029510);
        assert_eq!(to_cents("10295,10"), 1029510);
        assert_eq!(to_cents("  10295,10  "), 1029510);
    }

    #[test]
    fn test_invalid_input_is_zero() {
        assert_eq!(to_cents("not a number"), 0);
        assert_eq!(to_cents(""), 0);
        assert_eq!(to_cents("   "), 0);
        assert_eq!(to_cents("$10"), 0);
        assert_eq!(to_cents("."), 0);
        assert_eq!(to_cents(f64::NAN), 0);
        assert_eq!(to_cents(f64::INFINITY), 0);
    }

    #[test]
    fn test_negative_amounts_preserved() {
        assert_eq!(to_cents("-10.50"), -1050);
        assert_eq!(to_cents(" -3,5 "), -350);
        assert_eq!(to_cents(-0.01), -1);
    }

    #[test]
    fn test_leading_literal_wins() {
        assert_eq!(to_cents("12.5abc"), 1250);
        assert_eq!(to_cents("1e2"), 10000);
        assert_eq!(to_cents("7e"), 700);
        assert_eq!(to_cents(".5"), 50);
        assert_eq!(to_cents("+4"), 400);
    }

    #[test]
    fn test_thousands_grouping_is_misread() {
        // A comma is always the decimal separator.
        assert_eq!(to_cents("10,295"), to_cents("10.295"));
        assert_ne!(to_cents("10,295"), 1029500);
        assert_eq!(to_cents("1,234,56"), 123);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_cents(0.125), 13);
        assert_eq!(to_cents(-0.125), -13);
        assert_eq!(to_cents("2.5e-2"), 3);
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(to_cents(42_i64), 4200);
        assert_eq!(to_cents(10295.1), 1029510);
    }

    #[test]
    fn test_out_of_range_is_zero() {
        assert_eq!(to_cents("1e300"), 0);
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(from_cents(1029510), 10295.10);
        assert_eq!(from_cents(-250), -2.5);
        assert_eq!(from_cents(0), 0.0);
    }

    #[test]
    fn test_round_trip_through_display_string() {
        for n in (0_i64..=1_000_000).chain([12345678, 1029510, 999_999_99]) {
            let text = from_cents(n).to_string();
            assert_eq!(to_cents(text.as_str()), n, "round trip of {}", n);
            assert_eq!(to_cents(format!("-{}", text)), -n, "round trip of -{}", n);
        }
    }

    #[test]
    fn test_round_trip_through_comma_string() {
        for n in (0_i64..=100_000).step_by(7) {
            let text = from_cents(n).to_string().replacen('.', ",", 1);
            assert_eq!(to_cents(text.as_str()), n, "round trip of {}", text);
        }
    }

    #[test]
    fn test_currency_code_is_uppercased_on_decode() {
        let code: CurrencyCode = serde_json::from_str("\"cop\"").unwrap();
        assert_eq!(code.as_str(), "COP");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"COP\"");
    }

    #[test]
    fn test_format_amount() {
        let usd = CurrencyCode::new("USD");
        assert_eq!(format_amount(Money::from_cents(0), &usd), "$0.00");
        assert_eq!(format_amount(Money::from_cents(123456789), &usd), "$1,234,567.89");
        assert_eq!(format_amount(Money::from_cents(-99), &usd), "-$0.99");
        assert_eq!(
            format_amount(Money::from_cents(100000), &CurrencyCode::new("cop")),
            "COP 1,000.00"
        );
    }

    #[test]
    fn test_only_usd_eur_gbp_have_symbols() {
        assert_eq!(CurrencyCode::new("eur").symbol(), Some("€"));
        assert_eq!(CurrencyCode::new("GBP").symbol(), Some("£"));
        assert_eq!(CurrencyCode::new("JPY").symbol(), None);
        assert_eq!(
            format_amount(Money::from_cents(100000), &CurrencyCode::new("JPY")),
            "JPY 1,000.00"
        );
    }
}
