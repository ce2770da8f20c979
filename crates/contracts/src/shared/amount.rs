//! Lenient amount handling.
//!
//! The backend is inconsistent about monetary fields: some endpoints send
//! JSON numbers, others send strings such as `"1,250.00"` or `"₹ 99.5"`.
//! Everything funnels through [`parse_amount`] so that table cells, totals
//! and exports agree on the same value.

use serde::de::Deserializer;
use serde::Deserialize;

/// Rupee spellings that contain letters and would otherwise be read as garbage.
const CURRENCY_CODES: &[&str] = &["INR", "Rs.", "Rs"];

/// Parses a display or wire amount into a number.
///
/// Currency symbols (including `Rs.` and `INR`), grouping commas, spaces and a
/// trailing `%` are ignored. Returns `None` for empty, non-numeric or
/// non-finite input.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = CURRENCY_CODES
        .iter()
        .fold(raw.to_string(), |text, code| text.replace(code, ""));
    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'e' | 'E' | '+'))
        .collect();

    if cleaned.is_empty() || !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    // "abc" must not sneak through as a bare exponent marker
    if raw.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`parse_amount`] for text that may carry a configured currency `symbol`.
pub fn parse_amount_with_symbol(raw: &str, symbol: &str) -> Option<f64> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        parse_amount(raw)
    } else {
        parse_amount(&raw.replace(symbol, ""))
    }
}

/// Serde helper for `Option<f64>` fields that may arrive as number, string or null.
///
/// An unparseable string becomes `None` instead of failing the whole page.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::String(s)) => Ok(parse_amount(&s)),
        Some(StringOrFloat::Float(f)) => Ok(Some(f)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_plain_and_decorated() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 1,250.75 "), Some(1250.75));
        assert_eq!(parse_amount("₹99.90"), Some(99.9));
        assert_eq!(parse_amount("18.00%"), Some(18.0));
        assert_eq!(parse_amount("-4"), Some(-4.0));
    }

    #[test]
    fn test_parse_amount_with_lettered_symbols() {
        assert_eq!(parse_amount("Rs. 100"), Some(100.0));
        assert_eq!(parse_amount("INR 1,200.50"), Some(1200.5));
        assert_eq!(parse_amount_with_symbol("Rs. 100", "Rs."), Some(100.0));
        assert_eq!(parse_amount_with_symbol("USD 7.25", "USD"), Some(7.25));
        assert_eq!(parse_amount_with_symbol("USD 7.25", ""), None);
        assert_eq!(parse_amount_with_symbol("abc", "Rs."), None);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_amount")]
        amount: Option<f64>,
    }

    #[test]
    fn test_deserialize_amount_variants() {
        let from_number: Row = serde_json::from_str(r#"{"amount": 10.25}"#).unwrap();
        let from_string: Row = serde_json::from_str(r#"{"amount": "10.25"}"#).unwrap();
        let from_null: Row = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        let missing: Row = serde_json::from_str(r#"{}"#).unwrap();
        let garbage: Row = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();

        assert_eq!(from_number.amount, Some(10.25));
        assert_eq!(from_string.amount, Some(10.25));
        assert_eq!(from_null.amount, None);
        assert_eq!(missing.amount, None);
        assert_eq!(garbage.amount, None);
    }
}
