//! Field coercion: raw cell values to prices.
//!
//! Optional fields go through [`coerce`], which never fails: absent, blank and
//! non-numeric values all fall back to a caller-supplied default. Required
//! fields go through [`parse_required`], which reports the first problem as a
//! [`RowError`].

use crate::domain::error::RowError;
use crate::domain::record::{Field, FieldValue};

/// Parse trimmed text as `f64`. Accepts anything `f64::from_str` accepts,
/// including `nan` and `inf`.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Resolve an optional price, substituting `fallback` for missing, blank or
/// unparseable values.
pub fn coerce(value: &FieldValue, fallback: f64) -> f64 {
    match value {
        FieldValue::Missing => fallback,
        FieldValue::Text(text) => parse_number(text).unwrap_or(fallback),
        FieldValue::Number(n) => *n,
    }
}

/// [`coerce`] with a fallback of `0.0`.
pub fn coerce_or_zero(value: &FieldValue) -> f64 {
    coerce(value, 0.0)
}

/// Resolve a required price.
pub fn parse_required(field: Field, value: &FieldValue) -> Result<f64, RowError> {
    match value {
        FieldValue::Missing => Err(RowError::MissingField { field }),
        FieldValue::Text(text) if text.trim().is_empty() => Err(RowError::MissingField { field }),
        FieldValue::Text(text) => parse_number(text).ok_or_else(|| RowError::InvalidNumber {
            field,
            value: text.clone(),
        }),
        FieldValue::Number(n) => Ok(*n),
    }
}

/// Resolve the instrument symbol. Text is kept as given; missing becomes
/// the empty string.
pub fn resolve_symbol(value: &FieldValue) -> String {
    match value {
        FieldValue::Missing => String::new(),
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(n) => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_missing_uses_fallback() {
        assert_eq!(coerce(&FieldValue::Missing, 42.5), 42.5);
    }

    #[test]
    fn coerce_blank_uses_fallback() {
        assert_eq!(coerce(&FieldValue::text(""), 42.5), 42.5);
        assert_eq!(coerce(&FieldValue::text("   "), 42.5), 42.5);
    }

    #[test]
    fn coerce_non_numeric_uses_fallback() {
        assert_eq!(coerce(&FieldValue::text("N/A"), 42.5), 42.5);
        assert_eq!(coerce(&FieldValue::text("12.5.3"), 42.5), 42.5);
    }

    #[test]
    fn coerce_parses_text() {
        assert_eq!(coerce(&FieldValue::text(" 101.25 "), 0.0), 101.25);
        assert_eq!(coerce(&FieldValue::text("-3"), 0.0), -3.0);
        assert_eq!(coerce(&FieldValue::text("1e3"), 0.0), 1000.0);
    }

    #[test]
    fn coerce_passes_numbers_through() {
        assert_eq!(coerce(&FieldValue::Number(7.0), 0.0), 7.0);
    }

    #[test]
    fn coerce_or_zero_defaults_to_zero() {
        assert_eq!(coerce_or_zero(&FieldValue::Missing), 0.0);
        assert_eq!(coerce_or_zero(&FieldValue::text("abc")), 0.0);
        assert_eq!(coerce_or_zero(&FieldValue::text("9")), 9.0);
    }

    #[test]
    fn parse_required_accepts_numbers() {
        assert_eq!(parse_required(Field::High, &FieldValue::text("110")), Ok(110.0));
        assert_eq!(parse_required(Field::High, &FieldValue::Number(110.0)), Ok(110.0));
    }

    #[test]
    fn parse_required_missing() {
        assert_eq!(
            parse_required(Field::Low, &FieldValue::Missing),
            Err(RowError::MissingField { field: Field::Low })
        );
        assert_eq!(
            parse_required(Field::Low, &FieldValue::text("  ")),
            Err(RowError::MissingField { field: Field::Low })
        );
    }

    #[test]
    fn parse_required_invalid() {
        assert_eq!(
            parse_required(Field::High, &FieldValue::text("N/A")),
            Err(RowError::InvalidNumber {
                field: Field::High,
                value: "N/A".into()
            })
        );
    }

    #[test]
    fn parse_required_accepts_nan_text() {
        let v = parse_required(Field::Close, &FieldValue::text("nan")).unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn resolve_symbol_variants() {
        assert_eq!(resolve_symbol(&FieldValue::Missing), "");
        assert_eq!(resolve_symbol(&FieldValue::text(" BHP ")), " BHP ");
        assert_eq!(resolve_symbol(&FieldValue::text("")), "");
        assert_eq!(resolve_symbol(&FieldValue::Number(500325.0)), "500325");
    }
}
