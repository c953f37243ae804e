//! # Input Coercion
//!
//! Turns raw input from any surface into [`Number`] values. There is exactly
//! one rule, shared by CLI arguments, URL path segments and JSON bodies:
//!
//! 1. text is trimmed and parsed as an i64 -> `Int`
//! 2. an integer literal that does not fit in i64 -> `InvalidDomain`
//! 3. otherwise parsed as an f64; finite -> `Float`
//! 4. otherwise `InvalidType`
//!
//! JSON numbers that fit in i64 become `Int`, unsigned integers above
//! `i64::MAX` are `InvalidDomain`, other JSON numbers `Float`, and JSON
//! strings go through the text rule. So `"5"` and `5` coerce to
//! the same value.
//!
//! ```rust
//! use calc_core::coerce::{number_from_json, parse_number};
//! use calc_core::Number;
//! use serde_json::json;
//!
//! assert_eq!(parse_number("number", "5").unwrap(), Number::Int(5));
//! assert_eq!(parse_number("number", "2.5").unwrap(), Number::Float(2.5));
//! assert_eq!(number_from_json("number", &json!("5")).unwrap(), Number::Int(5));
//! assert!(parse_number("number", "five").is_err());
//! ```

use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;

const OUT_OF_RANGE: &str = "Integer is out of supported range";

/// Parse one text token.
pub fn parse_number(field: &str, raw: &str) -> CalcResult<Number> {
    let token = raw.trim();

    if let Ok(i) = token.parse::<i64>() {
        return Ok(Number::Int(i));
    }
    if is_integer_literal(token) {
        return Err(CalcError::invalid_domain(field, raw, OUT_OF_RANGE));
    }

    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Number::Float(f)),
        _ => Err(CalcError::invalid_type(
            field,
            raw,
            format!("'{}' is not a valid number", raw),
        )),
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a sequence of text tokens, failing on the first bad one.
///
/// An empty sequence is an `InvalidDomain` error.
pub fn parse_numbers<S: AsRef<str>>(field: &str, tokens: &[S]) -> CalcResult<Vec<Number>> {
    if tokens.is_empty() {
        return Err(CalcError::invalid_domain(field, "[]", "List cannot be empty"));
    }
    tokens.iter().map(|t| parse_number(field, t.as_ref())).collect()
}

/// Coerce one JSON value.
pub fn number_from_json(field: &str, value: &Value) -> CalcResult<Number> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Number::Int(i)),
            None if n.is_u64() => Err(CalcError::invalid_domain(field, n.to_string(), OUT_OF_RANGE)),
            None => n.as_f64().map(Number::Float).ok_or_else(|| {
                CalcError::invalid_type(field, n.to_string(), format!("'{}' is not a valid number", n))
            }),
        },
        Value::String(s) => parse_number(field, s),
        other => Err(CalcError::invalid_type(
            field,
            other.to_string(),
            format!("'{}' must be a number", field),
        )),
    }
}

/// Coerce a JSON array of values.
///
/// A non-numeric element is reported as `All elements must be numbers`;
/// an out-of-range integer keeps its own `InvalidDomain` error.
pub fn numbers_from_json(field: &str, value: &Value) -> CalcResult<Vec<Number>> {
    let items = value
        .as_array()
        .ok_or_else(|| CalcError::invalid_type(field, value.to_string(), "Input must be a list"))?;

    if items.is_empty() {
        return Err(CalcError::invalid_domain(field, "[]", "List cannot be empty"));
    }

    items
        .iter()
        .map(|item| {
            number_from_json(field, item).map_err(|e| match e {
                CalcError::InvalidDomain { .. } => e,
                CalcError::InvalidType { .. } => {
                    CalcError::invalid_type(field, item.to_string(), "All elements must be numbers")
                }
            })
        })
        .collect()
}

/// Look up a required member of a JSON object body.
pub fn required_field<'a>(body: &'a Value, field: &str) -> CalcResult<&'a Value> {
    let object = body.as_object().ok_or_else(|| {
        CalcError::invalid_type(field, body.to_string(), "Request body must be a JSON object")
    })?;

    object.get(field).ok_or_else(|| {
        CalcError::invalid_type(field, "", format!("Missing required field '{}'", field))
    })
}
