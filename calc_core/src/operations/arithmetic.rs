//! # Arithmetic
//!
//! `square` and `power`. Integer inputs stay integers while the exact result
//! fits in i64; past that the result is promoted to a float. A result that
//! overflows even f64 is rejected rather than reported as infinity.
//!
//! ## Power Domain
//!
//! | base | exponent | outcome |
//! |------|----------|---------|
//! | 0 | negative | `InvalidDomain` |
//! | negative | non-integral | `InvalidDomain` (no real result) |
//! | int | int >= 0 | `Int` when exact, else `Float` |
//! | anything else | | `Float` |

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;

/// Calculate the square of a number.
///
/// ```rust
/// use calc_core::{operations::square, Number};
///
/// assert_eq!(square(Number::Int(5)).unwrap(), Number::Int(25));
/// assert_eq!(square(Number::Float(2.5)).unwrap(), Number::Float(6.25));
/// ```
pub fn square(number: Number) -> CalcResult<Number> {
    if !number.is_finite() {
        return Err(CalcError::invalid_type(
            "number",
            number.to_string(),
            "Input must be a number (int or float)",
        ));
    }

    let result = match number {
        Number::Int(i) => match i.checked_mul(i) {
            Some(exact) => Number::Int(exact),
            None => Number::Float((i as f64) * (i as f64)),
        },
        Number::Float(f) => Number::Float(f * f),
    };

    ensure_in_range("number", number, result)
}

/// Calculate `base` raised to `exponent`.
///
/// ```rust
/// use calc_core::{operations::power, Number};
///
/// assert_eq!(power(Number::Int(2), Number::Int(8)).unwrap(), Number::Int(256));
/// assert_eq!(power(Number::Int(2), Number::Int(-1)).unwrap(), Number::Float(0.5));
/// assert!(power(Number::Int(-8), Number::Float(0.5)).is_err());
/// ```
pub fn power(base: Number, exponent: Number) -> CalcResult<Number> {
    if !base.is_finite() || !exponent.is_finite() {
        let offending = if base.is_finite() { ("exponent", exponent) } else { ("base", base) };
        return Err(CalcError::invalid_type(
            offending.0,
            offending.1.to_string(),
            "Both base and exponent must be numbers",
        ));
    }

    let b = base.as_f64();
    let e = exponent.as_f64();

    if b == 0.0 && e < 0.0 {
        return Err(CalcError::invalid_domain(
            "exponent",
            exponent.to_string(),
            "0 cannot be raised to a negative power",
        ));
    }
    if b < 0.0 && e.fract() != 0.0 {
        return Err(CalcError::invalid_domain(
            "exponent",
            exponent.to_string(),
            "Negative base with a fractional exponent has no real result",
        ));
    }

    if let (Number::Int(bi), Number::Int(ei)) = (base, exponent) {
        if let Some(exact) = u32::try_from(ei).ok().and_then(|ei| bi.checked_pow(ei)) {
            return Ok(Number::Int(exact));
        }
    }

    ensure_in_range("exponent", exponent, Number::Float(b.powf(e)))
}

fn ensure_in_range(field: &str, input: Number, result: Number) -> CalcResult<Number> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::invalid_domain(field, input.to_string(), "Result is out of range"))
    }
}
