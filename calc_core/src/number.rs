//! # Numeric Values
//!
//! [`Number`] keeps integers and floats apart all the way from input to
//! output. `square(5)` answers `25`, `square(2.5)` answers `6.25`, and the
//! integer-only operations can tell `5` from `5.0`.
//!
//! ## JSON Form
//!
//! `Number` serializes untagged, so it is just a JSON number:
//!
//! ```rust
//! use calc_core::Number;
//!
//! assert_eq!(serde_json::to_string(&Number::Int(25)).unwrap(), "25");
//! assert_eq!(serde_json::to_string(&Number::Float(6.25)).unwrap(), "6.25");
//! assert_eq!(Number::Float(3.0).to_string(), "3.0");
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer or floating-point input/output value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Whole number parsed from a token without a fractional part
    Int(i64),
    /// Everything else that parses as a finite real
    Float(f64),
}

impl Number {
    /// Value widened to f64
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// The integer value, if this is an `Int`
    pub fn as_int(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// Integers are always finite; floats only when not NaN/inf
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Total order by numeric value, used for sorting mixed lists.
    pub fn total_cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Whole floats keep a trailing ".0" so they never read as integers
            Number::Float(v) if v.is_finite() && *v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-4) => {
                write_scientific(f, *v)
            }
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Exponent form with an explicit sign and at least two exponent digits,
/// e.g. `1e+20`, `1.5e-05`.
fn write_scientific(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let formatted = format!("{:e}", v);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => f.write_str(&formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(-4).to_string(), "-4");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(256.0).to_string(), "256.0");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Float(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_display_large_and_tiny_floats() {
        assert_eq!(Number::Float(1e20).to_string(), "1e+20");
        assert_eq!(Number::Float(1e16).to_string(), "1e+16");
        assert_eq!(Number::Float(-2.5e17).to_string(), "-2.5e+17");
        assert_eq!(Number::Float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Number::Float(1e-100).to_string(), "1e-100");
        assert_eq!(Number::Float(9999999999999998.0).to_string(), "9999999999999998.0");
        assert_eq!(Number::Float(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn test_untagged_deserialize() {
        let n: Number = serde_json::from_str("5").unwrap();
        assert_eq!(n, Number::Int(5));
        let n: Number = serde_json::from_str("5.0").unwrap();
        assert_eq!(n, Number::Float(5.0));
    }

    #[test]
    fn test_total_cmp_mixed() {
        let mut values = vec![Number::Float(2.5), Number::Int(-1), Number::Int(3), Number::Float(0.0)];
        values.sort_by(Number::total_cmp);
        assert_eq!(
            values,
            vec![Number::Int(-1), Number::Float(0.0), Number::Float(2.5), Number::Int(3)]
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Number::Int(7).as_int(), Some(7));
        assert_eq!(Number::Float(7.0).as_int(), None);
        assert!(!Number::Float(f64::NAN).is_finite());
        assert_eq!(Number::Int(3).as_f64(), 3.0);
        assert_eq!(Number::from(3), Number::Int(3));
        assert_eq!(Number::from(3.0), Number::Float(3.0));
    }
}
