//! # Primality
//!
//! Trial division: 2 is prime, other evens are not, then odd divisors up to
//! the integer square root. `i <= n / i` bounds the loop without a float
//! square root or an `i * i` overflow.

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;
use crate::operations::require_integer;

pub(crate) fn validate_prime_input(number: Number) -> CalcResult<i64> {
    let n = require_integer("number", number)?;
    if n < 2 {
        return Err(CalcError::invalid_domain(
            "number",
            n.to_string(),
            "Prime numbers are defined for integers >= 2",
        ));
    }
    Ok(n)
}

/// Check whether `number` is prime.
///
/// ```rust
/// use calc_core::{operations::is_prime, Number};
///
/// assert!(is_prime(Number::Int(17)).unwrap());
/// assert!(!is_prime(Number::Int(15)).unwrap());
/// ```
pub fn is_prime(number: Number) -> CalcResult<bool> {
    let n = validate_prime_input(number)?;

    if n == 2 {
        return Ok(true);
    }
    if n % 2 == 0 {
        return Ok(false);
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return Ok(false);
        }
        divisor += 2;
    }

    Ok(true)
}
