//! # Integer Sequences
//!
//! `factorial` and `fibonacci`, both built iteratively. Results are exact
//! `u64` values, which bounds the inputs: 20! and the 94th Fibonacci term
//! (F(93)) are the largest that fit.

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;
use crate::operations::require_integer;

/// Largest `n` whose factorial fits in u64
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Longest Fibonacci sequence whose terms all fit in u64
pub const MAX_FIBONACCI_COUNT: i64 = 94;

/// Check the factorial domain, returning `n` as an unsigned count.
pub(crate) fn validate_factorial(number: Number) -> CalcResult<u64> {
    let n = require_integer("number", number)?;
    if n < 0 {
        return Err(CalcError::invalid_domain(
            "number",
            n.to_string(),
            "Factorial is only defined for non-negative integers",
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(CalcError::invalid_domain(
            "number",
            n.to_string(),
            format!("Factorial is only supported for n <= {}", MAX_FACTORIAL_INPUT),
        ));
    }
    Ok(n as u64)
}

/// Check the fibonacci domain, returning the term count.
pub(crate) fn validate_fibonacci(count: Number) -> CalcResult<usize> {
    let n = require_integer("count", count)?;
    if n <= 0 {
        return Err(CalcError::invalid_domain(
            "count",
            n.to_string(),
            "Input must be a positive integer",
        ));
    }
    if n > MAX_FIBONACCI_COUNT {
        return Err(CalcError::invalid_domain(
            "count",
            n.to_string(),
            format!("Fibonacci count is limited to {} terms", MAX_FIBONACCI_COUNT),
        ));
    }
    Ok(n as usize)
}

/// Calculate `n!` for `0 <= n <= 20`.
///
/// ```rust
/// use calc_core::{operations::factorial, Number};
///
/// assert_eq!(factorial(Number::Int(5)).unwrap(), 120);
/// assert!(factorial(Number::Int(-1)).is_err());
/// ```
pub fn factorial(number: Number) -> CalcResult<u64> {
    let n = validate_factorial(number)?;
    Ok((2..=n).product())
}

/// Generate the first `count` Fibonacci numbers, starting `0, 1, 1, 2`.
///
/// ```rust
/// use calc_core::{operations::fibonacci, Number};
///
/// assert_eq!(fibonacci(Number::Int(1)).unwrap(), vec![0]);
/// assert_eq!(fibonacci(Number::Int(8)).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
pub fn fibonacci(count: Number) -> CalcResult<Vec<u64>> {
    let n = validate_fibonacci(count)?;

    let mut sequence = Vec::with_capacity(n);
    let (mut a, mut b) = (0u64, 1u64);
    for i in 0..n {
        sequence.push(a);
        // The successor of the final term is never used and may overflow
        if i + 1 < n {
            let next = a + b;
            a = b;
            b = next;
        }
    }

    Ok(sequence)
}
