//! # Summary Statistics
//!
//! `calculate_stats` reduces a non-empty list to count, mean, median, min,
//! max and sum. Values keep their type where the answer is one of the
//! inputs (min, max, odd-length median); `mean` and even-length `median`
//! are always floats. `sum` stays an integer when every element is one and
//! the total fits in i64.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "count": 5,
//!   "mean": 3.0,
//!   "median": 3,
//!   "min": 1,
//!   "max": 5,
//!   "sum": 15
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;

/// Statistics record for a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of values
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Middle value of the sorted list (average of the two middle values
    /// for even lengths)
    pub median: Number,

    /// Smallest value
    pub min: Number,

    /// Largest value
    pub max: Number,

    /// Sum of all values
    pub sum: Number,
}

pub(crate) fn validate_numbers(numbers: &[Number]) -> CalcResult<()> {
    if numbers.is_empty() {
        return Err(CalcError::invalid_domain("numbers", "[]", "List cannot be empty"));
    }
    if let Some(bad) = numbers.iter().find(|n| !n.is_finite()) {
        return Err(CalcError::invalid_type(
            "numbers",
            bad.to_string(),
            "All elements must be numbers",
        ));
    }
    Ok(())
}

/// Calculate basic statistics for a non-empty list.
///
/// ```rust
/// use calc_core::{operations::calculate_stats, Number};
///
/// let numbers: Vec<Number> = [1, 2, 3, 4, 5].into_iter().map(Number::Int).collect();
/// let stats = calculate_stats(&numbers).unwrap();
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.median, Number::Int(3));
/// assert_eq!(stats.sum, Number::Int(15));
/// ```
pub fn calculate_stats(numbers: &[Number]) -> CalcResult<Statistics> {
    validate_numbers(numbers)?;

    let mut sorted = numbers.to_vec();
    sorted.sort_by(Number::total_cmp);

    let count = sorted.len();
    let sum = sum_of(numbers);
    let mean = sum.as_f64() / count as f64;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        Number::Float((sorted[mid - 1].as_f64() + sorted[mid].as_f64()) / 2.0)
    } else {
        sorted[mid]
    };

    if !sum.is_finite() || !mean.is_finite() || !median.is_finite() {
        return Err(CalcError::invalid_domain(
            "numbers",
            format!("{} values", count),
            "Result is out of range",
        ));
    }

    Ok(Statistics {
        count,
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        sum,
    })
}

/// Exact integer sum when possible, float sum otherwise.
fn sum_of(numbers: &[Number]) -> Number {
    let exact = numbers.iter().try_fold(0i64, |acc, n| acc.checked_add(n.as_int()?));
    match exact {
        Some(total) => Number::Int(total),
        None => Number::Float(numbers.iter().map(|n| n.as_f64()).sum()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Number> {
        values.iter().copied().map(Number::Int).collect()
    }

    #[test]
    fn test_odd_length() {
        let stats = calculate_stats(&ints(&[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(
            stats,
            Statistics {
                count: 5,
                mean: 3.0,
                median: Number::Int(3),
                min: Number::Int(1),
                max: Number::Int(5),
                sum: Number::Int(15),
            }
        );
    }

    #[test]
    fn test_even_length_median() {
        let stats = calculate_stats(&ints(&[4, 1, 3, 2])).unwrap();
        assert_eq!(stats.median, Number::Float(2.5));
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn test_unsorted_input_with_duplicates() {
        let stats = calculate_stats(&ints(&[5, 1, 5, 3, 1])).unwrap();
        assert_eq!(stats.median, Number::Int(3));
        assert_eq!(stats.min, Number::Int(1));
        assert_eq!(stats.max, Number::Int(5));
    }

    #[test]
    fn test_single_value() {
        let stats = calculate_stats(&[Number::Float(42.5)]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.median, Number::Float(42.5));
        assert_eq!(stats.sum, Number::Float(42.5));
    }

    #[test]
    fn test_mixed_types() {
        let numbers = vec![Number::Int(1), Number::Float(2.5), Number::Int(-3)];
        let stats = calculate_stats(&numbers).unwrap();
        assert_eq!(stats.sum, Number::Float(0.5));
        assert_eq!(stats.min, Number::Int(-3));
        assert_eq!(stats.max, Number::Float(2.5));
        assert_eq!(stats.median, Number::Int(1));
    }

    #[test]
    fn test_integer_sum_overflow_promotes() {
        let stats = calculate_stats(&ints(&[i64::MAX, 1])).unwrap();
        assert!(matches!(stats.sum, Number::Float(_)));
    }

    #[test]
    fn test_empty_list() {
        let err = calculate_stats(&[]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.to_string(), "List cannot be empty");
    }

    #[test]
    fn test_non_finite_element() {
        let err = calculate_stats(&[Number::Int(1), Number::Float(f64::NAN)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TYPE");
        assert_eq!(err.to_string(), "All elements must be numbers");
    }

    #[test]
    fn test_json_shape() {
        let stats = calculate_stats(&ints(&[1, 2, 3, 4, 5])).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"count": 5, "mean": 3.0, "median": 3, "min": 1, "max": 5, "sum": 15})
        );
    }
}
