//! Property tests for the operation library and the dispatch layer

use calc_core::coerce::{number_from_json, parse_number};
use calc_core::operations::{calculate_stats, fibonacci, is_prime, square};
use calc_core::{dispatch, Number, Operation, OperationRequest};
use proptest::prelude::*;

fn number_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(Number::from),
        (-1.0e6f64..1.0e6).prop_map(Number::from),
    ]
}

proptest! {
    #[test]
    fn square_matches_multiplication(x in -3_000_000_000i64..3_000_000_000) {
        prop_assert_eq!(square(Number::Int(x)).unwrap(), Number::Int(x * x));
    }

    #[test]
    fn square_of_float_matches_multiplication(x in -1.0e100f64..1.0e100) {
        prop_assert_eq!(square(Number::Float(x)).unwrap(), Number::Float(x * x));
    }

    #[test]
    fn fibonacci_has_requested_length(n in 1i64..=94) {
        let seq = fibonacci(Number::Int(n)).unwrap();
        prop_assert_eq!(seq.len() as i64, n);
        for window in seq.windows(3) {
            prop_assert_eq!(window[2], window[0] + window[1]);
        }
    }

    #[test]
    fn prime_has_no_small_divisor(n in 2i64..100_000) {
        let expected = (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
        prop_assert_eq!(is_prime(Number::Int(n)).unwrap(), expected);
    }

    #[test]
    fn stats_are_bounded(numbers in prop::collection::vec(number_strategy(), 1..50)) {
        let stats = calculate_stats(&numbers).unwrap();
        prop_assert_eq!(stats.count, numbers.len());
        let (min, max) = (stats.min.as_f64(), stats.max.as_f64());
        prop_assert!(min <= stats.median.as_f64() && stats.median.as_f64() <= max);
        prop_assert!(min - 1e-6 <= stats.mean && stats.mean <= max + 1e-6);
    }

    #[test]
    fn dispatch_is_pure(numbers in prop::collection::vec(number_strategy(), 1..20)) {
        let request = OperationRequest::CalculateStats { numbers };
        prop_assert_eq!(dispatch(&request), dispatch(&request));
    }

    #[test]
    fn text_and_json_integers_coerce_alike(i in any::<i64>()) {
        let text = parse_number("number", &i.to_string()).unwrap();
        let json = number_from_json("number", &serde_json::json!(i)).unwrap();
        let json_string = number_from_json("number", &serde_json::json!(i.to_string())).unwrap();
        prop_assert_eq!(text, Number::Int(i));
        prop_assert_eq!(json, text);
        prop_assert_eq!(json_string, text);
    }

    #[test]
    fn factorial_rejects_every_negative(n in i64::MIN..0) {
        let request = OperationRequest::from_args(Operation::Factorial, &[n.to_string()]).unwrap();
        let err = dispatch(&request).unwrap_err();
        prop_assert_eq!(err.error_code(), "INVALID_DOMAIN");
    }
}
