//! Console rendering for operation results.
//!
//! ```text
//!
//! === SQUARE OPERATION ===
//! Input: 5
//! Result: 25
//! =====================
//! ```

use std::fmt::{Display, Write};

use calc_core::{CalcError, Number, OperationResult};

/// Render a successful result as multi-line console text.
pub fn render_result(result: &OperationResult) -> String {
    let title = result.operation().title();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "=== {} OPERATION ===", title.to_uppercase());

    match result {
        OperationResult::Square { input, result } => {
            line(&mut out, "Input", input);
            line(&mut out, "Result", result);
        }
        OperationResult::Power { base, exponent, result } => {
            line(&mut out, "Base", base);
            line(&mut out, "Exponent", exponent);
            line(&mut out, "Result", result);
        }
        OperationResult::Factorial { input, result } => {
            line(&mut out, "Input", input);
            line(&mut out, "Result", result);
        }
        OperationResult::Fibonacci { count, sequence } => {
            line(&mut out, "Count", count);
            line(&mut out, "Result", list(sequence));
            line(&mut out, "Length", sequence.len());
        }
        OperationResult::IsPrime { input, is_prime } => {
            let status = if *is_prime { "is prime" } else { "is not prime" };
            line(&mut out, "Input", input);
            line(&mut out, "Result", format!("{} {}", input, status));
        }
        OperationResult::CalculateStats { input_numbers, statistics } => {
            line(&mut out, "Input_numbers", list(input_numbers));
            let _ = writeln!(out, "Result:");
            let _ = writeln!(out, "  count: {}", statistics.count);
            let _ = writeln!(out, "  mean: {}", Number::from(statistics.mean));
            let _ = writeln!(out, "  median: {}", statistics.median);
            let _ = writeln!(out, "  min: {}", statistics.min);
            let _ = writeln!(out, "  max: {}", statistics.max);
            let _ = writeln!(out, "  sum: {}", statistics.sum);
        }
    }

    let _ = write!(out, "{}", "=".repeat(title.len() + 15));
    out
}

/// Render an error as a single console line.
pub fn render_error(error: &CalcError) -> String {
    format!("Error: {}", error)
}

fn line(out: &mut String, label: &str, value: impl Display) {
    let _ = writeln!(out, "{}: {}", label, value);
}

fn list<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{dispatch, Operation, OperationRequest};

    fn run(operation: Operation, args: &[&str]) -> String {
        let request = OperationRequest::from_args(operation, args).unwrap();
        render_result(&dispatch(&request).unwrap())
    }

    #[test]
    fn test_render_square() {
        assert_eq!(
            run(Operation::Square, &["5"]),
            "\n=== SQUARE OPERATION ===\nInput: 5\nResult: 25\n====================="
        );
    }

    #[test]
    fn test_render_power_floats() {
        let text = run(Operation::Power, &["4.0", "0.5"]);
        assert!(text.contains("Base: 4.0\n"));
        assert!(text.contains("Exponent: 0.5\n"));
        assert!(text.contains("Result: 2.0\n"));
    }

    #[test]
    fn test_render_fibonacci_list() {
        let text = run(Operation::Fibonacci, &["5"]);
        assert!(text.contains("Count: 5\n"));
        assert!(text.contains("Result: [0, 1, 1, 2, 3]\n"));
        assert!(text.contains("Length: 5\n"));
    }

    #[test]
    fn test_render_prime() {
        let text = run(Operation::IsPrime, &["17"]);
        assert!(text.starts_with("\n=== PRIME CHECK OPERATION ===\n"));
        assert!(text.contains("Result: 17 is prime\n"));
        assert!(run(Operation::IsPrime, &["15"]).contains("Result: 15 is not prime\n"));
    }

    #[test]
    fn test_render_stats_record() {
        let text = run(Operation::CalculateStats, &["1", "2", "3", "4", "5"]);
        assert!(text.contains("=== STATISTICS OPERATION ==="));
        assert!(text.contains("Input_numbers: [1, 2, 3, 4, 5]\n"));
        assert!(text.contains("Result:\n  count: 5\n  mean: 3.0\n  median: 3\n  min: 1\n  max: 5\n  sum: 15\n"));
        assert!(text.ends_with(&"=".repeat("statistics".len() + 15)));
    }

    #[test]
    fn test_render_error() {
        let err = OperationRequest::from_args(Operation::Square, &["abc"]).unwrap_err();
        assert_eq!(render_error(&err), "Error: 'abc' is not a valid number");
    }
}
