//! # Validation & Dispatch
//!
//! [`OperationRequest`] is the typed form of one invocation. It is built
//! from raw surface input ([`OperationRequest::from_args`] for text tokens,
//! [`OperationRequest::from_json`] for JSON bodies), validated, and handed
//! to [`dispatch`], which yields exactly one [`OperationResult`] or one
//! [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::{dispatch, Operation, OperationRequest, OperationResult, Number};
//!
//! let request = OperationRequest::from_args(Operation::Power, &["2", "8"]).unwrap();
//! let result = dispatch(&request).unwrap();
//! assert_eq!(
//!     result,
//!     OperationResult::Power {
//!         base: Number::Int(2),
//!         exponent: Number::Int(8),
//!         result: Number::Int(256),
//!     }
//! );
//! ```
//!
//! ## JSON Form
//!
//! `OperationResult` serializes with an `operation` tag, which makes it the
//! body of a successful API response:
//!
//! ```json
//! {"operation": "fibonacci", "count": 5, "sequence": [0, 1, 1, 2, 3]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::coerce::{number_from_json, numbers_from_json, parse_number, parse_numbers, required_field};
use crate::errors::{CalcError, CalcResult};
use crate::number::Number;
use crate::operations::{self, primes, sequences, stats, Arity, Operation, Statistics};

/// A typed request for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationRequest {
    Square { number: Number },
    Power { base: Number, exponent: Number },
    Factorial { number: Number },
    Fibonacci { count: Number },
    IsPrime { number: Number },
    CalculateStats { numbers: Vec<Number> },
}

/// The typed outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationResult {
    Square {
        input: Number,
        result: Number,
    },
    Power {
        base: Number,
        exponent: Number,
        result: Number,
    },
    Factorial {
        input: i64,
        result: u64,
    },
    Fibonacci {
        count: i64,
        sequence: Vec<u64>,
    },
    IsPrime {
        input: i64,
        is_prime: bool,
    },
    CalculateStats {
        input_numbers: Vec<Number>,
        statistics: Statistics,
    },
}

impl OperationRequest {
    /// Build a request from text tokens (CLI arguments, URL path segments).
    pub fn from_args<S: AsRef<str>>(operation: Operation, args: &[S]) -> CalcResult<Self> {
        if let Arity::Fixed(expected) = operation.arity() {
            if args.len() != expected {
                return Err(CalcError::invalid_type(
                    operation.fields().join(", "),
                    args.len().to_string(),
                    format!(
                        "{} expects {} argument{}, got {}",
                        operation,
                        expected,
                        if expected == 1 { "" } else { "s" },
                        args.len()
                    ),
                ));
            }
        }

        let arg = |i: usize| parse_number(operation.fields()[i], args[i].as_ref());

        Ok(match operation {
            Operation::Square => OperationRequest::Square { number: arg(0)? },
            Operation::Power => OperationRequest::Power {
                base: arg(0)?,
                exponent: arg(1)?,
            },
            Operation::Factorial => OperationRequest::Factorial { number: arg(0)? },
            Operation::Fibonacci => OperationRequest::Fibonacci { count: arg(0)? },
            Operation::IsPrime => OperationRequest::IsPrime { number: arg(0)? },
            Operation::CalculateStats => OperationRequest::CalculateStats {
                numbers: parse_numbers("numbers", args)?,
            },
        })
    }

    /// Build a request from a JSON object body.
    ///
    /// Fields are named after [`Operation::fields`]: `{"base", "exponent"}`
    /// for power, `{"numbers": [...]}` for statistics, `{"count"}` for
    /// fibonacci and `{"number"}` for the rest.
    pub fn from_json(operation: Operation, body: &Value) -> CalcResult<Self> {
        let field = |name: &str| required_field(body, name).and_then(|v| number_from_json(name, v));

        Ok(match operation {
            Operation::Square => OperationRequest::Square { number: field("number")? },
            Operation::Power => OperationRequest::Power {
                base: field("base")?,
                exponent: field("exponent")?,
            },
            Operation::Factorial => OperationRequest::Factorial { number: field("number")? },
            Operation::Fibonacci => OperationRequest::Fibonacci { count: field("count")? },
            Operation::IsPrime => OperationRequest::IsPrime { number: field("number")? },
            Operation::CalculateStats => OperationRequest::CalculateStats {
                numbers: numbers_from_json("numbers", required_field(body, "numbers")?)?,
            },
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::Square { .. } => Operation::Square,
            OperationRequest::Power { .. } => Operation::Power,
            OperationRequest::Factorial { .. } => Operation::Factorial,
            OperationRequest::Fibonacci { .. } => Operation::Fibonacci,
            OperationRequest::IsPrime { .. } => Operation::IsPrime,
            OperationRequest::CalculateStats { .. } => Operation::CalculateStats,
        }
    }

    /// Check the operation's preconditions without computing anything.
    ///
    /// Square and power have no precondition beyond finite inputs; their
    /// range checks depend on the result and happen during computation.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            OperationRequest::Square { number } => {
                if !number.is_finite() {
                    return Err(CalcError::invalid_type(
                        "number",
                        number.to_string(),
                        "Input must be a number (int or float)",
                    ));
                }
            }
            OperationRequest::Power { base, exponent } => {
                if !base.is_finite() || !exponent.is_finite() {
                    return Err(CalcError::invalid_type(
                        "base",
                        format!("{}, {}", base, exponent),
                        "Both base and exponent must be numbers",
                    ));
                }
            }
            OperationRequest::Factorial { number } => {
                sequences::validate_factorial(*number)?;
            }
            OperationRequest::Fibonacci { count } => {
                sequences::validate_fibonacci(*count)?;
            }
            OperationRequest::IsPrime { number } => {
                primes::validate_prime_input(*number)?;
            }
            OperationRequest::CalculateStats { numbers } => {
                stats::validate_numbers(numbers)?;
            }
        }
        Ok(())
    }
}

impl OperationResult {
    pub fn operation(&self) -> Operation {
        match self {
            OperationResult::Square { .. } => Operation::Square,
            OperationResult::Power { .. } => Operation::Power,
            OperationResult::Factorial { .. } => Operation::Factorial,
            OperationResult::Fibonacci { .. } => Operation::Fibonacci,
            OperationResult::IsPrime { .. } => Operation::IsPrime,
            OperationResult::CalculateStats { .. } => Operation::CalculateStats,
        }
    }
}

/// Validate a request and run the matching operation.
pub fn dispatch(request: &OperationRequest) -> CalcResult<OperationResult> {
    let operation = request.operation();

    if let Err(e) = request.validate() {
        debug!(%operation, code = e.error_code(), "Rejected request: {}", e);
        return Err(e);
    }

    let result = match request {
        OperationRequest::Square { number } => OperationResult::Square {
            input: *number,
            result: operations::square(*number)?,
        },
        OperationRequest::Power { base, exponent } => OperationResult::Power {
            base: *base,
            exponent: *exponent,
            result: operations::power(*base, *exponent)?,
        },
        OperationRequest::Factorial { number } => OperationResult::Factorial {
            input: integer_input(*number),
            result: operations::factorial(*number)?,
        },
        OperationRequest::Fibonacci { count } => OperationResult::Fibonacci {
            count: integer_input(*count),
            sequence: operations::fibonacci(*count)?,
        },
        OperationRequest::IsPrime { number } => OperationResult::IsPrime {
            input: integer_input(*number),
            is_prime: operations::is_prime(*number)?,
        },
        OperationRequest::CalculateStats { numbers } => OperationResult::CalculateStats {
            input_numbers: numbers.clone(),
            statistics: operations::calculate_stats(numbers)?,
        },
    };

    debug!(%operation, "Dispatched request");
    Ok(result)
}

/// Integer inputs have already passed validation; the fallback is unreachable.
fn integer_input(n: Number) -> i64 {
    n.as_int().unwrap_or_default()
}
