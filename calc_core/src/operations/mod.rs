//! # Operations
//!
//! The six pure operations. Each one follows the same pattern:
//!
//! - takes typed [`Number`] input (or a slice of them)
//! - validates its own domain, because every function is callable directly
//! - returns `CalcResult<T>` - never panics on bad input
//!
//! ## Available Operations
//!
//! - [`arithmetic`] - `square`, `power`
//! - [`sequences`] - `factorial`, `fibonacci`
//! - [`primes`] - `is_prime`
//! - [`stats`] - `calculate_stats`

pub mod arithmetic;
pub mod primes;
pub mod sequences;
pub mod stats;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::number::Number;

// Re-export the operation functions at module level
pub use arithmetic::{power, square};
pub use primes::is_prime;
pub use sequences::{factorial, fibonacci, MAX_FACTORIAL_INPUT, MAX_FIBONACCI_COUNT};
pub use stats::{calculate_stats, Statistics};

/// Number of arguments an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments
    Fixed(usize),
    /// One or more arguments
    Variadic,
}

/// The six supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Square,
    Power,
    Factorial,
    Fibonacci,
    IsPrime,
    CalculateStats,
}

impl Operation {
    /// Every operation, in presentation order
    pub const ALL: [Operation; 6] = [
        Operation::Square,
        Operation::Power,
        Operation::Factorial,
        Operation::Fibonacci,
        Operation::IsPrime,
        Operation::CalculateStats,
    ];

    /// Canonical name, as used in JSON responses
    pub fn name(self) -> &'static str {
        match self {
            Operation::Square => "square",
            Operation::Power => "power",
            Operation::Factorial => "factorial",
            Operation::Fibonacci => "fibonacci",
            Operation::IsPrime => "is_prime",
            Operation::CalculateStats => "calculate_stats",
        }
    }

    /// Short name used for CLI subcommands and URL paths
    pub fn alias(self) -> &'static str {
        match self {
            Operation::IsPrime => "prime",
            Operation::CalculateStats => "stats",
            other => other.name(),
        }
    }

    /// Title used in console output
    pub fn title(self) -> &'static str {
        match self {
            Operation::IsPrime => "prime check",
            Operation::CalculateStats => "statistics",
            other => other.name(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Power => Arity::Fixed(2),
            Operation::CalculateStats => Arity::Variadic,
            _ => Arity::Fixed(1),
        }
    }

    /// Names of the input fields, in argument order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Operation::Power => &["base", "exponent"],
            Operation::Fibonacci => &["count"],
            Operation::CalculateStats => &["numbers"],
            _ => &["number"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s || op.alias() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// Require an `Int`; floats (even whole ones like `5.0`) are the wrong type.
pub(crate) fn require_integer(field: &str, n: Number) -> CalcResult<i64> {
    n.as_int()
        .ok_or_else(|| CalcError::invalid_type(field, n.to_string(), "Input must be an integer"))
}
