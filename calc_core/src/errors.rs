//! # Error Types
//!
//! Structured error types for calc_core. Every operation and every coercion
//! step fails with one of two variants:
//!
//! - [`CalcError::InvalidType`] - the input is not the kind of value the
//!   operation needs (not a number, not an integer, not a list)
//! - [`CalcError::InvalidDomain`] - the input has the right kind but a
//!   forbidden value (negative factorial, prime check below 2, empty list)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_count(count: i64) -> CalcResult<()> {
//!     if count <= 0 {
//!         return Err(CalcError::invalid_domain(
//!             "count",
//!             count.to_string(),
//!             "Input must be a positive integer",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_count(0).unwrap_err();
//! assert_eq!(err.to_string(), "Input must be a positive integer");
//! assert_eq!(err.error_code(), "INVALID_DOMAIN");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for operations and input coercion.
///
/// `Display` renders only the human-readable reason, which is what both
/// presentation adapters show to users. The `field` and `value` members
/// carry context for programmatic consumers (they appear in the JSON form).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input is not numeric, not an integer, or not a list where one is required
    #[error("{reason}")]
    InvalidType {
        field: String,
        value: String,
        reason: String,
    },

    /// Input is numeric but outside the operation's valid domain
    #[error("{reason}")]
    InvalidDomain {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidType error
    pub fn invalid_type(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidType {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDomain error
    pub fn invalid_domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDomain {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the input field the error refers to
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidType { field, .. } | CalcError::InvalidDomain { field, .. } => field,
        }
    }

    /// Human-readable reason, identical to `Display`
    pub fn reason(&self) -> &str {
        match self {
            CalcError::InvalidType { reason, .. } | CalcError::InvalidDomain { reason, .. } => reason,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidType { .. } => "INVALID_TYPE",
            CalcError::InvalidDomain { .. } => "INVALID_DOMAIN",
        }
    }
}
