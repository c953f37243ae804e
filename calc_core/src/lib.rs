//! # calc_core - Mathematical Operations Engine
//!
//! `calc_core` holds the business logic of mathops: six pure operations and
//! the validation/dispatch layer that every interface (REST API, CLI) goes
//! through. Nothing in here performs I/O, so the same inputs always produce
//! the same outputs whichever surface they arrive from.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Requests, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: `InvalidType` vs `InvalidDomain`, never a panic
//! - **One coercion rule**: `"5"` and `5` are the same input everywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{dispatch, Operation, OperationRequest};
//!
//! let request = OperationRequest::from_args(Operation::Square, &["5"]).unwrap();
//! let result = dispatch(&request).unwrap();
//!
//! // Serialize to JSON for an API response
//! let json = serde_json::to_string(&result).unwrap();
//! assert_eq!(json, r#"{"operation":"square","input":5,"result":25}"#);
//! ```
//!
//! ## Modules
//!
//! - [`operations`] - The six operations and the [`Operation`] enum
//! - [`dispatch`](mod@dispatch) - Typed requests/results and the dispatcher
//! - [`coerce`] - Raw text/JSON to [`Number`] conversion
//! - [`number`] - Integer-or-float value type
//! - [`errors`] - Structured error types

pub mod coerce;
pub mod dispatch;
pub mod errors;
pub mod number;
pub mod operations;

// Re-export commonly used types at crate root for convenience
pub use dispatch::{dispatch, OperationRequest, OperationResult};
pub use errors::{CalcError, CalcResult};
pub use number::Number;
pub use operations::{Operation, Statistics};
