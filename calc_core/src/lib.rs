//! # calc_core - Integer Calculator Engine
//!
//! `calc_core` provides a small integer calculator with a JSON-friendly
//! request/response API. A [`Calculator`] is configured once with an
//! operator and then executed against pairs of operands; every call returns a
//! [`Response`] record describing the operands and either the result or an
//! error message.
//!
//! ## Design Philosophy
//!
//! - **Fail fast on setup**: an unknown operator never yields a calculator
//! - **Records, not panics**: execute-time failures live in the response
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let adder = Calculator::new("add").unwrap();
//! let response = adder.execute(4, 2);
//!
//! let json = serde_json::to_string_pretty(&response).unwrap();
//! assert!(json.contains("\"sum\": 6"));
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The calculator and its compute step
//! - [`operator`] - The fixed set of operations
//! - [`response`] - Response records and operand values
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod operator;
pub mod response;

// Re-export commonly used types at crate root for convenience
pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult};
pub use operator::Operator;
pub use response::{IntegerLiteral, Operand, Operands, Outcome, Response, Results};
