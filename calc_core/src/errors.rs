//! # Error Types
//!
//! Structured error types for calc_core. Construction errors are returned to
//! the caller; execute-time errors are folded into the response record as
//! `results.error_message` (see [`crate::calculator`]).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divisor(divisor: i64) -> CalcResult<i64> {
//!     if divisor == 0 {
//!         return Err(CalcError::division_by_zero("integer division or modulo by zero"));
//!     }
//!     Ok(divisor)
//! }
//!
//! assert_eq!(checked_divisor(0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// The `Display` form of each variant is exactly the message recorded in a
/// response's `error_message`.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Unknown operator at construction, or a non-integer operand at execute time
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Division (or remainder) with a zero divisor
    #[error("{message}")]
    DivisionByZero { message: String },

    /// Result does not fit in a 64-bit signed integer
    #[error("{message}")]
    Overflow { message: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(message: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            message: message.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(message: impl Into<String>) -> Self {
        CalcError::Overflow {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::Overflow { .. } => "OVERFLOW",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
