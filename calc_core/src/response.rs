//! # Response Records
//!
//! The structured record returned by [`Calculator::execute`](crate::Calculator::execute).
//! It echoes the operands exactly as supplied and carries either the computed
//! values or an error message.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "operands": { "num1": 17, "num2": 5 },
//!   "results": { "quotient": 3, "remainder": 2 }
//! }
//! ```
//!
//! or, on failure:
//!
//! ```json
//! {
//!   "operands": { "num1": 6, "num2": 0 },
//!   "results": { "error_message": "integer division or modulo by zero" }
//! }
//! ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::errors::CalcResult;
use crate::operator::Operator;

/// A value supplied as an operand.
///
/// Operands are loosely typed so that a caller can pass something that is
/// not an integer and get the failure recorded in the response. Only
/// integers are valid for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// Any JSON value
    Value(Value),
    /// Integer literal outside the `i64`/`u64` range, kept digit for digit
    Literal(IntegerLiteral),
}

/// Decimal integer text that JSON numbers cannot hold without loss.
///
/// Serializes as a bare JSON number, not a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IntegerLiteral(String);

impl IntegerLiteral {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for IntegerLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawValue::from_string(self.0.clone())
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl Operand {
    /// Read decimal integer text (`42`, `-17`, `99999999999999999999`).
    ///
    /// Returns `None` when the text is not an optionally negative run of
    /// digits. Integers that fit `i64` or `u64` become plain numbers; larger
    /// ones are kept exactly so they can be echoed and reported as overflow.
    ///
    /// # Example
    /// ```
    /// use calc_core::Operand;
    ///
    /// assert_eq!(Operand::from_integer_literal("-17"), Some(Operand::from(-17)));
    /// assert_eq!(Operand::from_integer_literal("1.5"), None);
    ///
    /// let big = Operand::from_integer_literal("99999999999999999999").unwrap();
    /// assert!(big.is_integer());
    /// assert_eq!(big.as_i64(), None);
    /// assert_eq!(big.to_string(), "99999999999999999999");
    /// ```
    pub fn from_integer_literal(text: &str) -> Option<Operand> {
        let negative = text.starts_with('-');
        let digits = if negative { &text[1..] } else { text };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if let Ok(n) = text.parse::<i64>() {
            return Some(Operand::from(n));
        }
        if let Ok(n) = text.parse::<u64>() {
            return Some(Operand::from(n));
        }
        let sign = if negative { "-" } else { "" };
        let digits = digits.trim_start_matches('0');
        Some(Operand::Literal(IntegerLiteral(format!("{sign}{digits}"))))
    }

    /// The operand as an `i64`, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Operand::Value(value) => value.as_i64(),
            Operand::Literal(_) => None,
        }
    }

    /// Whether the operand is an integer at all (including ones too large for `i64`).
    pub fn is_integer(&self) -> bool {
        match self {
            Operand::Value(Value::Number(n)) => n.is_i64() || n.is_u64(),
            Operand::Value(_) => false,
            Operand::Literal(_) => true,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

macro_rules! operand_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Value(Value::from(value))
                }
            }
        )*
    };
}

operand_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, &str, String);

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Value(value) => write!(f, "{}", value),
            Operand::Literal(literal) => write!(f, "{}", literal.as_str()),
        }
    }
}

/// The two operands of a call, as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    pub num1: Operand,
    pub num2: Operand,
}

impl std::fmt::Display for Operands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{\"num1\": {}, \"num2\": {}}}", self.num1, self.num2)
    }
}

/// A successful computation, keyed by operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// `div`: floor quotient and the remainder with the divisor's sign
    Division { quotient: i64, remainder: i64 },
    /// `add`
    Sum { sum: i64 },
    /// `sub`
    Difference { difference: i64 },
    /// `mul`
    Product { product: i64 },
}

impl Outcome {
    /// The operator that produces this kind of outcome
    pub fn operator(&self) -> Operator {
        match self {
            Outcome::Sum { .. } => Operator::Add,
            Outcome::Difference { .. } => Operator::Sub,
            Outcome::Product { .. } => Operator::Mul,
            Outcome::Division { .. } => Operator::Div,
        }
    }
}

/// The `results` entry: either computed values or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Results {
    Success(Outcome),
    Error { error_message: String },
}

impl From<CalcResult<Outcome>> for Results {
    fn from(result: CalcResult<Outcome>) -> Self {
        match result {
            Ok(outcome) => Results::Success(outcome),
            Err(err) => Results::Error {
                error_message: err.to_string(),
            },
        }
    }
}

/// Record returned by every `execute` call.
///
/// Both entries are optional so that an empty record serializes as `{}`;
/// `execute` always fills both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operands: Option<Operands>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Results>,
}

impl Response {
    /// Start a record for the given operands, with no results yet.
    pub fn new(operands: Operands) -> Self {
        Response {
            operands: Some(operands),
            results: None,
        }
    }

    /// Set the results from a compute step.
    pub fn with_results(mut self, results: impl Into<Results>) -> Self {
        self.results = Some(results.into());
        self
    }

    /// Whether the record carries an `error_message`
    pub fn is_error(&self) -> bool {
        matches!(self.results, Some(Results::Error { .. }))
    }

    /// The recorded error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match &self.results {
            Some(Results::Error { error_message }) => Some(error_message),
            _ => None,
        }
    }

    /// The computed values, if the call succeeded
    pub fn outcome(&self) -> Option<Outcome> {
        match self.results {
            Some(Results::Success(outcome)) => Some(outcome),
            _ => None,
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
