//! # Calculator
//!
//! A calculator is configured with one [`Operator`] at construction and then
//! applies it to pairs of integers.
//!
//! Errors are handled asymmetrically:
//!
//! - **Construction** fails fast: an unknown operator returns
//!   `CalcError::InvalidArgument` and no calculator exists.
//! - **Execution** never fails at the call boundary: non-integer operands,
//!   division by zero and `i64` overflow are recorded as
//!   `results.error_message` in the returned [`Response`].
//!
//! Every call builds a fresh record, so nothing from a previous call leaks
//! into the next one.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let adder = Calculator::new("add").unwrap();
//! let response = adder.execute(4, 2);
//! assert_eq!(
//!     response.to_json().unwrap(),
//!     r#"{"operands":{"num1":4,"num2":2},"results":{"sum":6}}"#
//! );
//!
//! let divider = Calculator::new("div").unwrap();
//! assert!(divider.execute(6, 0).is_error());
//! assert!(divider.execute(5, "a").is_error());
//!
//! assert!(Calculator::new("pow").is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;
use crate::response::{Operand, Operands, Outcome, Response};

/// Integer calculator bound to a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    operator: Operator,
}

impl Calculator {
    /// Create a calculator from an operator identifier (`add`, `sub`, `mul`, `div`).
    ///
    /// # Errors
    ///
    /// `CalcError::InvalidArgument` naming the rejected value and the allowed set.
    pub fn new(operator: &str) -> CalcResult<Self> {
        let operator = Operator::parse(operator)?;
        debug!(%operator, "calculator configured");
        Ok(Calculator::with_operator(operator))
    }

    /// Create a calculator from an already-typed operator.
    pub fn with_operator(operator: Operator) -> Self {
        Calculator { operator }
    }

    /// The operator fixed at construction
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Apply the operator to two operands and describe what happened.
    ///
    /// Always returns a record with `operands` set to the inputs as given and
    /// `results` holding either the computed values or an `error_message`.
    pub fn execute(&self, num1: impl Into<Operand>, num2: impl Into<Operand>) -> Response {
        let operands = Operands {
            num1: num1.into(),
            num2: num2.into(),
        };
        debug!(operator = %self.operator, %operands, "execute");

        let result = integer_operands(&operands).and_then(|(a, b)| self.compute(a, b));
        if let Err(err) = &result {
            warn!(operator = %self.operator, code = err.error_code(), "{}", err);
        }

        Response::new(operands).with_results(result)
    }

    /// Typed compute step behind [`execute`](Self::execute).
    pub fn compute(&self, num1: i64, num2: i64) -> CalcResult<Outcome> {
        match self.operator {
            Operator::Add => num1
                .checked_add(num2)
                .map(|sum| Outcome::Sum { sum })
                .ok_or_else(|| overflow(num1, "+", num2)),
            Operator::Sub => num1
                .checked_sub(num2)
                .map(|difference| Outcome::Difference { difference })
                .ok_or_else(|| overflow(num1, "-", num2)),
            Operator::Mul => num1
                .checked_mul(num2)
                .map(|product| Outcome::Product { product })
                .ok_or_else(|| overflow(num1, "*", num2)),
            Operator::Div => {
                let (quotient, remainder) = floor_div_rem(num1, num2)?;
                Ok(Outcome::Division { quotient, remainder })
            }
        }
    }
}

/// Both operands as `i64`, or the error to record.
fn integer_operands(operands: &Operands) -> CalcResult<(i64, i64)> {
    if !operands.num1.is_integer() || !operands.num2.is_integer() {
        return Err(CalcError::invalid_argument(format!(
            "All operands should be integer, given: {}.",
            operands
        )));
    }
    let fit = |operand: &Operand| {
        operand.as_i64().ok_or_else(|| {
            CalcError::overflow(format!(
                "Operand {} does not fit in a 64-bit signed integer.",
                operand
            ))
        })
    };
    Ok((fit(&operands.num1)?, fit(&operands.num2)?))
}

/// Floor division: quotient rounds toward negative infinity and the
/// remainder takes the divisor's sign, so `q * b + r == a`.
fn floor_div_rem(a: i64, b: i64) -> CalcResult<(i64, i64)> {
    if b == 0 {
        return Err(CalcError::division_by_zero("integer division or modulo by zero"));
    }
    let (mut q, mut r) = match (a.checked_div(b), a.checked_rem(b)) {
        (Some(q), Some(r)) => (q, r),
        _ => return Err(overflow(a, "//", b)),
    };
    if r != 0 && ((r < 0) != (b < 0)) {
        q -= 1;
        r += b;
    }
    Ok((q, r))
}

fn overflow(a: i64, symbol: &str, b: i64) -> CalcError {
    CalcError::overflow(format!(
        "Integer overflow: {} {} {} does not fit in a 64-bit signed integer.",
        a, symbol, b
    ))
}
