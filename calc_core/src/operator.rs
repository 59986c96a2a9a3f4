//! # Operators
//!
//! The fixed set of arithmetic operations a [`Calculator`](crate::Calculator)
//! can be configured with. Identifiers are the short lowercase names used on
//! the wire and on the command line.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operator::Operator;
//!
//! let op: Operator = "div".parse().unwrap();
//! assert_eq!(op, Operator::Div);
//! assert_eq!(op.result_keys(), &["quotient", "remainder"]);
//!
//! assert!("pow".parse::<Operator>().is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Arithmetic operation performed by a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `add` - num1 + num2
    Add,
    /// `sub` - num1 - num2
    Sub,
    /// `mul` - num1 * num2
    Mul,
    /// `div` - floor quotient and remainder of num1 / num2
    Div,
}

impl Operator {
    /// All operators in canonical order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Identifier accepted by [`Operator::parse`] (add, sub, mul, div)
    pub fn identifier(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
        }
    }

    /// Identifiers of every operator, in canonical order
    pub fn identifiers() -> [&'static str; 4] {
        Operator::ALL.map(|op| op.identifier())
    }

    /// Human-readable name
    pub fn description(&self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Sub => "subtraction",
            Operator::Mul => "multiplication",
            Operator::Div => "division",
        }
    }

    /// Keys this operator writes under `results` on success
    pub fn result_keys(&self) -> &'static [&'static str] {
        match self {
            Operator::Add => &["sum"],
            Operator::Sub => &["difference"],
            Operator::Mul => &["product"],
            Operator::Div => &["quotient", "remainder"],
        }
    }

    /// Parse an operator identifier.
    ///
    /// Matching is exact and case-sensitive. The error message names the
    /// rejected value and the allowed set.
    ///
    /// # Example
    /// ```
    /// use calc_core::operator::Operator;
    ///
    /// let err = Operator::parse("Add").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     r#"Invalid operator 'Add' was given, choose from ["add", "sub", "mul", "div"]."#
    /// );
    /// ```
    pub fn parse(identifier: &str) -> CalcResult<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.identifier() == identifier)
            .ok_or_else(|| {
                CalcError::invalid_argument(format!(
                    "Invalid operator '{}' was given, choose from {:?}.",
                    identifier,
                    Operator::identifiers()
                ))
            })
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_identifiers() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.identifier()).unwrap(), op);
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_rejects_unknown_identifiers() {
        for bad in ["", "pow", "ADD", "add ", "subtract", "divide", "mod"] {
            let err = Operator::parse(bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_ARGUMENT");
            assert!(err.to_string().contains(&format!("'{}'", bad)));
            assert!(err.to_string().contains(r#"["add", "sub", "mul", "div"]"#));
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        assert_eq!(serde_json::to_string(&Operator::Mul).unwrap(), r#""mul""#);
        let op: Operator = serde_json::from_str(r#""sub""#).unwrap();
        assert_eq!(op, Operator::Sub);
        assert!(serde_json::from_str::<Operator>(r#""pow""#).is_err());
    }

    #[test]
    fn test_result_keys() {
        assert_eq!(Operator::Add.result_keys(), &["sum"]);
        assert_eq!(Operator::Sub.result_keys(), &["difference"]);
        assert_eq!(Operator::Mul.result_keys(), &["product"]);
        assert_eq!(Operator::Div.result_keys(), &["quotient", "remainder"]);
    }
}
