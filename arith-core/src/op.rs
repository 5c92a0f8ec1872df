//! Operation identifiers and dispatch
//!
//! This module enumerates the six supported operations and provides symbol
//! parsing plus slice-based dispatch into the operation functions.

use crate::error::{ArithError, Result};
use crate::ops;
use crate::traits::Scalar;

/// Operations supported by the arithmetic set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Addition of two operands
    Add,
    /// Subtraction of the second operand from the first
    Subtract,
    /// Multiplication of two operands
    Multiply,
    /// Division of the first operand by the second
    Divide,
    /// The first operand raised to the power of the second
    Power,
    /// Principal square root of a single operand
    SquareRoot,
}

impl Operation {
    /// Parse an operation from its operator symbol or spelled-out name
    ///
    /// Both spellings are accepted: `"+"` and `"add"`, `"^"` and `"power"`,
    /// and so on.
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "+" | "add" => Ok(Operation::Add),
            "-" | "subtract" => Ok(Operation::Subtract),
            "*" | "multiply" => Ok(Operation::Multiply),
            "/" | "divide" => Ok(Operation::Divide),
            "^" | "power" => Ok(Operation::Power),
            "sqrt" | "square_root" => Ok(Operation::SquareRoot),
            _ => Err(ArithError::UnknownOperation),
        }
    }

    /// Get the canonical operator symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::SquareRoot => "sqrt",
        }
    }

    /// Get the number of operands this operation consumes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => 2,
            Operation::SquareRoot => 1,
        }
    }

    /// Apply the operation to a slice of operands
    ///
    /// The slice length must equal `arity()`.
    pub fn apply<T: Scalar>(self, operands: &[T]) -> Result<T> {
        if operands.len() != self.arity() {
            return Err(ArithError::OperandCount);
        }

        match self {
            Operation::Add => Ok(ops::add(operands[0], operands[1])),
            Operation::Subtract => Ok(ops::subtract(operands[0], operands[1])),
            Operation::Multiply => Ok(ops::multiply(operands[0], operands[1])),
            Operation::Divide => ops::divide(operands[0], operands[1]),
            Operation::Power => Ok(ops::power(operands[0], operands[1])),
            Operation::SquareRoot => ops::square_root(operands[0]),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "sqrt",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
    ];

    #[test]
    fn test_parse() {
        assert_eq!(Operation::parse("+"), Ok(Operation::Add));
        assert_eq!(Operation::parse("add"), Ok(Operation::Add));
        assert_eq!(Operation::parse("sqrt"), Ok(Operation::SquareRoot));
        assert_eq!(Operation::parse("square_root"), Ok(Operation::SquareRoot));

        assert_eq!(Operation::parse("%"), Err(ArithError::UnknownOperation));
        assert_eq!(Operation::parse(""), Err(ArithError::UnknownOperation));
    }

    #[test]
    fn test_parse_symbol_round_trip() {
        for op in ALL {
            assert_eq!(Operation::parse(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::Add.arity(), 2);
        assert_eq!(Operation::Divide.arity(), 2);
        assert_eq!(Operation::SquareRoot.arity(), 1);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(&[2.0_f64, 3.0]), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(&[5.0_f64, 3.0]), Ok(2.0));
        assert_eq!(Operation::Multiply.apply(&[2.0_f64, 3.0]), Ok(6.0));
        assert_eq!(Operation::Divide.apply(&[6.0_f64, 2.0]), Ok(3.0));
        assert_eq!(Operation::Power.apply(&[2.0_f64, 3.0]), Ok(8.0));
        assert_eq!(Operation::SquareRoot.apply(&[4.0_f64]), Ok(2.0));
    }

    #[test]
    fn test_apply_propagates_domain_errors() {
        assert_eq!(
            Operation::Divide.apply(&[10.0_f64, 0.0]),
            Err(ArithError::DivisionByZero)
        );
        assert_eq!(
            Operation::SquareRoot.apply(&[-1.0_f64]),
            Err(ArithError::NegativeRadicand)
        );
    }

    #[test]
    fn test_apply_operand_count() {
        assert_eq!(Operation::Add.apply(&[1.0_f64]), Err(ArithError::OperandCount));
        assert_eq!(
            Operation::SquareRoot.apply(&[1.0_f64, 2.0]),
            Err(ArithError::OperandCount)
        );
        assert_eq!(
            Operation::Multiply.apply::<f64>(&[]),
            Err(ArithError::OperandCount)
        );
    }
}
