//! Stateless calculator facade over `f64`
//!
//! `Calculator` fixes the generic operation set to double precision and
//! gives the six operations a method-call surface plus slice-based dispatch
//! through `Operation`.

use arith_core::{ops, Operation, Result};

/// Stateless calculator over double-precision operands
///
/// The struct carries no fields; two instances are indistinguishable and
/// every method is referentially transparent. Construction exists only to
/// give callers a method surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator
    pub const fn new() -> Self {
        Calculator
    }

    /// Add two numbers
    pub fn add(&self, a: f64, b: f64) -> f64 {
        ops::add(a, b)
    }

    /// Subtract `b` from `a`
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        ops::subtract(a, b)
    }

    /// Multiply two numbers
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        ops::multiply(a, b)
    }

    /// Divide `a` by `b`
    ///
    /// Fails with `ArithError::DivisionByZero` when `b` is exactly zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        ops::divide(a, b)
    }

    /// Raise `base` to `exponent`
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        ops::power(base, exponent)
    }

    /// Principal square root of `n`
    ///
    /// Fails with `ArithError::NegativeRadicand` when `n` is negative.
    pub fn square_root(&self, n: f64) -> Result<f64> {
        ops::square_root(n)
    }

    /// Apply an operation to a slice of operands
    ///
    /// The slice length must equal the operation's arity.
    pub fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<f64> {
        operation.apply(operands)
    }
}
