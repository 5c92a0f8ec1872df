//! Pure arithmetic operation functions
//!
//! Each operation is a single-step, stateless computation with no I/O and
//! no shared state. Fallible operations report invalid-domain inputs
//! through `Result`; the rest return the value directly. Two calls with
//! identical arguments always produce identical results.

use crate::error::{ArithError, Result};
use crate::traits::Scalar;

/// Add two numbers
pub fn add<T: Scalar>(a: T, b: T) -> T {
    a + b
}

/// Subtract `b` from `a`
pub fn subtract<T: Scalar>(a: T, b: T) -> T {
    a - b
}

/// Multiply two numbers
pub fn multiply<T: Scalar>(a: T, b: T) -> T {
    a * b
}

/// Divide `a` by `b`
///
/// The zero-divisor guard is an exact comparison against `T::ZERO`, never
/// a tolerance check. A divisor extremely close to zero produces a large
/// finite quotient rather than an error, and `-0.0` compares equal to zero
/// and is rejected.
pub fn divide<T: Scalar>(a: T, b: T) -> Result<T> {
    if b == T::ZERO {
        return Err(ArithError::DivisionByZero);
    }

    Ok(a / b)
}

/// Raise `base` to `exponent`
///
/// Follows IEEE `pow` semantics: a negative base with a non-integer
/// exponent yields NaN rather than an error.
pub fn power<T: Scalar>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// Principal (non-negative) square root of `n`
pub fn square_root<T: Scalar>(n: T) -> Result<T> {
    if n < T::ZERO {
        return Err(ArithError::NegativeRadicand);
    }

    Ok(n.sqrt())
}
