//! Operand type constraints for arithmetic operations
//!
//! This module defines the trait that constrains what types can flow
//! through the generic operation functions.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for types that can be used as operands
///
/// This trait defines the requirements for types the operation set can
/// compute with. All operand types must be:
/// - Copy: Can be passed by value without allocation
/// - PartialEq/PartialOrd: Can be compared against zero for the domain guards
/// - Closed under the four elementary operators and negation
pub trait Scalar:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Sized
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity, compared against exactly for the division guard
    const ZERO: Self;

    /// Convert from f64 for generic construction
    ///
    /// This is used where operands arrive as double precision values but
    /// the exact operand type is chosen by the caller.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic inspection
    fn to_f64(self) -> f64;

    /// Raise self to the given power
    ///
    /// Follows IEEE `pow` semantics, including the NaN result for a
    /// negative base with a non-integer exponent.
    fn powf(self, exponent: Self) -> Self;

    /// Principal (non-negative) square root of self
    ///
    /// Callers are expected to reject negative inputs before calling.
    fn sqrt(self) -> Self;
}

// Implement Scalar for the floating-point operand types. Float math routes
// through libm so the crate builds without std.

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_conversions() {
        assert_eq!(f64::from_f64(2.5), 2.5);
        assert_eq!(2.5_f64.to_f64(), 2.5);
        assert_eq!(f64::ZERO, 0.0);
    }

    #[test]
    fn test_f32_conversions() {
        assert_eq!(f32::from_f64(2.5), 2.5_f32);
        assert_eq!(2.5_f32.to_f64(), 2.5);
        assert_eq!(f32::ZERO, 0.0);
    }

    #[test]
    fn test_float_intrinsics() {
        assert_eq!(Scalar::powf(2.0_f64, 10.0), 1024.0);
        assert_eq!(Scalar::sqrt(16.0_f64), 4.0);
        assert_eq!(Scalar::sqrt(16.0_f32), 4.0);
    }
}
