//! Arith - Stateless Arithmetic Operations
//!
//! This library provides six pure arithmetic operations over floating-point
//! numbers with explicit error reporting for the two invalid-domain cases:
//! division by zero and square root of a negative number.
//!
//! ## Architecture
//!
//! Arith follows a clean contract/implementation separation:
//!
//! - **arith-core**: Pure operation functions, operand traits, and the
//!   error model (`no_std`, no I/O)
//! - **arith**: The `Calculator` facade and runnable demos
//!
//! ## Quick Start
//!
//! ```rust
//! use arith::Calculator;
//!
//! fn example() -> arith::Result<()> {
//!     let calc = Calculator::new();
//!
//!     assert_eq!(calc.add(2.0, 3.0), 5.0);
//!     assert_eq!(calc.divide(6.0, 2.0)?, 3.0);
//!     assert_eq!(calc.square_root(4.0)?, 2.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Properties
//!
//! - **Stateless**: every operation is a pure function; the `Calculator`
//!   carries no fields
//! - **Explicit errors**: invalid-domain inputs surface as `ArithError`
//!   values, never panics
//! - **Exact zero guard**: the division guard compares the divisor against
//!   exactly zero, never against an epsilon
//! - **Thread safe**: no shared mutable state anywhere

// Re-export core abstractions and operation definitions
pub use arith_core::{
    // Operand traits
    Scalar,
    // Operation identifiers
    Operation,
    // Error handling
    ArithError, ErrorCategory, Result,
    // Pure operation functions
    add, divide, multiply, power, square_root, subtract,
};

// Implementation modules
pub mod calculator;

pub use calculator::Calculator;
