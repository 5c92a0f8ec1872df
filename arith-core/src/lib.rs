#![no_std]

//! Arith Core - Stateless Arithmetic Operation Definitions
//!
//! This crate provides the pure operation contract for the arith
//! calculator: operand traits, the six operations, their dispatch
//! enumeration, and the error model

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod op;
pub mod ops;
pub mod traits;

pub use error::*;
pub use op::*;
pub use ops::*;
pub use traits::*;
