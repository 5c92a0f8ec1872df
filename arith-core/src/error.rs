//! Error types for arithmetic operations

/// Broad classification of operation failures
///
/// Every failure in this crate is a caller error: a supplied input violated
/// an operation precondition. None of them are transient, so no retry ever
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A supplied input violates an operation precondition
    InvalidArgument,
}

/// Errors that can occur during arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithError {
    /// Division with a divisor of exactly zero
    DivisionByZero,
    /// Square root of a negative number
    NegativeRadicand,
    /// Operation symbol or name not recognized
    UnknownOperation,
    /// Operand count does not match the operation arity
    OperandCount,
}

impl ArithError {
    /// Get the category for this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            ArithError::DivisionByZero
            | ArithError::NegativeRadicand
            | ArithError::UnknownOperation
            | ArithError::OperandCount => ErrorCategory::InvalidArgument,
        }
    }
}

impl core::fmt::Display for ArithError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ArithError::DivisionByZero => "divisor cannot be zero",
            ArithError::NegativeRadicand => "negative number has no real square root",
            ArithError::UnknownOperation => "unknown operation symbol or name",
            ArithError::OperandCount => "operand count does not match operation arity",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithError {}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, ArithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_are_caller_errors() {
        let all = [
            ArithError::DivisionByZero,
            ArithError::NegativeRadicand,
            ArithError::UnknownOperation,
            ArithError::OperandCount,
        ];

        for err in all {
            assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        }
    }
}
