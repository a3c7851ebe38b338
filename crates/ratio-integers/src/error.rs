//! Errors raised while parsing, constructing or dividing rationals.

use thiserror::Error;

/// Errors produced by rational construction, parsing and division.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A rational was constructed with a zero denominator.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A string was not of the form `N` or `N/D` with integer parts.
    #[error("invalid rational format: {input:?}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// The divisor was the rational zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// A string was not an optional sign followed by decimal digits.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid decimal integer: {input:?}")]
pub struct ParseIntegerError {
    /// The rejected input.
    pub input: String,
}

/// Result alias for rational operations.
pub type Result<T> = std::result::Result<T, RationalError>;
