//! Building rationals from pairs of integers.
//!
//! Fixed-width inputs are widened to [`Integer`] before any arithmetic, so
//! `i64::MIN.div_by(-1)` and friends are exact.

use dashu::integer::IBig;

use crate::error::Result;
use crate::{Integer, Rational};

/// Creates a normalized rational from a numerator and denominator of the
/// same integer type.
///
/// # Errors
///
/// Returns [`RationalError::InvalidArgument`](crate::RationalError::InvalidArgument)
/// if the denominator is zero.
pub fn from_integers<T: Into<Integer>>(numerator: T, denominator: T) -> Result<Rational> {
    Rational::new(numerator.into(), denominator.into()).map(Rational::into_normalized)
}

/// Fraction construction written as `numerator.div_by(denominator)`.
///
/// ```
/// use ratio_integers::DivBy;
///
/// let half = 1_i32.div_by(2).unwrap();
/// assert_eq!(half, 2_000_000_000_i64.div_by(4_000_000_000).unwrap());
/// assert_eq!(half.to_string(), "1/2");
/// ```
pub trait DivBy<Rhs = Self> {
    /// Returns the normalized rational `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`](crate::RationalError::InvalidArgument)
    /// if `rhs` is zero.
    fn div_by(self, rhs: Rhs) -> Result<Rational>;
}

impl DivBy for i32 {
    fn div_by(self, rhs: Self) -> Result<Rational> {
        from_integers(self, rhs)
    }
}

impl DivBy for i64 {
    fn div_by(self, rhs: Self) -> Result<Rational> {
        from_integers(self, rhs)
    }
}

impl DivBy for Integer {
    fn div_by(self, rhs: Self) -> Result<Rational> {
        from_integers(self, rhs)
    }
}

impl DivBy for IBig {
    fn div_by(self, rhs: Self) -> Result<Rational> {
        from_integers(self, rhs)
    }
}
