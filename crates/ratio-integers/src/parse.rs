//! Parsing rationals from strings.
//!
//! Two forms are accepted: `"N"` (denominator 1) and `"N/D"`, where both
//! parts are base-10 integers with an optional sign.

use num_traits::One;
use std::str::FromStr;

use crate::error::{RationalError, Result};
use crate::{Integer, Rational};

/// Parses a rational from `"N"` or `"N/D"` and normalizes it.
///
/// # Errors
///
/// Returns [`RationalError::InvalidFormat`] if the string has more than one
/// `/` or either part is not an integer, and
/// [`RationalError::InvalidArgument`] if the denominator is zero.
pub fn parse(s: &str) -> Result<Rational> {
    let invalid = || RationalError::InvalidFormat {
        input: s.to_owned(),
    };

    let (numerator, denominator) = match s.split_once('/') {
        Some((_, d)) if d.contains('/') => return Err(invalid()),
        Some((n, d)) => (n, Some(d)),
        None => (s, None),
    };

    let numerator: Integer = numerator.parse().map_err(|_| invalid())?;
    let denominator = match denominator {
        Some(d) => d.parse().map_err(|_| invalid())?,
        None => Integer::one(),
    };

    Rational::new(numerator, denominator).map(Rational::into_normalized)
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
