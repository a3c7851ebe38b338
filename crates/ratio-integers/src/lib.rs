//! # ratio-integers
//!
//! Arbitrary precision integers and exact rational numbers.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals stored as numerator/denominator pairs (`Rational`)
//! - Construction from strings (`parse`) and integer pairs (`from_integers`, `DivBy`)
//!
//! ## Normal Form
//!
//! A rational is normalized when its numerator and denominator are coprime
//! and the denominator is positive. Equality, ordering, hashing and display
//! all work on the normalized form, and every operation except the raw
//! [`Rational::new`] constructor returns a normalized value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod error;
pub mod integer;
pub mod parse;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use convert::{from_integers, DivBy};
pub use error::{ParseIntegerError, RationalError, Result};
pub use integer::Integer;
pub use parse::parse;
pub use rational::{in_range, Rational};
