//! # Ratio
//!
//! Exact rational arithmetic over arbitrary precision integers.
//!
//! ## Features
//!
//! - **Exact**: no rounding, numerators and denominators grow as needed
//! - **Canonical**: equality, ordering, hashing and display use lowest terms
//! - **Operators**: `+`, `-`, `*`, `/`, unary `-` and the comparison operators
//!
//! ## Quick Start
//!
//! ```rust
//! use ratio::prelude::*;
//!
//! let half = 1_i32.div_by(2).unwrap();
//! let third: Rational = "1/3".parse().unwrap();
//!
//! assert_eq!((&half + &third).to_string(), "5/6");
//! let two_thirds: Rational = "2/3".parse().unwrap();
//! assert!(half.in_range(&third, &two_thirds));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ratio_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ratio_integers::{
        from_integers, in_range, parse, DivBy, Integer, Rational, RationalError,
    };
}
