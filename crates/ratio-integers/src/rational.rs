//! Exact rational numbers.
//!
//! A [`Rational`] is a numerator/denominator pair of arbitrary precision
//! integers. The raw constructor keeps the pair as given; everything else
//! hands back the normalized form, and comparisons, hashing and display
//! always act on that form.

use num_traits::{One, Zero};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{RationalError, Result};
use crate::Integer;

/// An arbitrary precision rational number.
///
/// Values are immutable: every operation returns a new `Rational`.
#[derive(Clone)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a rational from numerator and denominator without reducing it.
    ///
    /// Call [`Rational::normalize`] to obtain the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RationalError::InvalidArgument("denominator cannot be zero"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Returns the numerator as stored.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator as stored.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns the normalized form of this rational.
    ///
    /// Numerator and denominator are divided by their gcd and the sign is
    /// moved onto the numerator. Zero always normalizes to `0/1`.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.clone().into_normalized()
    }

    pub(crate) fn into_normalized(self) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }

        let g = self.numerator.gcd(&self.denominator);
        let numerator = &self.numerator / &g;
        let denominator = &self.denominator / &g;

        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Borrows `self` when already in normal form, otherwise reduces a copy.
    fn canonical(&self) -> Cow<'_, Self> {
        if self.is_normalized() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.normalize())
        }
    }

    /// Returns true if the stored pair is already in normal form.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        !self.denominator.is_negative() && self.numerator.gcd(&self.denominator).is_one()
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        }
        .into_normalized())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        }
        .into_normalized())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.abs(),
        }
        .into_normalized()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum() * self.denominator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Converts to an integer if the value is whole.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(&self.numerator / &self.denominator)
        } else {
            None
        }
    }

    /// Returns true if `lo <= self <= hi`.
    ///
    /// The range is not validated, so an inverted range contains nothing.
    #[must_use]
    pub fn in_range(&self, lo: &Self, hi: &Self) -> bool {
        lo <= self && self <= hi
    }
}

/// Returns true if `value` lies in the inclusive range `[lo, hi]`.
#[must_use]
pub fn in_range(value: &Rational, lo: &Rational, hi: &Rational) -> bool {
    value.in_range(lo, hi)
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

/// Two fractions have the same normal form exactly when their cross products
/// match, so no reduction is needed.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &self.denominator * &other.numerator
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.canonical();
        canonical.numerator.hash(state);
        canonical.denominator.hash(state);
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &self.denominator * &other.numerator;
        // Cross-multiplying by a negative denominator flips the inequality.
        if self.denominator.is_negative() == other.denominator.is_negative() {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.canonical();
        if canonical.denominator.is_one() {
            write!(f, "{}", canonical.numerator)
        } else {
            write!(f, "{}/{}", canonical.numerator, canonical.denominator)
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
        .into_normalized()
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
        .into_normalized()
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
        .into_normalized()
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`Rational::checked_div`] to handle
/// that case.
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
        .into_normalized()
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
        .into_normalized()
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
