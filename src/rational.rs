//! Exact rational arithmetic.
//!
//! This module provides a fraction type over arbitrary-precision integers.
//! The [`Rational`](struct.Rational.html) type keeps every value in canonical
//! reduced form: the denominator is strictly positive and shares no common
//! factor with the numerator.  Because the form is canonical, structural
//! equality is numeric equality, and an integer check is a comparison of the
//! denominator against one.

use crate::error::{RecoveryError, RecoveryResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul};

/// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let t = &a % &b;
        a = b;
        b = t;
    }
    a
}

/// An exact fraction `numer / denom` in lowest terms.
///
/// Construction never produces infinities or NaN-like states: a zero
/// denominator is reported as [`RecoveryError::InvalidFraction`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates the reduced fraction `numer / denom`.
    ///
    /// Both operands are divided by the greatest common divisor of their
    /// absolute values and the signs are adjusted so the denominator is
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError::InvalidFraction`] if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> RecoveryResult<Self> {
        let numer = numer.into();
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RecoveryError::InvalidFraction);
        }
        Ok(Self::reduce(numer, denom))
    }

    /// Creates the integer `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rational {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // Callers guarantee `denom != 0`.
    fn reduce(numer: BigInt, denom: BigInt) -> Self {
        let g = gcd(&numer, &denom);
        let (mut numer, mut denom) = (numer / &g, denom / &g);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Rational { numer, denom }
    }

    /// Returns the numerator of the reduced form.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the (strictly positive) denominator of the reduced form.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns `true` when the value is an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the integer value.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError::NotAnInteger`] if the denominator is not one.
    pub fn to_integer(&self) -> RecoveryResult<BigInt> {
        if self.is_integer() {
            Ok(self.numer.clone())
        } else {
            Err(RecoveryError::NotAnInteger)
        }
    }

    /// Consumes the value and returns its integer form.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError::NotAnInteger`] if the denominator is not one.
    pub fn into_integer(self) -> RecoveryResult<BigInt> {
        if self.is_integer() {
            Ok(self.numer)
        } else {
            Err(RecoveryError::NotAnInteger)
        }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: Self) -> Rational {
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        Rational::reduce(numer, denom)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Rational {
        let numer = &self.numer * &other.numer;
        let denom = &self.denom * &other.denom;
        Rational::reduce(numer, denom)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
