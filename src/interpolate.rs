//! Exact Lagrange interpolation.
//!
//! Given `k` points with distinct abscissae there is exactly one polynomial
//! of degree below `k` through all of them.  [`lagrange_evaluate`] evaluates
//! that polynomial at an arbitrary integer without ever forming its
//! coefficients: each point contributes the term
//!
//! ```text
//! yᵢ · ∏_{j≠i} (at − xⱼ) / (xᵢ − xⱼ)
//! ```
//!
//! and the terms are summed left to right in [`Rational`] arithmetic, so the
//! result is exact and every intermediate value is reproducible.

use crate::error::RecoveryResult;
use crate::rational::Rational;
use num_bigint::BigInt;

/// A decoded share: the polynomial takes the value `y` at `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// Abscissa (the share index).
    pub x: BigInt,
    /// Ordinate (the share value).
    pub y: BigInt,
}

impl Point {
    /// Creates a point from anything convertible into big integers.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Evaluates the interpolating polynomial of `points` at `at`.
///
/// An empty slice evaluates to zero.
///
/// # Errors
///
/// Returns [`RecoveryError::InvalidFraction`](crate::RecoveryError::InvalidFraction)
/// if two points share an abscissa.  Callers voting over many subsets treat
/// this as the subset abstaining.
///
/// # Examples
///
/// ```
/// use share_consensus::{lagrange_evaluate, Point, Rational};
/// use num_bigint::BigInt;
///
/// // y = x² + 3
/// let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// let secret = lagrange_evaluate(&points, &BigInt::from(0)).unwrap();
/// assert_eq!(secret, Rational::from_integer(3));
/// ```
pub fn lagrange_evaluate(points: &[Point], at: &BigInt) -> RecoveryResult<Rational> {
    let mut result = Rational::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut term = Rational::from_integer(pi.y.clone());
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let factor = Rational::new(at - &pj.x, &pi.x - &pj.x)?;
            term = &term * &factor;
        }
        result = &result + &term;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecoveryError;
    use proptest::prelude::*;

    fn eval_poly(coeffs: &[i64], x: i64) -> BigInt {
        // Horner, highest degree last in `coeffs`.
        coeffs
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &c| acc * x + c)
    }

    #[test]
    fn test_recovers_constant_term() {
        let points = [Point::new(1, 4), Point::new(2, 7), Point::new(6, 39)];
        let value = lagrange_evaluate(&points, &BigInt::from(0)).unwrap();
        assert_eq!(value.to_integer(), Ok(BigInt::from(3)));
    }

    #[test]
    fn test_non_integer_result() {
        // Line through (1, 1) and (3, 2): y = x/2 + 1/2.
        let points = [Point::new(1, 1), Point::new(3, 2)];
        let value = lagrange_evaluate(&points, &BigInt::from(0)).unwrap();
        assert_eq!(value, Rational::new(1, 2).unwrap());
        assert!(!value.is_integer());
    }

    #[test]
    fn test_duplicate_abscissa_fails() {
        let points = [Point::new(2, 5), Point::new(2, 9), Point::new(4, 1)];
        assert_eq!(
            lagrange_evaluate(&points, &BigInt::from(0)),
            Err(RecoveryError::InvalidFraction)
        );
    }

    #[test]
    fn test_single_point_is_constant() {
        let points = [Point::new(5, 42)];
        for at in [-3, 0, 5, 100] {
            assert_eq!(
                lagrange_evaluate(&points, &BigInt::from(at)).unwrap(),
                Rational::from_integer(42)
            );
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(
            lagrange_evaluate(&[], &BigInt::from(7)).unwrap(),
            Rational::zero()
        );
    }

    #[test]
    fn test_reproduces_sample_points() {
        let coeffs = [17, -4, 9, 2];
        let points: Vec<Point> = [1, 2, 5, 11]
            .iter()
            .map(|&x| Point::new(x, eval_poly(&coeffs, x)))
            .collect();
        for p in &points {
            assert_eq!(
                lagrange_evaluate(&points, &p.x).unwrap(),
                Rational::from_integer(p.y.clone())
            );
        }
    }

    proptest! {
        #[test]
        fn prop_exact_for_integer_polynomials(
            coeffs in proptest::collection::vec(-1_000_000i64..1_000_000, 1..6),
            xs in proptest::collection::btree_set(-50i64..50, 6..10),
            at in -1_000i64..1_000,
        ) {
            let k = coeffs.len();
            let points: Vec<Point> = xs
                .iter()
                .take(k)
                .map(|&x| Point::new(x, eval_poly(&coeffs, x)))
                .collect();
            let value = lagrange_evaluate(&points, &BigInt::from(at)).unwrap();
            prop_assert!(value.is_integer());
            prop_assert_eq!(value.into_integer().unwrap(), eval_poly(&coeffs, at));
        }
    }
}
