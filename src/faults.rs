//! Residual check of every share against a trusted witness subset.

use crate::error::RecoveryResult;
use crate::interpolate::{lagrange_evaluate, Point};
use crate::rational::Rational;
use num_bigint::BigInt;

/// Returns the abscissae of the points that disagree with the polynomial
/// interpolated through `points[witness]`.
///
/// The witness shares are assumed correct; this holds whenever the majority
/// vote was decided by genuine shares and is not checked independently.
/// Results follow the order of `points`.
///
/// # Errors
///
/// Returns [`RecoveryError::InvalidFraction`](crate::RecoveryError::InvalidFraction)
/// if the witness itself contains repeated abscissae, which a witness chosen
/// by [`reconstruct_secret`](crate::reconstruct_secret) never does.
///
/// # Panics
///
/// Panics if `witness` holds an index outside `points`.
pub fn find_wrong_shares(points: &[Point], witness: &[usize]) -> RecoveryResult<Vec<BigInt>> {
    let basis: Vec<Point> = witness.iter().map(|&i| points[i].clone()).collect();
    let mut wrong = Vec::new();
    for point in points {
        let fitted = lagrange_evaluate(&basis, &point.x)?;
        if fitted != Rational::from_integer(point.y.clone()) {
            wrong.push(point.x.clone());
        }
    }
    Ok(wrong)
}
