//! End-to-end reconstruction from a share container.
//!
//! [`reconstruct`] checks the declared share count, decodes every share,
//! runs the majority vote and then flags the shares that disagree with the
//! winning polynomial.

use crate::config::RecoveryConfig;
use crate::consensus::{reconstruct_secret_with, CandidateTally};
use crate::error::{RecoveryError, RecoveryResult};
use crate::faults::find_wrong_shares;
use crate::interpolate::Point;
use crate::share::{decode_shares, Share, ShareContainer};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

/// Result of a reconstruction.
#[derive(Debug, Clone, Serialize)]
pub struct Reconstruction {
    /// The recovered secret (serialized as a decimal string).
    #[serde(serialize_with = "serialize_decimal")]
    pub secret: BigInt,
    /// Indices of the shares that disagree with the recovered polynomial,
    /// ascending.
    pub wrong_shares: Vec<u64>,
    /// Threshold `k` used for the vote.
    pub threshold: usize,
    /// Indices of the shares whose interpolation served as the witness.
    pub witness: Vec<u64>,
    /// Number of `k`-subsets that produced the secret.
    pub votes: usize,
    /// Number of `k`-subsets evaluated.
    pub evaluated: usize,
    /// Number of `k`-subsets that abstained.
    pub abstained: usize,
    /// Another candidate tied the winning count; enumeration order decided.
    pub contested: bool,
    /// Every candidate seen during the vote.
    #[serde(skip)]
    pub tally: CandidateTally,
}

fn serialize_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Reconstructs the secret with default settings.
///
/// # Errors
///
/// [`RecoveryError::ShareCountMismatch`] is reported before any share is
/// decoded; decoding errors come next; [`RecoveryError::NoValidSecret`] if the
/// vote yields nothing.
///
/// # Examples
///
/// ```
/// use share_consensus::{reconstruct, ShareContainer};
///
/// let container = ShareContainer::from_json(r#"{
///     "keys": {"n": 4, "k": 3},
///     "1": {"base": "10", "value": "4"},
///     "2": {"base": "2", "value": "111"},
///     "3": {"base": "10", "value": "12"},
///     "6": {"base": "4", "value": "213"}
/// }"#).unwrap();
/// let result = reconstruct(&container).unwrap();
/// assert_eq!(result.secret.to_string(), "3");
/// assert!(result.wrong_shares.is_empty());
/// ```
pub fn reconstruct(container: &ShareContainer) -> RecoveryResult<Reconstruction> {
    reconstruct_with(container, &RecoveryConfig::default())
}

/// Reconstructs the secret according to `config`.
pub fn reconstruct_with(
    container: &ShareContainer,
    config: &RecoveryConfig,
) -> RecoveryResult<Reconstruction> {
    let shares = decode_shares(container)?;
    reconstruct_shares(&shares, container.keys.k, config)
}

/// Reconstructs the secret from already decoded shares.
pub fn reconstruct_shares(
    shares: &[Share],
    k: usize,
    config: &RecoveryConfig,
) -> RecoveryResult<Reconstruction> {
    let points: Vec<Point> = shares.iter().map(Share::point).collect();
    let consensus = reconstruct_secret_with(&points, k, config)?;
    let wrong_shares = find_wrong_shares(&points, &consensus.witness)?
        .iter()
        .map(index_of)
        .collect::<RecoveryResult<Vec<u64>>>()?;
    let witness = consensus.witness.iter().map(|&i| shares[i].x).collect();
    Ok(Reconstruction {
        secret: consensus.secret,
        wrong_shares,
        threshold: k,
        witness,
        votes: consensus.votes,
        evaluated: consensus.evaluated,
        abstained: consensus.abstained,
        contested: consensus.contested,
        tally: consensus.tally,
    })
}

// Abscissae originate from `u64` share keys.
fn index_of(x: &BigInt) -> RecoveryResult<u64> {
    x.to_u64()
        .ok_or_else(|| RecoveryError::InvalidShareKey(x.to_string()))
}
