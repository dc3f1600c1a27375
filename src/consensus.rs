//! Majority vote over every k-subset of shares.
//!
//! A genuine share set lies on one polynomial of degree `k − 1`, so any `k`
//! correct shares interpolate to the true secret at `x = 0`.  While the
//! corrupted shares are few, the true secret is produced by strictly more
//! subsets than any single wrong value, and the vote recovers it.  Beyond
//! that threshold nothing is guaranteed; the outcome is whatever the vote
//! yields.
//!
//! Ties are broken in favour of the candidate that appeared first in
//! lexicographic subset order.  [`Consensus::contested`] reports when that
//! rule, rather than a strict majority, decided the result.

use crate::combinations::{binomial, combinations};
use crate::config::RecoveryConfig;
use crate::error::{CombinationCount, RecoveryError, RecoveryResult};
use crate::interpolate::{lagrange_evaluate, Point};
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

/// A candidate secret together with the subsets that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate value.
    pub value: BigInt,
    /// Number of subsets that interpolated to `value`.
    pub count: usize,
    /// Those subsets, in enumeration order.
    pub witnesses: Vec<Vec<usize>>,
}

/// Tally of integer candidates keyed by their canonical decimal form.
///
/// Candidates are kept in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct CandidateTally {
    entries: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl CandidateTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one vote for `value` cast by `combo`.
    pub fn record(&mut self, value: BigInt, combo: Vec<usize>) {
        let key = value.to_string();
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.entries.push(Candidate {
                    value,
                    count: 0,
                    witnesses: Vec::new(),
                });
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.count += 1;
        entry.witnesses.push(combo);
    }

    /// Returns `true` if no vote has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates in first-seen order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.entries
    }

    /// Returns the leading candidate and whether another candidate ties it.
    ///
    /// A later candidate only displaces the current leader with a strictly
    /// greater count, so the first candidate to reach the maximum wins.
    pub fn leader(&self) -> Option<(&Candidate, bool)> {
        let mut best: Option<&Candidate> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        let best = best?;
        let ties = self.entries.iter().filter(|e| e.count == best.count).count();
        Some((best, ties > 1))
    }
}

/// Outcome of the majority vote.
#[derive(Debug, Clone)]
pub struct Consensus {
    /// Winning secret.
    pub secret: BigInt,
    /// First subset (indices into the point list) that produced the secret.
    pub witness: Vec<usize>,
    /// Number of subsets that produced the secret.
    pub votes: usize,
    /// Number of subsets evaluated.
    pub evaluated: usize,
    /// Subsets that abstained: duplicate abscissae or a non-integer result.
    pub abstained: usize,
    /// Another candidate reached the same count and lost on enumeration order.
    pub contested: bool,
    /// Full tally, for reporting.
    pub tally: CandidateTally,
}

/// Interpolates the selected points at zero.
///
/// Returns `None` when the subset abstains.
fn vote(points: &[Point], combo: &[usize]) -> Option<BigInt> {
    let selected: Vec<Point> = combo.iter().map(|&i| points[i].clone()).collect();
    match lagrange_evaluate(&selected, &BigInt::zero()) {
        Ok(value) => match value.into_integer() {
            Ok(secret) => Some(secret),
            Err(_) => None,
        },
        Err(err) => {
            debug_assert!(err.is_recoverable());
            None
        }
    }
}

/// Runs the vote sequentially with default settings.
///
/// # Errors
///
/// * [`RecoveryError::InvalidThreshold`] if `k == 0`.
/// * [`RecoveryError::NoValidSecret`] if no subset yields an integer, which
///   includes every `k > points.len()`.
///
/// # Examples
///
/// ```
/// use share_consensus::{reconstruct_secret, Point};
/// use num_bigint::BigInt;
///
/// // y = 2x + 5, with the share at x = 3 corrupted.
/// let points = [
///     Point::new(1, 7),
///     Point::new(2, 9),
///     Point::new(3, 100),
///     Point::new(4, 13),
/// ];
/// let consensus = reconstruct_secret(&points, 2).unwrap();
/// assert_eq!(consensus.secret, BigInt::from(5));
/// assert_eq!(consensus.witness, vec![0, 1]);
/// ```
pub fn reconstruct_secret(points: &[Point], k: usize) -> RecoveryResult<Consensus> {
    reconstruct_secret_with(points, k, &RecoveryConfig::default())
}

/// Runs the vote according to `config`.
///
/// Parallel evaluation collects every subset's outcome in enumeration order
/// before merging, so the result is identical to the sequential run.
///
/// # Errors
///
/// As [`reconstruct_secret`], plus [`RecoveryError::TooManyCombinations`]
/// when `C(n, k)` exceeds `config.max_combinations`.  Both checks happen
/// before any interpolation.
pub fn reconstruct_secret_with(
    points: &[Point],
    k: usize,
    config: &RecoveryConfig,
) -> RecoveryResult<Consensus> {
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold(k));
    }
    let n = points.len();
    if let Some(limit) = config.max_combinations {
        match binomial(n, k) {
            Some(count) if count <= limit => {}
            count => {
                return Err(RecoveryError::TooManyCombinations {
                    count: CombinationCount(count),
                    limit,
                })
            }
        }
    }

    let ballot = match use_parallel(config) {
        #[cfg(not(target_arch = "wasm32"))]
        true => vote_parallel(points, k),
        _ => vote_sequential(points, k),
    };

    let Ballot {
        tally,
        evaluated,
        abstained,
    } = ballot;
    let (winner, contested) = tally.leader().ok_or(RecoveryError::NoValidSecret)?;
    let secret = winner.value.clone();
    let votes = winner.count;
    let witness = winner
        .witnesses
        .first()
        .cloned()
        .ok_or(RecoveryError::NoValidSecret)?;
    Ok(Consensus {
        secret,
        witness,
        votes,
        evaluated,
        abstained,
        contested,
        tally,
    })
}

/// Votes gathered over one enumeration of subsets.
#[derive(Debug, Default)]
struct Ballot {
    tally: CandidateTally,
    evaluated: usize,
    abstained: usize,
}

impl Ballot {
    fn cast(&mut self, outcome: Option<BigInt>, combo: Vec<usize>) {
        self.evaluated += 1;
        match outcome {
            Some(secret) => self.tally.record(secret, combo),
            None => self.abstained += 1,
        }
    }
}

fn vote_sequential(points: &[Point], k: usize) -> Ballot {
    let mut ballot = Ballot::default();
    for combo in combinations(points.len(), k) {
        let outcome = vote(points, &combo);
        ballot.cast(outcome, combo);
    }
    ballot
}

// Outcomes are collected in enumeration order before any of them is cast.
#[cfg(not(target_arch = "wasm32"))]
fn vote_parallel(points: &[Point], k: usize) -> Ballot {
    let combos: Vec<Vec<usize>> = combinations(points.len(), k).collect();
    let outcomes: Vec<Option<BigInt>> =
        combos.par_iter().map(|combo| vote(points, combo)).collect();
    let mut ballot = Ballot::default();
    for (outcome, combo) in outcomes.into_iter().zip(combos) {
        ballot.cast(outcome, combo);
    }
    ballot
}

fn use_parallel(config: &RecoveryConfig) -> bool {
    #[cfg(not(target_arch = "wasm32"))]
    {
        config.parallel && rayon::current_num_threads() > 1
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        false
    }
}
