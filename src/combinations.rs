//! Lexicographic enumeration of k-subsets.
//!
//! The consensus vote breaks ties in favour of the candidate seen first, so
//! the order in which subsets are produced is part of the observable
//! behaviour.  [`Combinations`] yields exactly the sequence produced by the
//! classic recursive "choose from `start` onward" generator: strictly
//! increasing index vectors in lexicographic order.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Lazy iterator over every `k`-element subset of `0..n`.
///
/// Each call to [`combinations`] returns an independent iterator; no state is
/// shared between enumerations.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

/// Enumerates all `C(n, k)` strictly increasing index vectors of length `k`
/// drawn from `0..n`, in lexicographic order.
///
/// `k > n` yields nothing and `k == 0` yields a single empty vector.
///
/// # Examples
///
/// ```
/// use share_consensus::combinations::combinations;
///
/// let all: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(
///     all,
///     vec![
///         vec![0, 1], vec![0, 2], vec![0, 3],
///         vec![1, 2], vec![1, 3], vec![2, 3],
///     ]
/// );
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        indices: (0..k).collect(),
        first: true,
        done: k > n,
    }
}

impl Combinations {
    // Advances `indices` to the next subset; returns false once exhausted.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// Returns `C(n, k)`, or `None` if it does not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use share_consensus::combinations::binomial;
///
/// assert_eq!(binomial(10, 7), Some(120));
/// assert_eq!(binomial(3, 5), Some(0));
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1).
        acc = acc * (n - i) / (i + 1);
    }
    acc.to_u128()
}
