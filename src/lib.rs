#![deny(missing_docs)]

//! # share_consensus
//!
//! **share_consensus** reconstructs a threshold-shared secret from `n` shares
//! of which only `k` are known to be correct, and names the shares that were
//! corrupted.  Every computation is exact: share values are arbitrary
//! precision integers and interpolation runs over reduced fractions, so the
//! vote between candidate secrets is never disturbed by rounding.
//!
//! ## Pipeline
//!
//! * **Decoding**: each share value is a digit string in its own base
//!   (2 through 36), decoded by [`radix::decode_radix`].
//! * **Interpolation**: [`lagrange_evaluate`] evaluates the unique polynomial
//!   of degree below `k` through `k` points using [`Rational`] arithmetic.
//! * **Consensus**: [`reconstruct_secret`] interpolates every `k`-subset of
//!   shares at `x = 0` (see [`combinations`]) and selects the integer value
//!   produced most often.  Ties go to the value seen first in lexicographic
//!   subset order.
//! * **Fault localization**: [`find_wrong_shares`] re-fits the polynomial
//!   through the first subset that voted for the winner and reports every
//!   share that does not lie on it.
//!
//! ## Usage
//!
//! ```rust
//! use share_consensus::{reconstruct, ShareContainer};
//!
//! let container = ShareContainer::from_json(r#"{
//!     "keys": {"n": 5, "k": 3},
//!     "1": {"base": "10", "value": "4"},
//!     "2": {"base": "2", "value": "1111"},
//!     "3": {"base": "10", "value": "12"},
//!     "4": {"base": "16", "value": "13"},
//!     "6": {"base": "4", "value": "213"}
//! }"#).unwrap();
//!
//! let result = reconstruct(&container).unwrap();
//! assert_eq!(result.secret.to_string(), "3");
//! assert_eq!(result.wrong_shares, vec![2]);
//! ```
//!
//! The cost is `C(n, k)` interpolations of `k²` big-integer operations each.
//! Large inputs can be bounded with [`RecoveryConfig::max_combinations`] and
//! spread over threads with [`RecoveryConfig::parallel`]; neither changes the
//! result.  Share generation and sub-exponential decoders are out of scope.

pub mod combinations;
mod config;
pub mod consensus;
mod error;
mod faults;
mod interpolate;
pub mod io;
pub mod radix;
mod rational;
pub mod recovery;
pub mod share;

pub use config::{RecoveryConfig, ENV_MAX_COMBINATIONS, ENV_PARALLEL};
pub use consensus::{reconstruct_secret, reconstruct_secret_with, CandidateTally, Consensus};
pub use error::{CombinationCount, RecoveryError, RecoveryResult};
pub use faults::find_wrong_shares;
pub use interpolate::{lagrange_evaluate, Point};
pub use rational::Rational;
pub use recovery::{reconstruct, reconstruct_shares, reconstruct_with, Reconstruction};
pub use share::{decode_shares, EncodedShare, Share, ShareContainer, ShareKeys};
