//! Error taxonomy for share decoding and secret reconstruction.

use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type RecoveryResult<T> = Result<T, RecoveryError>;

/// Errors raised while decoding shares or reconstructing a secret.
///
/// `InvalidFraction` and `NotAnInteger` describe a single combination of
/// shares; the consensus engine absorbs them and lets that combination
/// abstain.  Every other variant concerns the input as a whole and is
/// returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("invalid fraction: zero denominator")]
    /// A rational was constructed with a zero denominator.
    InvalidFraction,
    #[error("rational value is not an integer")]
    /// An integer was requested from a rational whose denominator is not one.
    NotAnInteger,
    #[error("invalid digit {digit:?} for base {radix}")]
    /// A share value contains a character outside the alphabet of its base.
    InvalidDigit {
        /// Offending character.
        digit: char,
        /// Declared base of the share.
        radix: u32,
    },
    #[error("unsupported base {0:?}: expected an integer in 2..=36")]
    /// A share declares a base that is not an integer between 2 and 36.
    UnsupportedRadix(String),
    #[error("invalid share key {0:?}: expected a positive integer")]
    /// A share key is not a positive decimal integer.
    InvalidShareKey(String),
    #[error("invalid threshold k = {0}")]
    /// The threshold is zero.
    InvalidThreshold(usize),
    #[error("no valid secret found")]
    /// No combination of shares interpolated to an integer secret.
    NoValidSecret,
    #[error("number of shares does not match n (declared {declared}, supplied {supplied})")]
    /// The declared share count differs from the number of supplied shares.
    ShareCountMismatch {
        /// Value of `keys.n`.
        declared: usize,
        /// Number of share entries present.
        supplied: usize,
    },
    #[error("{count} combinations exceed the configured limit of {limit}")]
    /// Enumerating every k-subset would exceed the configured budget.
    TooManyCombinations {
        /// Number of k-subsets, or `None` if it overflows `u128`.
        count: CombinationCount,
        /// Configured maximum.
        limit: u128,
    },
    #[error("decode error: {0}")]
    /// The share container could not be parsed.
    Decode(String),
}

impl RecoveryError {
    /// Returns `true` for errors confined to a single combination of shares.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RecoveryError::InvalidFraction | RecoveryError::NotAnInteger)
    }
}

/// Number of combinations reported by [`RecoveryError::TooManyCombinations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationCount(pub Option<u128>);

impl std::fmt::Display for CombinationCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(count) => write!(f, "{count}"),
            None => f.write_str("more than 2^128"),
        }
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(RecoveryError::InvalidFraction.is_recoverable());
        assert!(RecoveryError::NotAnInteger.is_recoverable());
        assert!(!RecoveryError::NoValidSecret.is_recoverable());
        assert!(!RecoveryError::InvalidDigit { digit: '9', radix: 2 }.is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = RecoveryError::ShareCountMismatch {
            declared: 4,
            supplied: 3,
        };
        assert_eq!(
            err.to_string(),
            "number of shares does not match n (declared 4, supplied 3)"
        );
        let err = RecoveryError::TooManyCombinations {
            count: CombinationCount(None),
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "more than 2^128 combinations exceed the configured limit of 10"
        );
    }
}
