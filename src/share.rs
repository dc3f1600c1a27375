//! Share containers and their decoding into interpolation points.
//!
//! A container is a JSON object holding the threshold parameters under
//! `keys` and one entry per share, keyed by the share's index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```

use crate::error::{RecoveryError, RecoveryResult};
use crate::interpolate::Point;
use crate::radix::{decode_radix, parse_radix};
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threshold parameters declared by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareKeys {
    /// Number of shares supplied.
    pub n: usize,
    /// Number of correct shares needed to determine the secret.
    pub k: usize,
}

/// Base declaration of a share, accepted as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadixField {
    /// `"base": "16"`
    Text(String),
    /// `"base": 16`
    Number(u64),
}

impl RadixField {
    /// Validates the declaration and returns the base.
    pub fn radix(&self) -> RecoveryResult<u32> {
        match self {
            RadixField::Text(text) => parse_radix(text),
            RadixField::Number(value) => parse_radix(&value.to_string()),
        }
    }
}

/// A share as it appears in the container, before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    /// Base the value is written in.
    pub base: RadixField,
    /// Digits of the share value, most significant first.
    pub value: String,
}

/// Parsed share container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareContainer {
    /// Declared `n` and `k`.
    pub keys: ShareKeys,
    /// Every other top-level entry, keyed by share index.
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl ShareContainer {
    /// Parses a container from JSON text.
    pub fn from_json(text: &str) -> RecoveryResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks that the declared `n` matches the number of share entries.
    pub fn check_count(&self) -> RecoveryResult<()> {
        if self.shares.len() == self.keys.n {
            Ok(())
        } else {
            Err(RecoveryError::ShareCountMismatch {
                declared: self.keys.n,
                supplied: self.shares.len(),
            })
        }
    }
}

/// A decoded share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Share index, taken from the container key.
    pub x: u64,
    /// Declared base.
    pub radix: u32,
    /// Raw digit string.
    pub digits: String,
    /// Decoded value.
    pub y: BigUint,
}

impl Share {
    /// Decodes one container entry.
    pub fn decode(key: &str, encoded: &EncodedShare) -> RecoveryResult<Self> {
        let x = parse_share_key(key)?;
        let radix = encoded.base.radix()?;
        let y = decode_radix(&encoded.value, radix)?;
        Ok(Share {
            x,
            radix,
            digits: encoded.value.clone(),
            y,
        })
    }

    /// The share as an interpolation point.
    pub fn point(&self) -> Point {
        Point {
            x: BigInt::from(self.x),
            y: BigInt::from(self.y.clone()),
        }
    }
}

fn parse_share_key(key: &str) -> RecoveryResult<u64> {
    match key.parse::<u64>() {
        Ok(x) if x > 0 => Ok(x),
        _ => Err(RecoveryError::InvalidShareKey(key.to_string())),
    }
}

/// Decodes every share of `container`, ordered by ascending index.
///
/// The share count is checked before anything is decoded.
///
/// # Errors
///
/// * [`RecoveryError::ShareCountMismatch`] if `keys.n` is wrong.
/// * [`RecoveryError::InvalidShareKey`], [`RecoveryError::UnsupportedRadix`]
///   or [`RecoveryError::InvalidDigit`] for the first malformed share.
pub fn decode_shares(container: &ShareContainer) -> RecoveryResult<Vec<Share>> {
    container.check_count()?;
    let mut shares = container
        .shares
        .iter()
        .map(|(key, encoded)| Share::decode(key, encoded))
        .collect::<RecoveryResult<Vec<_>>>()?;
    // Stable: keys that parse to the same index keep their textual order.
    shares.sort_by_key(|share| share.x);
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = include_str!("../demos/data/small.json");

    #[test]
    fn test_parse_container() {
        let container = ShareContainer::from_json(SMALL).unwrap();
        assert_eq!(container.keys, ShareKeys { n: 4, k: 3 });
        assert_eq!(container.shares.len(), 4);
        assert_eq!(
            container.shares["6"],
            EncodedShare {
                base: RadixField::Text("4".to_string()),
                value: "213".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_orders_numerically() {
        let json = r#"{
            "keys": {"n": 3, "k": 2},
            "10": {"base": "10", "value": "30"},
            "2": {"base": 16, "value": "a"},
            "1": {"base": "2", "value": "101"}
        }"#;
        let shares = decode_shares(&ShareContainer::from_json(json).unwrap()).unwrap();
        let xs: Vec<u64> = shares.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![1, 2, 10]);
        assert_eq!(shares[0].y, BigUint::from(5u32));
        assert_eq!(shares[1].y, BigUint::from(10u32));
        assert_eq!(shares[1].radix, 16);
        assert_eq!(shares[2].point(), Point::new(10, 30));
    }

    #[test]
    fn test_count_checked_before_decoding() {
        let json = r#"{
            "keys": {"n": 3, "k": 2},
            "1": {"base": "2", "value": "129"},
            "2": {"base": "10", "value": "7"}
        }"#;
        let container = ShareContainer::from_json(json).unwrap();
        assert_eq!(
            decode_shares(&container),
            Err(RecoveryError::ShareCountMismatch {
                declared: 3,
                supplied: 2,
            })
        );
    }

    #[test]
    fn test_invalid_digit() {
        let json = r#"{
            "keys": {"n": 2, "k": 2},
            "1": {"base": "2", "value": "129"},
            "2": {"base": "10", "value": "7"}
        }"#;
        let container = ShareContainer::from_json(json).unwrap();
        assert_eq!(
            decode_shares(&container),
            Err(RecoveryError::InvalidDigit { digit: '2', radix: 2 })
        );
    }

    #[test]
    fn test_invalid_keys_and_bases() {
        let encoded = EncodedShare {
            base: RadixField::Text("10".to_string()),
            value: "1".to_string(),
        };
        for key in ["0", "-1", "one", ""] {
            assert_eq!(
                Share::decode(key, &encoded),
                Err(RecoveryError::InvalidShareKey(key.to_string()))
            );
        }
        let encoded = EncodedShare {
            base: RadixField::Number(40),
            value: "1".to_string(),
        };
        assert_eq!(
            Share::decode("1", &encoded),
            Err(RecoveryError::UnsupportedRadix("40".to_string()))
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ShareContainer::from_json(r#"{"1": {"base": "10", "value": "4"}}"#),
            Err(RecoveryError::Decode(_))
        ));
        assert!(matches!(
            ShareContainer::from_json(r#"{"keys": {"n": 1, "k": 1}, "1": 5}"#),
            Err(RecoveryError::Decode(_))
        ));
    }
}
