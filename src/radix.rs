//! Digit-string decoding in bases 2 through 36.

use crate::error::{RecoveryError, RecoveryResult};
use num_bigint::BigUint;
use num_traits::Zero;

/// Smallest supported base.
pub const MIN_RADIX: u32 = 2;
/// Largest supported base (`0-9` followed by `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Maps a single character to its digit value, if it has one.
///
/// `'0'..='9'` map to 0–9 and ASCII letters map case-insensitively to 10–35.
#[inline]
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(10 + c as u32 - 'a' as u32),
        'A'..='Z' => Some(10 + c as u32 - 'A' as u32),
        _ => None,
    }
}

/// Parses a base declaration such as `"16"` and checks that it is in range.
pub fn parse_radix(text: &str) -> RecoveryResult<u32> {
    let radix: u32 = text
        .parse()
        .map_err(|_| RecoveryError::UnsupportedRadix(text.to_string()))?;
    check_radix(radix)?;
    Ok(radix)
}

fn check_radix(radix: u32) -> RecoveryResult<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(RecoveryError::UnsupportedRadix(radix.to_string()))
    }
}

/// Decodes `digits`, most significant first, as a non-negative integer in
/// base `radix`.
///
/// The accumulator starts at zero and each digit is folded in as
/// `acc * radix + digit`, so an empty string decodes to zero.  There is no
/// sign and no whitespace handling.
///
/// # Errors
///
/// * [`RecoveryError::UnsupportedRadix`] if `radix` is outside `2..=36`.
/// * [`RecoveryError::InvalidDigit`] on the first character that is not a
///   digit of `radix`.
///
/// # Examples
///
/// ```
/// use share_consensus::radix::decode_radix;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode_radix("213", 4).unwrap(), BigUint::from(39u32));
/// assert_eq!(decode_radix("FF", 16).unwrap(), BigUint::from(255u32));
/// assert!(decode_radix("129", 2).is_err());
/// ```
pub fn decode_radix(digits: &str, radix: u32) -> RecoveryResult<BigUint> {
    check_radix(radix)?;
    let mut acc = BigUint::zero();
    for c in digits.chars() {
        let digit = digit_value(c)
            .filter(|&d| d < radix)
            .ok_or(RecoveryError::InvalidDigit { digit: c, radix })?;
        acc = acc * radix + digit;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(decode_radix("4", 10).unwrap(), BigUint::from(4u32));
        assert_eq!(decode_radix("111", 2).unwrap(), BigUint::from(7u32));
        assert_eq!(decode_radix("213", 4).unwrap(), BigUint::from(39u32));
        assert_eq!(decode_radix("zz", 36).unwrap(), BigUint::from(1295u32));
        assert_eq!(
            decode_radix("e1b5e05623d881f", 16).unwrap(),
            BigUint::from(1016509518118225951u64)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(decode_radix("aBc", 16), decode_radix("ABC", 16));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(decode_radix("", 10).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_rejects_out_of_range_digit() {
        assert_eq!(
            decode_radix("129", 2),
            Err(RecoveryError::InvalidDigit { digit: '2', radix: 2 })
        );
        assert_eq!(
            decode_radix("g", 16),
            Err(RecoveryError::InvalidDigit { digit: 'g', radix: 16 })
        );
    }

    #[test]
    fn test_rejects_unmapped_characters() {
        for input in [" 12", "12 ", "-5", "1_0", "٣"] {
            assert!(matches!(
                decode_radix(input, 10),
                Err(RecoveryError::InvalidDigit { .. })
            ));
        }
    }

    #[test]
    fn test_radix_bounds() {
        assert!(decode_radix("0", 1).is_err());
        assert!(decode_radix("0", 37).is_err());
        assert_eq!(parse_radix("36"), Ok(36));
        assert_eq!(
            parse_radix("x"),
            Err(RecoveryError::UnsupportedRadix("x".to_string()))
        );
        assert!(parse_radix("0").is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip(limbs in proptest::collection::vec(any::<u32>(), 0..8), radix in MIN_RADIX..=MAX_RADIX, upper in any::<bool>()) {
            let value = BigUint::new(limbs);
            let mut text = value.to_str_radix(radix);
            if upper {
                text = text.to_uppercase();
            }
            prop_assert_eq!(decode_radix(&text, radix).unwrap(), value);
        }
    }
}
