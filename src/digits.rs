// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Multi-base decoding of share values.
//!
//! Shares arrive as digit strings in a declared base anywhere in `[2, 36]`.
//! Digits are the usual alphanumerics: `0-9` map to 0 through 9 and `a-z`
//! (case-insensitive) map to 10 through 35.

use crate::errors::{Error, Result};
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::error;

/// A numeral-system base, validated once on construction to lie in
/// `[2, 36]`.
///
/// The wire format carries bases as either JSON numbers or decimal strings;
/// both funnel through [`Radix::new`] or [`Radix::from_decimal_str`] so that
/// the rest of the crate only ever sees a base that is already known good.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Radix(u8);

impl Radix {
    /// The smallest accepted base.
    pub const MIN: u8 = 2;
    /// The largest accepted base, using digits `0-9` then `a-z`.
    pub const MAX: u8 = 36;

    /// Validate `radix` and wrap it.
    pub fn new(radix: u32) -> Result<Self> {
        if !(u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&radix) {
            error!("rejecting radix {radix}, outside [2, 36]");
            return Err(Error::InvalidRadix {
                given: radix.to_string(),
            });
        }
        Ok(Radix(radix as u8))
    }

    /// Parse a decimal string such as `"16"` into a validated radix.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let value: u32 = s.trim().parse().map_err(|_| Error::InvalidRadix {
            given: s.to_string(),
        })?;
        Self::new(value)
    }

    /// The base as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Decode an unsigned magnitude from `digits` in the given base.
///
/// Accumulates with Horner's rule, most-significant digit first:
/// `acc = acc * radix + digit`. Share values in this scheme are encoded
/// magnitudes, so no sign prefix is accepted; empty strings are rejected
/// rather than decoded as zero.
pub fn parse(digits: &str, radix: Radix) -> Result<BigInt> {
    if digits.is_empty() {
        error!("share value is empty");
        return Err(Error::EmptyDigits);
    }

    let base = BigInt::from(radix.get());
    let mut acc = BigInt::zero();
    for ch in digits.chars() {
        let value = digit_value(ch)?;
        if value >= u32::from(radix.get()) {
            error!("digit {ch:?} is out of range for radix {}", radix.get());
            return Err(Error::DigitOutOfRange {
                ch,
                value,
                radix: radix.get(),
            });
        }
        acc = acc * &base + value;
    }
    Ok(acc)
}

fn digit_value(ch: char) -> Result<u32> {
    match ch.to_ascii_lowercase() {
        c @ '0'..='9' => Ok(c as u32 - '0' as u32),
        c @ 'a'..='z' => Ok(c as u32 - 'a' as u32 + 10),
        _ => Err(Error::InvalidDigit { ch }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(r: u32) -> Radix {
        Radix::new(r).unwrap()
    }

    #[test]
    fn decodes_common_bases() {
        assert_eq!(parse("ff", radix(16)).unwrap(), BigInt::from(255));
        assert_eq!(parse("1010", radix(2)).unwrap(), BigInt::from(10));
        assert_eq!(parse("z", radix(36)).unwrap(), BigInt::from(35));
        assert_eq!(parse("744", radix(8)).unwrap(), BigInt::from(484));
    }

    #[test]
    fn decoding_is_case_insensitive() {
        assert_eq!(parse("FF", radix(16)).unwrap(), parse("ff", radix(16)).unwrap());
        assert_eq!(parse("Zz", radix(36)).unwrap(), BigInt::from(35 * 36 + 35));
    }

    #[test]
    fn decodes_values_larger_than_machine_words() {
        // 2^128 in hex, one digit past what u128 can hold.
        let big = parse("100000000000000000000000000000000", radix(16)).unwrap();
        assert_eq!(big, BigInt::from(u128::MAX) + 1);
    }

    #[test]
    fn rejects_characters_outside_the_digit_alphabet() {
        assert_eq!(
            parse("12?4", radix(10)),
            Err(Error::InvalidDigit { ch: '?' })
        );
        assert_eq!(parse("-12", radix(10)), Err(Error::InvalidDigit { ch: '-' }));
    }

    #[test]
    fn rejects_digits_at_or_above_the_radix() {
        assert_eq!(
            parse("1f", radix(10)),
            Err(Error::DigitOutOfRange {
                ch: 'f',
                value: 15,
                radix: 10
            })
        );
        assert_eq!(
            parse("102", radix(2)),
            Err(Error::DigitOutOfRange {
                ch: '2',
                value: 2,
                radix: 2
            })
        );
    }

    #[test]
    fn rejects_empty_values() {
        assert_eq!(parse("", radix(10)), Err(Error::EmptyDigits));
    }

    #[test]
    fn radix_bounds_are_enforced_once() {
        assert!(Radix::new(2).is_ok());
        assert!(Radix::new(36).is_ok());
        assert_eq!(
            Radix::new(1),
            Err(Error::InvalidRadix { given: "1".into() })
        );
        assert_eq!(
            Radix::new(37),
            Err(Error::InvalidRadix {
                given: "37".into()
            })
        );
    }

    #[test]
    fn radix_parses_from_decimal_strings() {
        assert_eq!(Radix::from_decimal_str("16").unwrap().get(), 16);
        assert_eq!(Radix::from_decimal_str(" 8 ").unwrap().get(), 8);
        assert!(Radix::from_decimal_str("sixteen").is_err());
        assert!(Radix::from_decimal_str("0x10").is_err());
    }
}
