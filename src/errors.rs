// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Error types for exact secret reconstruction.

use num_bigint::BigInt;
use thiserror::Error;

/// The default `Result` type used in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding shares or reconstructing a secret.
///
/// Every variant is unrecoverable for the case in which it occurs: a case
/// either fully reconstructs or fails entirely, with no rounding, digit
/// skipping, or other coercion. Callers running several cases should record
/// the failure and continue with the remaining cases; none of these errors
/// is transient, so there is nothing to retry.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A share value contains a character outside `[0-9a-zA-Z]`.
    #[error("invalid character {ch:?} in share value")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },

    /// A digit is valid in some base but not in the one the share declares.
    #[error("digit {ch:?} has value {value}, out of range for radix {radix}")]
    DigitOutOfRange {
        /// The offending character.
        ch: char,
        /// The numeric value the character maps to.
        value: u32,
        /// The radix the share was declared in.
        radix: u8,
    },

    /// A share value string is empty.
    #[error("share value contains no digits")]
    EmptyDigits,

    /// A share declares a base outside `[2, 36]`, or one that is not an
    /// integer at all.
    #[error("invalid radix {given:?}, expected an integer in [2, 36]")]
    InvalidRadix {
        /// The base as it appeared in the input.
        given: String,
    },

    /// A rational was constructed with a zero denominator. During
    /// interpolation this means two of the selected shares carry the same
    /// x-coordinate, which is unrecoverable for the case.
    #[error("division by zero (duplicate x-coordinate among the selected shares?)")]
    DivisionByZero,

    /// The interpolated value at zero did not reduce to an integer. The
    /// selected points do not lie on a polynomial with an integer constant
    /// term, or the declared threshold is wrong for them.
    #[error("interpolation at zero produced the non-integral value {numer}/{denom}")]
    NonIntegralResult {
        /// Numerator of the fully reduced final sum.
        numer: BigInt,
        /// Denominator of the fully reduced final sum (not 1).
        denom: BigInt,
    },

    /// Fewer points were supplied than the threshold requires.
    #[error("got {have} points but the threshold requires {need}")]
    NotEnoughPoints {
        /// Number of points supplied.
        have: usize,
        /// Number of points the threshold requires.
        need: usize,
    },

    /// The wire form of a case could not be decoded.
    #[error("malformed case: {0}")]
    MalformedCase(String),
}
