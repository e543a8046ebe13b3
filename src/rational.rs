// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! Interpolation chains many additions and multiplications; with unreduced
//! fractions the numerator and denominator magnitudes compound with every
//! factor and the computation degrades badly as the threshold grows. Every
//! [`Rational`] is therefore normalized at construction and every operation
//! returns a freshly normalized value. Reduction after each step is part of
//! the contract, not an optimization.

use crate::errors::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::{
    fmt,
    ops::{Add, Mul, Neg},
};
use tracing::error;

/// An exact fraction of two [`BigInt`]s in canonical form: the denominator
/// is positive, `gcd(|numer|, denom) == 1`, and zero is stored as `0/1`.
///
/// Values are immutable; arithmetic produces new instances. Negative values
/// carry their sign in the numerator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer / denom`, normalized.
    ///
    /// Fails with [`Error::DivisionByZero`] when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            error!("attempted to build a rational with denominator zero");
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduce(numer, denom))
    }

    /// Normalize a fraction whose denominator is already known nonzero.
    fn reduce(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let g = gcd(numer.abs(), denom.clone());
        Rational {
            numer: numer / &g,
            denom: denom / &g,
        }
    }

    /// The integer `n` as `n/1`.
    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// The additive identity, `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The multiplicative identity, `1/1`.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// The (signed) numerator of the reduced fraction.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The (positive) denominator of the reduced fraction.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Narrow to an integer.
    ///
    /// This never rounds: a denominator other than 1 means the value is not
    /// an integer and is surfaced as [`Error::NonIntegralResult`], carrying
    /// the reduced fraction for the caller's report.
    pub fn into_integer(self) -> Result<BigInt> {
        if !self.denom.is_one() {
            error!(
                "expected an integer result, got {}/{}",
                self.numer, self.denom
            );
            return Err(Error::NonIntegralResult {
                numer: self.numer,
                denom: self.denom,
            });
        }
        Ok(self.numer)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: &Rational) -> Rational {
        Rational::reduce(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: &Rational) -> Rational {
        Rational::reduce(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        // Canonical form keeps the sign in the numerator, so no
        // re-normalization is needed.
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Euclidean gcd over non-negative inputs: repeated remainder until the
/// divisor reaches zero. `gcd(x, 0) == x`.
fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
