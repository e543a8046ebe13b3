// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Exact recovery of a shared secret by Lagrange interpolation at zero.
//!
//! A secret is shared as evaluations of a polynomial f of degree < k with
//! f(0) holding the secret. Given any k of those points, the constant term
//! comes back exactly:
//!
//! ```text
//! f(0) = Σ_i y_i · L_i,    L_i = ∏_{j ≠ i} (-x_j) / (x_i - x_j)
//! ```
//!
//! All arithmetic runs over [`Rational`] values, reduced after every single
//! operation, and the final sum is narrowed to an integer without rounding.
//! Reconstruction is a pure function: no shared state, so callers holding
//! many independent cases are free to run them in parallel.

mod input;

pub use input::{Input, ShareValue};

use crate::{
    errors::{Error, Result},
    rational::Rational,
};
use num_bigint::BigInt;
use tracing::error;

/// A single share: the share index x and the decoded share value y = f(x).
///
/// Points are read-only once built; a reconstruction consumes the first k
/// of them in the order they were supplied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Point {
    /// The share index.
    pub x: BigInt,
    /// The share value, f(x).
    pub y: BigInt,
}

impl Point {
    /// Pair a share index with its decoded value.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point { x, y }
    }
}

/// Compute the Lagrange basis value at zero for index `i`, as a running
/// product of one `(-x_j) / (x_i - x_j)` factor per other point.
fn basis_at_zero(points: &[Point], i: usize) -> Result<Rational> {
    let xi = &points[i].x;
    let mut li = Rational::one();
    for (j, pj) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        // A zero denominator here means two shares carry the same index.
        let factor = Rational::new(-&pj.x, xi - &pj.x)?;
        li = &li * &factor;
    }
    Ok(li)
}

/// Reconstruct the constant term f(0) from the first `k` of `points`.
///
/// Points beyond the first `k` are ignored by policy: the scheme needs
/// exactly the threshold count, and extras are neither cross-checked for
/// consistency nor used for error correction. This selection rule is a
/// known limitation, kept deliberately.
///
/// Fails with [`Error::NotEnoughPoints`] when fewer than `k` points (or a
/// zero threshold) are supplied, [`Error::DivisionByZero`] when two of the
/// selected points share an x-coordinate, and [`Error::NonIntegralResult`]
/// when the selected points do not lie on a polynomial with an integer
/// constant term.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt> {
    if k == 0 || points.len() < k {
        error!(
            "cannot interpolate: {} points supplied, threshold {}",
            points.len(),
            k
        );
        return Err(Error::NotEnoughPoints {
            have: points.len(),
            need: k.max(1),
        });
    }
    let points = &points[..k];

    let mut sum = Rational::zero();
    for (i, point) in points.iter().enumerate() {
        let li = basis_at_zero(points, i)?;
        sum = &sum + &(&li * &Rational::from_integer(point.y.clone()));
    }
    sum.into_integer()
}
