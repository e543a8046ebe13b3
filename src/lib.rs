// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Exact reconstruction of a threshold-shared secret.
//!
//! A (k, n) threshold scheme splits a secret into n shares, each an
//! evaluation of a polynomial f of degree < k whose constant term f(0) is
//! the secret. Any k shares recover it; fewer reveal nothing. This crate
//! implements the recovery step only: share values are decoded from digit
//! strings in any base from 2 to 36, and f(0) is computed by Lagrange
//! interpolation over exact rational arithmetic, so the answer is an exact
//! integer or a reported error, never a rounded one.
//!
//! This is a mathematical reconstruction utility, not a hardened
//! cryptographic implementation: there is no share generation, no defense
//! against malicious shares, and no constant-time arithmetic.
//!
//! # Example
//!
//! ```
//! use shamir_recover::Input;
//!
//! // Two shares of f(x) = 2x + 8: f(1) = 10 in base 16, f(2) = 12 in base 8.
//! let case = r#"{
//!     "keys": { "k": 2 },
//!     "1": { "base": "16", "value": "a" },
//!     "2": { "base": 8, "value": "14" }
//! }"#;
//!
//! let secret = Input::from_json(case)?.constant_term()?;
//! assert_eq!(secret, 8.into());
//! # Ok::<(), shamir_recover::Error>(())
//! ```
//!
//! Callers with many cases run them independently: every type here is an
//! immutable value, so cases may be processed in parallel, and one failing
//! case never affects another.

#![warn(missing_docs)]

pub mod digits;
pub mod errors;
pub mod rational;
pub mod reconstruct;

pub use digits::Radix;
pub use errors::{Error, Result};
pub use rational::Rational;
pub use reconstruct::{reconstruct, Input, Point, ShareValue};
