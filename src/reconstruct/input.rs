// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Wire-format decoding for a single reconstruction case.
//!
//! A case arrives as one JSON object: a `keys` entry carrying the threshold
//! `k`, and any number of point entries whose key is the decimal share
//! index and whose value names the base the share is written in plus its
//! digit string:
//!
//! ```json
//! {
//!     "keys": { "k": 3 },
//!     "1": { "base": "16", "value": "a" },
//!     "2": { "base": 8, "value": "14" }
//! }
//! ```
//!
//! Key order is preserved: when a case supplies more points than the
//! threshold, the first k *in input order* are the ones used, so the order
//! entries appear in is observable behavior.

use crate::{
    digits::{self, Radix},
    errors::{Error, Result},
    reconstruct::{reconstruct, Point},
};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

/// A share's encoded value: the base it is written in and its digit string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareValue {
    /// The base the digits are written in, already validated.
    pub radix: Radix,
    /// The digit string, most-significant digit first.
    pub digits: String,
}

/// One reconstruction case: the threshold `k` plus the labeled share
/// values, kept in the order the input supplied them.
///
/// Each case is deserialized once, consumed once by
/// [`constant_term`](Input::constant_term), and holds no state shared with
/// any other case. Callers running many cases collect one `Result` per
/// case; a failing case never aborts its siblings.
#[derive(Clone, Debug)]
pub struct Input {
    k: usize,
    entries: Vec<(BigInt, ShareValue)>,
}

/// The `keys` entry. Fields other than `k` (such as the total share count
/// `n`) are allowed and ignored.
#[derive(Debug, Deserialize)]
struct WireKeys {
    k: usize,
}

#[derive(Debug, Deserialize)]
struct WireShare {
    base: WireRadix,
    value: String,
}

/// The wire format allows the base as either a JSON number or a decimal
/// string; both collapse into a validated [`Radix`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRadix {
    Number(i64),
    Text(String),
}

impl WireRadix {
    fn validate(&self) -> Result<Radix> {
        match self {
            WireRadix::Number(n) => {
                let n = u32::try_from(*n).map_err(|_| Error::InvalidRadix {
                    given: n.to_string(),
                })?;
                Radix::new(n)
            }
            WireRadix::Text(s) => Radix::from_decimal_str(s),
        }
    }
}

impl Input {
    /// Build a case from an already-decoded threshold and entry list.
    ///
    /// The threshold must be at least 1. Entry order is kept as given; see
    /// the module docs for why it matters.
    pub fn new(k: usize, entries: Vec<(BigInt, ShareValue)>) -> Result<Self> {
        if k == 0 {
            error!("rejecting case with threshold zero");
            return Err(Error::MalformedCase(
                "threshold k must be at least 1".into(),
            ));
        }
        Ok(Input { k, entries })
    }

    /// Decode a case from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_str(raw).map_err(|e| Error::MalformedCase(e.to_string()))?;
        let Value::Object(map) = root else {
            error!("case wire form is not a JSON object");
            return Err(Error::MalformedCase("expected a JSON object".into()));
        };

        let mut k = None;
        let mut entries = Vec::with_capacity(map.len().saturating_sub(1));
        for (key, value) in &map {
            if key == "keys" {
                let keys: WireKeys = serde_json::from_value(value.clone())
                    .map_err(|e| Error::MalformedCase(format!("bad keys entry: {e}")))?;
                k = Some(keys.k);
                continue;
            }
            let x: BigInt = key.parse().map_err(|_| {
                Error::MalformedCase(format!("share label {key:?} is not a decimal integer"))
            })?;
            let share: WireShare = serde_json::from_value(value.clone())
                .map_err(|e| Error::MalformedCase(format!("bad share entry {key:?}: {e}")))?;
            let radix = share.base.validate()?;
            entries.push((
                x,
                ShareValue {
                    radix,
                    digits: share.value,
                },
            ));
        }

        match k {
            Some(k) => Self::new(k, entries),
            None => {
                error!("case wire form has no keys.k entry");
                Err(Error::MalformedCase("missing keys.k".into()))
            }
        }
    }

    /// The threshold: how many shares reconstruction will consume.
    pub fn threshold(&self) -> usize {
        self.k
    }

    /// The labeled share values, in input order.
    pub fn entries(&self) -> &[(BigInt, ShareValue)] {
        &self.entries
    }

    /// Reconstruct the secret: decode every share value into a [`Point`]
    /// in entry order, then interpolate at zero over the first k of them.
    pub fn constant_term(&self) -> Result<BigInt> {
        let points = self
            .entries
            .iter()
            .map(|(x, share)| {
                let y = digits::parse(&share.digits, share.radix)?;
                Ok(Point::new(x.clone(), y))
            })
            .collect::<Result<Vec<_>>>()?;
        reconstruct(&points, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_base_shares() {
        // f(x) = 2x + 8: f(1) = 10 = "a" base 16, f(2) = 12 = "14" base 8.
        let raw = r#"{
            "keys": { "k": 2 },
            "1": { "base": "16", "value": "a" },
            "2": { "base": 8, "value": "14" }
        }"#;
        let case = Input::from_json(raw).unwrap();
        assert_eq!(case.threshold(), 2);
        assert_eq!(case.constant_term().unwrap(), BigInt::from(8));
    }

    #[test]
    fn keys_entry_position_and_extra_fields_do_not_matter() {
        let raw = r#"{
            "1": { "base": 10, "value": "6" },
            "2": { "base": 10, "value": "7" },
            "keys": { "k": 3, "n": 4 },
            "3": { "base": 10, "value": "8" }
        }"#;
        let case = Input::from_json(raw).unwrap();
        assert_eq!(case.threshold(), 3);
        assert_eq!(case.entries().len(), 3);
        assert_eq!(case.constant_term().unwrap(), BigInt::from(5));
    }

    #[test]
    fn oversupplied_cases_use_the_first_k_entries_in_input_order() {
        // Only the first two entries lie on f(x) = 2x + 8.
        let raw = r#"{
            "keys": { "k": 2 },
            "5": { "base": 10, "value": "18" },
            "1": { "base": 10, "value": "10" },
            "9": { "base": 10, "value": "77777" }
        }"#;
        let case = Input::from_json(raw).unwrap();
        assert_eq!(case.entries()[0].0, BigInt::from(5));
        assert_eq!(case.constant_term().unwrap(), BigInt::from(8));
    }

    #[test]
    fn share_labels_may_exceed_machine_words() {
        let raw = r#"{
            "keys": { "k": 1 },
            "340282366920938463463374607431768211456": { "base": 10, "value": "3" }
        }"#;
        let case = Input::from_json(raw).unwrap();
        assert_eq!(case.constant_term().unwrap(), BigInt::from(3));
    }

    #[test]
    fn bad_radix_is_surfaced_not_swallowed() {
        let raw = r#"{
            "keys": { "k": 1 },
            "1": { "base": "37", "value": "a" }
        }"#;
        assert_eq!(
            Input::from_json(raw).unwrap_err(),
            Error::InvalidRadix {
                given: "37".into()
            }
        );

        let raw = r#"{
            "keys": { "k": 1 },
            "1": { "base": -2, "value": "1" }
        }"#;
        assert_eq!(
            Input::from_json(raw).unwrap_err(),
            Error::InvalidRadix {
                given: "-2".into()
            }
        );
    }

    #[test]
    fn malformed_wire_forms_are_rejected() {
        assert!(matches!(
            Input::from_json("not json"),
            Err(Error::MalformedCase(_))
        ));
        assert!(matches!(
            Input::from_json(r#"[1, 2, 3]"#),
            Err(Error::MalformedCase(_))
        ));
        assert!(matches!(
            Input::from_json(r#"{ "1": { "base": 10, "value": "6" } }"#),
            Err(Error::MalformedCase(_))
        ));
        assert!(matches!(
            Input::from_json(r#"{ "keys": { "k": 1 }, "one": { "base": 10, "value": "6" } }"#),
            Err(Error::MalformedCase(_))
        ));
        assert!(matches!(
            Input::from_json(r#"{ "keys": { "k": 0 }, "1": { "base": 10, "value": "6" } }"#),
            Err(Error::MalformedCase(_))
        ));
    }

    #[test]
    fn decoding_errors_propagate_from_the_digit_parser() {
        let raw = r#"{
            "keys": { "k": 1 },
            "1": { "base": 10, "value": "6f" }
        }"#;
        assert_eq!(
            Input::from_json(raw).unwrap().constant_term(),
            Err(Error::DigitOutOfRange {
                ch: 'f',
                value: 15,
                radix: 10
            })
        );
    }

    #[test]
    fn duplicate_labels_fail_during_interpolation() {
        // serde_json with preserve_order keeps the later duplicate under
        // the same key, but two distinct labels with equal values are the
        // interesting case anyway.
        let raw = r#"{
            "keys": { "k": 2 },
            "1": { "base": 10, "value": "6" },
            "01": { "base": 10, "value": "7" }
        }"#;
        assert_eq!(
            Input::from_json(raw).unwrap().constant_term(),
            Err(Error::DivisionByZero)
        );
    }
}
