/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod base64;
mod blob;
pub mod error;
pub mod instant;
pub mod retry;

pub use crate::blob::Blob;
pub use crate::error::Error;
pub use crate::instant::Instant;

use std::convert::TryFrom;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `i32`. Fractions are truncated. `None` when the value is out of range.
    pub fn to_i32(self) -> Option<i32> {
        match self {
            Number::PosInt(v) => i32::try_from(v).ok(),
            Number::NegInt(v) => i32::try_from(v).ok(),
            Number::Float(v) if v.is_finite() && v >= i32::MIN as f64 && v < i32::MAX as f64 + 1.0 => {
                Some(v as i32)
            }
            Number::Float(_) => None,
        }
    }

    /// Converts to an `i64`. Fractions are truncated. `None` when the value is out of range.
    pub fn to_i64(self) -> Option<i64> {
        match self {
            Number::PosInt(v) => i64::try_from(v).ok(),
            Number::NegInt(v) => Some(v),
            Number::Float(v) if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
                Some(v as i64)
            }
            Number::Float(_) => None,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Instant, Number};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::PosInt(64).to_i32(), Some(64));
        assert_eq!(Number::NegInt(-3).to_i64(), Some(-3));
        assert_eq!(Number::Float(7.9).to_i32(), Some(7));
        assert_eq!(Number::PosInt(u64::MAX).to_i64(), None);
        assert_eq!(Number::NegInt(-2).to_f64(), -2.0);
    }

    #[test]
    fn out_of_range_integers_are_rejected() {
        assert_eq!(Number::PosInt(4294967297).to_i32(), None);
        assert_eq!(Number::NegInt(-2147483649).to_i32(), None);
        assert_eq!(Number::NegInt(i32::MIN as i64).to_i32(), Some(i32::MIN));
        assert_eq!(Number::PosInt(4294967294).to_i64(), Some(4294967294));
        assert_eq!(Number::Float(3e10).to_i32(), None);
        assert_eq!(Number::Float(f64::NAN).to_i64(), None);
    }

    #[test]
    fn signed_values_pick_a_variant() {
        assert_eq!(Number::from(5_i32), Number::PosInt(5));
        assert_eq!(Number::from(-5_i64), Number::NegInt(-5));
        assert_eq!(Number::from(0_i64), Number::PosInt(0));
    }
}
