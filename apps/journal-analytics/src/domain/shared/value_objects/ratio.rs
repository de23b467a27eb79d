//! Ratio value with explicit non-finite sentinels.
//!
//! `Decimal` has no infinity or NaN, so ratios whose denominator can be zero
//! (profit factor) carry the degenerate outcomes as enum variants instead.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

const POSITIVE_INFINITY: &str = "inf";
const NEGATIVE_INFINITY: &str = "-inf";

/// A ratio that may be finite, infinite, or not computable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatioValue {
    /// A finite value.
    Finite(Decimal),
    /// Numerator positive over a zero denominator.
    PositiveInfinity,
    /// Numerator negative over a zero denominator.
    NegativeInfinity,
    /// Neither numerator nor denominator had data.
    #[default]
    NoData,
}

impl RatioValue {
    /// Finite value, if any.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true for a finite value.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true for either infinity.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::PositiveInfinity | Self::NegativeInfinity)
    }

    /// Round a finite value to `dp` decimal places; sentinels pass through.
    #[must_use]
    pub fn round_dp(&self, dp: u32) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.round_dp(dp)),
            other => *other,
        }
    }
}

impl From<Decimal> for RatioValue {
    fn from(value: Decimal) -> Self {
        Self::Finite(value)
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::PositiveInfinity => f.write_str(POSITIVE_INFINITY),
            Self::NegativeInfinity => f.write_str(NEGATIVE_INFINITY),
            Self::NoData => f.write_str("n/a"),
        }
    }
}

impl Serialize for RatioValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoData => serializer.serialize_none(),
            other => serializer.serialize_some(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RatioValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None => Ok(Self::NoData),
            Some(POSITIVE_INFINITY) => Ok(Self::PositiveInfinity),
            Some(NEGATIVE_INFINITY) => Ok(Self::NegativeInfinity),
            Some(text) => Decimal::from_str(text)
                .map(Self::Finite)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn finite_accessors() {
        let ratio = RatioValue::from(dec!(4.0));
        assert!(ratio.is_finite());
        assert!(!ratio.is_infinite());
        assert_eq!(ratio.as_decimal(), Some(dec!(4.0)));
        assert_eq!(RatioValue::PositiveInfinity.as_decimal(), None);
        assert_eq!(RatioValue::default(), RatioValue::NoData);
    }

    #[test]
    fn round_keeps_sentinels() {
        assert_eq!(
            RatioValue::Finite(dec!(2.225806)).round_dp(2),
            RatioValue::Finite(dec!(2.23))
        );
        assert_eq!(
            RatioValue::PositiveInfinity.round_dp(2),
            RatioValue::PositiveInfinity
        );
    }

    #[test]
    fn serde_representation() {
        let cases = [
            (RatioValue::Finite(dec!(4.0)), "\"4.0\""),
            (RatioValue::PositiveInfinity, "\"inf\""),
            (RatioValue::NegativeInfinity, "\"-inf\""),
            (RatioValue::NoData, "null"),
        ];

        for (value, expected) in cases {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, expected);
            let back: RatioValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<RatioValue>("\"lots\"").is_err());
    }
}
