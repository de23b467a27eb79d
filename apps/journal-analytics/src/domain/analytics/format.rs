//! Formatting utilities for metrics display.
//!
//! Rendering of the numeric sentinels lives here, away from the values
//! themselves: `+∞` renders as `∞`, `−∞` as `−` (U+2212) followed by `∞`,
//! and missing values as an em dash.

use rust_decimal::Decimal;

use crate::domain::shared::numeric::to_fixed;
use crate::domain::shared::{Money, RatioValue};

/// Rendering of a value that could not be computed.
pub const NO_DATA: &str = "\u{2014}";
/// Rendering of positive infinity.
pub const POSITIVE_INFINITY: &str = "\u{221e}";
/// Rendering of negative infinity.
pub const NEGATIVE_INFINITY: &str = "\u{2212}\u{221e}";

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Format a fraction as a percentage, e.g. `0.5` as `50.00%`.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{}%", to_fixed(value * HUNDRED, 2))
}

/// Format a decimal with `dp` decimal places.
#[must_use]
pub fn format_decimal(value: Decimal, dp: u32) -> String {
    to_fixed(value, dp)
}

/// Format an optional amount with 2 decimal places.
#[must_use]
pub fn format_money(value: Option<Money>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |money| money.to_string())
}

/// Format a ratio, rendering the sentinels as symbols.
#[must_use]
pub fn format_ratio(value: RatioValue, dp: u32) -> String {
    match value {
        RatioValue::Finite(v) => to_fixed(v, dp),
        RatioValue::PositiveInfinity => POSITIVE_INFINITY.to_string(),
        RatioValue::NegativeInfinity => NEGATIVE_INFINITY.to_string(),
        RatioValue::NoData => NO_DATA.to_string(),
    }
}

/// Format an optional R value, e.g. `1.79R`.
#[must_use]
pub fn format_r(value: Option<Decimal>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |r| format!("{}R", to_fixed(r, 2)))
}
