//! Decimal arithmetic helpers.
//!
//! Every monetary and ratio computation in the crate goes through
//! [`rust_decimal::Decimal`]; these helpers cover the guarded operations
//! (zero-filled inputs, divisions that must never see a zero denominator).

use rust_decimal::{Decimal, RoundingStrategy};

/// Treat an absent value as zero.
#[must_use]
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Keep a value only when it is present and non-zero.
///
/// Used for optional plan levels where a zero price means "not set".
#[must_use]
pub fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Divide `numerator` by `denominator`, returning `None` for a zero
/// denominator or on overflow.
#[must_use]
pub fn checked_ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator)
}

/// Fraction `part / whole` of two counts; zero when `whole` is zero.
#[must_use]
pub fn count_ratio(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part as u64) / Decimal::from(whole as u64)
}

/// `|to - from| * quantity`, or `None` if the result leaves the Decimal range.
#[must_use]
pub fn scaled_distance(from: Decimal, to: Decimal, quantity: Decimal) -> Option<Decimal> {
    to.checked_sub(from)?.abs().checked_mul(quantity)
}

/// Arithmetic mean of a slice of decimals.
#[must_use]
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    checked_ratio(sum, Decimal::from(values.len() as u64))
}

/// Render with exactly `dp` decimal places, rounding half away from zero.
#[must_use]
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}
