//! Money value object for account-currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::domain::shared::numeric::{checked_ratio, to_fixed};

/// A monetary amount in the account currency.
///
/// Represented as a Decimal for precise financial calculations.
/// Always uses 2 decimal places for display (but internal precision is higher).
/// Arithmetic saturates at the Decimal range instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Get the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Express this amount in units of `unit`. `None` when `unit` is zero.
    #[must_use]
    pub fn ratio_to(&self, unit: Self) -> Option<Decimal> {
        checked_ratio(self.0, unit.0)
    }

    /// Average amount over `count` items; zero when `count` is zero.
    #[must_use]
    pub fn average_over(&self, count: usize) -> Self {
        checked_ratio(self.0, Decimal::from(count as u64)).map_or(Self::ZERO, Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            write!(f, "-${}", to_fixed(self.0.abs(), 2))
        } else {
            write!(f, "${}", to_fixed(self.0, 2))
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn money_new_and_display() {
        let m = Money::new(dec!(150.50));
        assert_eq!(format!("{m}"), "$150.50");
        assert_eq!(Money::new(dec!(-55.5)).to_string(), "-$55.50");
    }

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(15050);
        assert_eq!(m.amount(), dec!(150.50));
    }

    #[test]
    fn money_sign_checks() {
        assert!(Money::new(dec!(1)).is_positive());
        assert!(Money::new(dec!(-1)).is_negative());
        assert!(Money::ZERO.is_zero());
        assert_eq!(Money::new(dec!(-4.5)).abs(), Money::new(dec!(4.5)));
    }

    #[test]
    fn money_arithmetic() {
        let a = Money::new(dec!(100));
        let b = Money::new(dec!(30.25));
        assert_eq!(a + b, Money::new(dec!(130.25)));
        assert_eq!(a - b, Money::new(dec!(69.75)));
        assert_eq!(-a, Money::new(dec!(-100)));
        assert_eq!(a * dec!(2), Money::new(dec!(200)));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::new(dec!(130.25)));
    }

    #[test]
    fn money_arithmetic_saturates() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max + max, max);
        assert_eq!(-max - max, -max);
        assert_eq!(max * dec!(2), max);

        let mut total = max;
        total += Money::new(dec!(1));
        assert_eq!(total, max);
    }

    #[test]
    fn money_sum() {
        let values = [Money::new(dec!(1.10)), Money::new(dec!(2.20))];
        let total: Money = values.iter().sum();
        assert_eq!(total, Money::new(dec!(3.30)));
        let empty: Money = std::iter::empty::<Money>().sum();
        assert_eq!(empty, Money::ZERO);
    }

    #[test]
    fn money_ratio_and_average() {
        let pnl = Money::new(dec!(-55.50));
        assert_eq!(pnl.ratio_to(Money::ZERO), None);
        assert_eq!(
            pnl.ratio_to(Money::new(dec!(31))).map(|r| r.round_dp(4)),
            Some(dec!(-1.7903))
        );
        assert_eq!(Money::new(dec!(300)).average_over(2), Money::new(dec!(150)));
        assert_eq!(Money::new(dec!(300)).average_over(0), Money::ZERO);
    }

    #[test]
    fn money_serializes_as_string() {
        let json = serde_json::to_string(&Money::new(dec!(495.00))).unwrap();
        assert_eq!(json, "\"495.00\"");
        let back: Money = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(back, Money::new(dec!(12.5)));
    }
}
