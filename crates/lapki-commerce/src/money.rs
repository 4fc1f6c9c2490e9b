//! Money type for representing prices.
//!
//! The shop prices everything in whole rubles, so amounts are plain integers
//! with no minor unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency sign used when rendering amounts.
pub const RUBLE_SIGN: &str = "\u{20bd}";

/// An amount of money in whole rubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value from whole rubles.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero rubles.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole rubles.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Format as a display string (e.g., "450 ₽").
    pub fn display(&self) -> String {
        format!("{} {}", self.0, RUBLE_SIGN)
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(450).display(), "450 \u{20bd}");
        assert_eq!(format!("{}", Money::zero()), "0 \u{20bd}");
    }

    #[test]
    fn test_money_addition() {
        let total = Money::new(450) + Money::new(320);
        assert_eq!(total.amount(), 770);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::new(450) * 2).amount(), 900);
        assert_eq!(Money::new(450).checked_mul(3), Some(Money::new(1350)));
        assert_eq!(Money::new(i64::MAX).checked_mul(2), None);
    }

    #[test]
    fn test_money_sum() {
        let prices = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(prices.iter().copied().sum::<Money>(), Money::new(400));
        assert_eq!(Money::try_sum(prices), Some(Money::new(400)));
        assert_eq!(Money::try_sum([Money::new(i64::MAX), Money::new(1)]), None);
    }
}
