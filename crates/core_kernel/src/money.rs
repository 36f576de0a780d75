//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Amounts are kept in the system's single settlement currency and stored
//! with 2 decimal places.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// A monetary amount in the settlement currency
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Construction rounds to 2 decimal places using banker's rounding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounded to 2 decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven))
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Multiplies by a scalar factor, re-rounding the result
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Represents a percentage rate (e.g., a premium surcharge rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.20 for 20%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.20 for 20%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 20.0 for 20%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.value * dec!(100)).round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_two_places() {
        let m = Money::new(dec!(100.505));
        assert_eq!(m.amount(), dec!(100.50));

        let m = Money::new(dec!(100.515));
        assert_eq!(m.amount(), dec!(100.52));
    }

    #[test]
    fn money_from_minor_units() {
        assert_eq!(Money::from_minor(10050).amount(), dec!(100.50));
    }

    #[test]
    fn money_arithmetic() {
        let a = Money::new(dec!(3000.00));
        let b = Money::new(dec!(600.00));

        assert_eq!((a + b).amount(), dec!(3600.00));
        assert_eq!((a - b).amount(), dec!(2400.00));
        assert_eq!((-b).amount(), dec!(-600.00));
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::new(dec!(4050)).to_string(), "$4050.00");
    }

    #[test]
    fn rate_application() {
        let surcharge = Rate::from_percentage(dec!(20));
        let base = Money::new(dec!(3000.00));

        assert_eq!(surcharge.apply(&base).amount(), dec!(600.00));
    }

    #[test]
    fn money_sum() {
        let total: Money = vec![Money::from_minor(150), Money::from_minor(250)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), dec!(4.00));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);
            let mc = Money::from_minor(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn rate_of_zero_is_zero(amount in -1_000_000i64..1_000_000i64) {
            let rate = Rate::new(Decimal::ZERO);
            prop_assert!(rate.apply(&Money::from_minor(amount)).is_zero());
        }
    }
}
