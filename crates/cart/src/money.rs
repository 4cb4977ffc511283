//! Integer money in minor currency units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// An amount in cents.
///
/// Percentages are applied with [`Money::percent`], which rounds half away
/// from zero to the nearest cent.
///
/// `+`, `-`, `*` and `sum` saturate at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// From cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// From a decimal amount (`4.5` → 450 cents).
    #[inline]
    pub fn from_major(amount: f64) -> Self {
        if amount.is_finite() {
            Money((amount * 100.0).round() as i64)
        } else {
            Money::ZERO
        }
    }

    /// Cents.
    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Decimal amount.
    #[inline]
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `pct` percent of this amount, rounded to the nearest cent.
    #[inline]
    pub fn percent(self, pct: f64) -> Money {
        self.scale(pct / 100.0)
    }

    /// This amount times `factor`, rounded to the nearest cent.
    #[inline]
    pub fn scale(self, factor: f64) -> Money {
        Money((self.0 as f64 * factor).round() as i64)
    }

    /// Floors negative amounts at zero.
    #[inline]
    pub fn non_negative(self) -> Money {
        Money(self.0.max(0))
    }
}

impl fmt::Display for Money {
    /// `$4.50`, `-$1.25`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, qty: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(qty)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(450).to_string(), "$4.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(-125).to_string(), "-$1.25");
        assert_eq!(Money::from_cents(123_456).to_string(), "$1234.56");
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(4.5).cents(), 450);
        assert_eq!(Money::from_major(19.99).cents(), 1999);
        assert_eq!(Money::from_major(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_percent_rounds_to_cent() {
        assert_eq!(Money::from_cents(1000).percent(10.0).cents(), 100);
        assert_eq!(Money::from_cents(1005).percent(10.0).cents(), 101);
        assert_eq!(Money::from_cents(2300).scale(0.07).cents(), 161);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(450);
        assert_eq!(a * 3, Money::from_cents(1350));
        assert_eq!(a - Money::from_cents(500), Money::from_cents(-50));
        assert_eq!((a - Money::from_cents(500)).non_negative(), Money::ZERO);
        let total: Money = [a, a, Money::from_cents(100)].into_iter().sum();
        assert_eq!(total.cents(), 1000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max * 2, max);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
        let total: Money = [max, max].into_iter().sum();
        assert_eq!(total, max);
    }
}
