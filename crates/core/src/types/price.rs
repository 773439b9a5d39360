//! Prices in whole Egyptian pounds.
//!
//! The shop prices everything in integer currency units, so no decimal
//! arithmetic is needed for line totals or the cart total. Arithmetic
//! saturates instead of overflowing.

use core::fmt;
use core::iter::Sum;
use core::num::ParseIntError;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label appended to amounts in customer-facing text.
pub const CURRENCY_LABEL: &str = "ج.م";

/// A non-negative amount in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from whole currency units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole currency units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format with the currency label (e.g. `"25 ج.م"`).
    #[must_use]
    pub fn display(self) -> String {
        format!("{} {CURRENCY_LABEL}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ParseIntError;

    /// Parse a whole amount, ignoring a trailing currency label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.trim().trim_end_matches(CURRENCY_LABEL).trim_end();
        amount.parse().map(Self)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times() {
        assert_eq!(Price::new(15).times(3), Price::new(45));
        assert_eq!(Price::new(15).times(0), Price::ZERO);
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
        assert_eq!(Price::new(u64::MAX) + Price::new(1), Price::new(u64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Price = [10, 20, 30].into_iter().map(Price::new).sum();
        assert_eq!(total, Price::new(60));
    }

    #[test]
    fn test_display_with_label() {
        assert_eq!(Price::new(25).display(), "25 ج.م");
        assert_eq!(Price::new(25).to_string(), "25");
    }

    #[test]
    fn test_parse() {
        assert_eq!("75".parse::<Price>().unwrap(), Price::new(75));
        assert_eq!("75 ج.م".parse::<Price>().unwrap(), Price::new(75));
        assert!("-3".parse::<Price>().is_err());
        assert!("12.5".parse::<Price>().is_err());
    }

    #[test]
    fn test_serde_is_plain_number() {
        let json = serde_json::to_string(&Price::new(40)).unwrap();
        assert_eq!(json, "40");
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }
}
