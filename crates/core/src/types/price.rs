//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog quotes every price in Bangladeshi taka, so `Price` carries a
//! bare decimal amount and formats with a fixed `৳` prefix. Decimal
//! arithmetic keeps cart totals exact: a total is always the literal sum of
//! `unit price x quantity`, with no float drift.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "৳";

/// A price in the shop's single display currency.
///
/// Serde-transparent, so it deserializes straight from the numeric (or
/// stringly numeric) `price` field the catalog API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply the unit price by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_symbol() {
        assert_eq!(Price::from(150).to_string(), "৳150");
    }

    #[test]
    fn test_times_is_exact() {
        let unit = Price::new(Decimal::new(1995, 2)); // 19.95
        assert_eq!(unit.times(3), Price::new(Decimal::new(5985, 2)));
    }

    #[test]
    fn test_sum_over_lines() {
        let total: Price = [Price::from(100), Price::from(50)].into_iter().sum();
        assert_eq!(total, Price::from(150));
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("150").unwrap();
        assert_eq!(price, Price::from(150));
    }

    #[test]
    fn test_deserializes_from_json_float() {
        let price: Price = serde_json::from_str("19.95").unwrap();
        assert_eq!(price, Price::new(Decimal::new(1995, 2)));
    }
}
