//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are unit amounts in the storefront's implied currency. The cart's
//! persisted snapshot stores them as plain JSON numbers, so `Price` is a
//! transparent wrapper rather than an amount/currency pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in the storefront's implied currency.
///
/// The amount is not validated; negative and zero prices pass through
/// unchanged, matching the upstream catalog contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an integer number of major units (e.g. dollars).
    #[must_use]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a price from a number of minor units (e.g. cents).
    #[must_use]
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity, yielding a line total.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Add another price, yielding a subtotal.
    #[must_use]
    pub fn plus(&self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// A zero price, the identity for subtotal folds.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_major(10).to_string(), "$10.00");
        assert_eq!(Price::from_minor(1999).to_string(), "$19.99");
    }

    #[test]
    fn test_times_and_plus() {
        let unit = Price::from_minor(250);
        assert_eq!(unit.times(3), Price::from_minor(750));
        assert_eq!(unit.plus(Price::from_minor(50)), Price::from_minor(300));
        assert_eq!(Price::zero().plus(unit), unit);
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price::from_minor(1050);
        let json = serde_json::to_string(&price).expect("serialize");
        // serde-float: a bare JSON number, not a quoted string
        assert!(!json.contains('"'), "price must serialize as a number: {json}");

        let back: Price = serde_json::from_str("10.5").expect("deserialize");
        assert_eq!(back, price);
    }
}
