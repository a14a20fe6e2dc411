//! Money type for representing prices.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues when summing a cart. On the wire a price is a plain JSON
//! number (`3`, `2.5`), which is how the catalog and persisted carts carry it.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Cents per whole unit.
const CENTS_PER_UNIT: u64 = 100;

/// Largest decimal amount accepted when parsing, well inside `u64` cents.
const MAX_DECIMAL: f64 = 1e12;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    amount_cents: u64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { amount_cents: 0 };

    /// Create a new Money value from cents.
    pub const fn from_cents(amount_cents: u64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, non-finite or absurdly large amounts.
    ///
    /// ```
    /// use billboard_commerce::Money;
    /// let price = Money::from_decimal(2.5).unwrap();
    /// assert_eq!(price.cents(), 250);
    /// assert!(Money::from_decimal(-1.0).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_DECIMAL {
            return None;
        }
        let cents = (amount * CENTS_PER_UNIT as f64).round() as u64;
        Some(Self::from_cents(cents))
    }

    /// Amount in cents.
    pub const fn cents(&self) -> u64 {
        self.amount_cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Add, clamping at the maximum representable amount.
    pub fn saturating_add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Always two fractional digits, no currency symbol (e.g. "5.75").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.amount_cents / CENTS_PER_UNIT,
            self.amount_cents % CENTS_PER_UNIT
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).ok_or_else(|| {
            de::Error::invalid_value(
                de::Unexpected::Float(amount),
                &"a non-negative finite price",
            )
        })
    }
}
