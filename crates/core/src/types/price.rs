//! Type-safe price representation in integer cents.
//!
//! All money in the shop is euro-denominated and carried as integer cents to
//! keep cart arithmetic exact. [`rust_decimal::Decimal`] is used only at the
//! display boundary via [`Price::euros`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A euro amount in integer cents.
///
/// Serializes transparently as the raw cent value, matching the wire shape of
/// the checkout request body.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Create a price from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a price from whole euros.
    #[must_use]
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// The raw cent value.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a decimal euro figure (e.g. `34.00`).
    #[must_use]
    pub fn euros(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract another price, clamping the result at zero.
    ///
    /// Cart totals never go negative no matter how many discounts stack.
    #[must_use]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        let cents = self.0 - other.0;
        if cents < 0 { Self::ZERO } else { Self(cents) }
    }

    /// Multiply by a unit count (e.g. line quantity).
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "€{}", self.euros())
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}
