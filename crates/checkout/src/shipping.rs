//! Shipping rates and delivery estimates per destination country.

use memleket_core::{CountryCode, Price};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;

/// Estimated delivery window in business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryWindow {
    pub min_days: u8,
    pub max_days: u8,
}

impl std::fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} business days", self.min_days, self.max_days)
    }
}

/// Shipping cost and delivery estimate for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    pub cost: Price,
    pub delivery: DeliveryWindow,
}

const fn rate(cents: i64, min_days: u8, max_days: u8) -> ShippingRate {
    ShippingRate {
        cost: Price::from_cents(cents),
        delivery: DeliveryWindow { min_days, max_days },
    }
}

/// The flat shipping rate for a destination, before the free-shipping
/// threshold is applied.
#[must_use]
pub const fn rate_for(country: CountryCode) -> ShippingRate {
    match country {
        CountryCode::TR => rate(300, 2, 4),
        CountryCode::DE => rate(500, 5, 7),
        CountryCode::AT => rate(550, 5, 7),
        CountryCode::NL | CountryCode::BE => rate(600, 6, 8),
        CountryCode::FR => rate(650, 6, 9),
        CountryCode::CH | CountryCode::GB => rate(900, 7, 10),
    }
}

/// Shipping cost for an order, free once the post-discount items total
/// reaches the configured threshold.
#[must_use]
pub fn shipping_cost(country: CountryCode, items_total: Price, config: &PricingConfig) -> Price {
    if items_total >= config.free_shipping_threshold {
        Price::ZERO
    } else {
        rate_for(country).cost
    }
}
