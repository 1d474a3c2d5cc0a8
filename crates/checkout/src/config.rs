//! Pricing configuration.
//!
//! Discount rates and thresholds are data, not code: the engine takes a
//! [`PricingConfig`] so tests can price against explicit values and a future
//! campaign can tweak a rate without touching the rules. [`Default`] carries
//! the production values.

use memleket_core::Price;
use serde::{Deserialize, Serialize};

/// Discount rates and thresholds used by the pricing core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Per-unit discount for the phone-case pair bundle.
    pub case_pair_discount: Price,
    /// Per-unit discount for the phone-case + shirt bundle.
    pub case_shirt_discount: Price,
    /// Flat family discount at exactly 2 memleket items.
    pub family_pair_discount: Price,
    /// Flat family discount at 3 or more memleket items.
    pub family_bulk_discount: Price,
    /// Order total (post-discount) at which shipping becomes free.
    pub free_shipping_threshold: Price,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            case_pair_discount: Price::from_euros(10),
            case_shirt_discount: Price::from_euros(5),
            family_pair_discount: Price::from_euros(5),
            family_bulk_discount: Price::from_euros(10),
            free_shipping_threshold: Price::from_euros(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_production_values() {
        let config = PricingConfig::default();
        assert_eq!(config.case_pair_discount, Price::from_cents(1000));
        assert_eq!(config.case_shirt_discount, Price::from_cents(500));
        assert_eq!(config.family_pair_discount, Price::from_cents(500));
        assert_eq!(config.family_bulk_discount, Price::from_cents(1000));
        assert_eq!(config.free_shipping_threshold, Price::from_cents(10000));
    }
}
