//! The bundle pricing engine.
//!
//! Given the full ordered cart, computes an adjusted unit price and discount
//! amount for every line. Two rules exist:
//!
//! 1. **Phone-case pair**: with two or more phone-case units in the cart, the
//!    second unit overall (in cart insertion order) is €10 off.
//! 2. **Phone-case + shirt**: with at least one phone case and one shirt-like
//!    item, the first shirt-like line gets one unit €5 off.
//!
//! A single line receives at most one bundle type, with the pair bundle
//! taking precedence. The shirt bundle still fires when a pair discount
//! landed on a *different* line; the precedence guard is per-item only.
//!
//! The engine is a pure function: it never mutates its input, carries no
//! state between calls, and is total over any well-shaped cart.

use memleket_core::{CartLineItem, Price, ProductType};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;

/// Which bundle rule discounted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleType {
    /// Phone-case pair bundle.
    #[serde(rename = "phonecase-phonecase")]
    CasePair,
    /// Phone-case + shirt bundle.
    #[serde(rename = "phonecase-shirt")]
    CaseShirt,
}

/// Per-line pricing result. Derived fresh on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedLine {
    /// Unit price before bundle adjustment.
    pub original_price: Price,
    /// Adjusted unit price: the discount weighted across the line's units and
    /// rounded, never negative.
    pub adjusted_price: Price,
    /// Total amount removed from this line.
    pub bundle_discount: Price,
    /// The rule that fired, if any.
    pub bundle_type: Option<BundleType>,
}

impl AdjustedLine {
    const fn untouched(price: Price) -> Self {
        Self {
            original_price: price,
            adjusted_price: price,
            bundle_discount: Price::ZERO,
            bundle_type: None,
        }
    }
}

/// Evaluate both bundle rules over the ordered cart.
///
/// Returns one [`AdjustedLine`] per input line, in the same order.
#[must_use]
pub fn price_bundles(lines: &[CartLineItem], config: &PricingConfig) -> Vec<AdjustedLine> {
    let case_units: u32 = lines
        .iter()
        .filter(|l| l.product_type == ProductType::Phonecase)
        .map(|l| l.quantity)
        .sum();
    let has_case = case_units >= 1;
    let has_shirt = lines.iter().any(|l| l.product_type.is_shirt_like());

    let mut cases_before: u32 = 0;
    let mut shirts_before: u32 = 0;

    lines
        .iter()
        .map(|line| {
            if line.product_type == ProductType::Phonecase {
                let count_before = cases_before;
                cases_before += line.quantity;
                // The pair bundle discounts exactly one unit: the 2nd
                // phone-case unit in cart order.
                let eligible = case_units >= 2
                    && (count_before == 1 || (count_before == 0 && line.quantity >= 2));
                if eligible {
                    return adjust(line, 1, config.case_pair_discount, BundleType::CasePair);
                }
                AdjustedLine::untouched(line.price)
            } else if line.product_type.is_shirt_like() {
                let count_before = shirts_before;
                shirts_before += line.quantity;
                if has_case && has_shirt && count_before == 0 {
                    return adjust(line, 1, config.case_shirt_discount, BundleType::CaseShirt);
                }
                AdjustedLine::untouched(line.price)
            } else {
                AdjustedLine::untouched(line.price)
            }
        })
        .collect()
}

/// Weighted-average the per-unit discount into the line's unit price.
///
/// `adjusted = round((discounted*(price - rate) + full*price) / quantity)`,
/// rounded half-up like the storefront display layer, clamped at zero.
fn adjust(
    line: &CartLineItem,
    discounted_units: u32,
    rate: Price,
    bundle_type: BundleType,
) -> AdjustedLine {
    let quantity = i64::from(line.quantity.max(1));
    let discounted = i64::from(discounted_units);
    let full = quantity - discounted;
    let unit = line.price.cents();
    let reduced = unit - rate.cents();

    let averaged = round_half_up(discounted * reduced + full * unit, quantity);
    AdjustedLine {
        original_price: line.price,
        adjusted_price: Price::from_cents(averaged.max(0)),
        bundle_discount: rate.times(discounted_units),
        bundle_type: Some(bundle_type),
    }
}

/// `round(n / d)` with ties toward positive infinity, for `d > 0`.
const fn round_half_up(n: i64, d: i64) -> i64 {
    (2 * n + d).div_euclid(2 * d)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn line(slug: &str, product_type: ProductType, price_cents: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            slug: slug.to_string(),
            product_type,
            color: "black".to_string(),
            size: product_type.is_shirt_like().then(|| "M".to_string()),
            price: Price::from_cents(price_cents),
            quantity,
            personalization: None,
            gift_package: None,
            phone_model: (product_type == ProductType::Phonecase)
                .then(|| "iPhone 15".to_string()),
            custom_phone_model: None,
        }
    }

    fn case(slug: &str, quantity: u32) -> CartLineItem {
        line(slug, ProductType::Phonecase, 4000, quantity)
    }

    fn shirt(slug: &str, quantity: u32) -> CartLineItem {
        line(slug, ProductType::Tshirt, 3400, quantity)
    }

    #[test]
    fn test_round_half_up_matches_display_rounding() {
        assert_eq!(round_half_up(7, 2), 4);
        assert_eq!(round_half_up(6, 2), 3);
        assert_eq!(round_half_up(-7, 2), -3);
        assert_eq!(round_half_up(100, 3), 33);
    }

    #[test]
    fn test_single_case_gets_no_pair_discount() {
        let cart = [case("istanbul", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[0], AdjustedLine::untouched(Price::from_cents(4000)));
    }

    #[test]
    fn test_two_single_cases_second_discounted() {
        let cart = [case("istanbul", 1), case("ankara", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());

        assert_eq!(priced[0].bundle_type, None);
        assert_eq!(priced[0].adjusted_price, Price::from_cents(4000));

        assert_eq!(priced[1].bundle_type, Some(BundleType::CasePair));
        assert_eq!(priced[1].bundle_discount, Price::from_cents(1000));
        assert_eq!(priced[1].adjusted_price, Price::from_cents(3000));
    }

    #[test]
    fn test_one_line_quantity_two_averages_one_discounted_unit() {
        let cart = [case("istanbul", 2)];
        let priced = price_bundles(&cart, &PricingConfig::default());

        // round((1*(4000-1000) + 1*4000) / 2) = 3500
        assert_eq!(priced[0].bundle_type, Some(BundleType::CasePair));
        assert_eq!(priced[0].adjusted_price, Price::from_cents(3500));
        assert_eq!(priced[0].bundle_discount, Price::from_cents(1000));
    }

    #[test]
    fn test_averaging_rounds_half_up_on_odd_quantities() {
        // 3 units, one discounted: round((2990 + 2*3990)/3) = round(3656.67) = 3657
        let cart = [line("rize", ProductType::Phonecase, 3990, 3)];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[0].adjusted_price, Price::from_cents(3657));
    }

    #[test]
    fn test_third_case_line_gets_nothing() {
        let cart = [case("istanbul", 1), case("ankara", 1), case("izmir", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[1].bundle_type, Some(BundleType::CasePair));
        assert_eq!(priced[2].bundle_type, None);
    }

    #[test]
    fn test_first_line_quantity_one_supplies_first_unit_only() {
        // First line qty 1 never discounts itself; the second line holds the
        // 2nd unit overall.
        let cart = [case("istanbul", 1), case("ankara", 3)];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[0].bundle_type, None);
        assert_eq!(priced[1].bundle_type, Some(BundleType::CasePair));
        // round((3000 + 2*4000)/3) = 3667
        assert_eq!(priced[1].adjusted_price, Price::from_cents(3667));
    }

    #[test]
    fn test_shirt_bundle_first_shirt_only() {
        let cart = [case("istanbul", 1), shirt("ankara", 1), shirt("izmir", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());

        assert_eq!(priced[1].bundle_type, Some(BundleType::CaseShirt));
        assert_eq!(priced[1].adjusted_price, Price::from_cents(2900));
        assert_eq!(priced[1].bundle_discount, Price::from_cents(500));
        assert_eq!(priced[2].bundle_type, None);
    }

    #[test]
    fn test_shirt_bundle_requires_a_phone_case() {
        let cart = [shirt("istanbul", 1), shirt("ankara", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert!(priced.iter().all(|p| p.bundle_type.is_none()));
    }

    #[test]
    fn test_hoodie_and_sweater_are_shirt_like() {
        let cart = [
            case("istanbul", 1),
            line("ankara", ProductType::Hoodie, 5400, 1),
        ];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[1].bundle_type, Some(BundleType::CaseShirt));
        assert_eq!(priced[1].adjusted_price, Price::from_cents(4900));
    }

    #[test]
    fn test_shirt_bundle_fires_alongside_pair_bundle() {
        // The pair discount landing on case B does not suppress the shirt
        // bundle on the tshirt; precedence is per-item only.
        let cart = [case("adana", 1), case("bursa", 1), shirt("istanbul", 1)];
        let priced = price_bundles(&cart, &PricingConfig::default());

        assert_eq!(priced[0].bundle_type, None);

        assert_eq!(priced[1].bundle_type, Some(BundleType::CasePair));
        assert_eq!(priced[1].bundle_discount, Price::from_cents(1000));
        assert_eq!(priced[1].adjusted_price, Price::from_cents(3000));

        assert_eq!(priced[2].bundle_type, Some(BundleType::CaseShirt));
        assert_eq!(priced[2].adjusted_price, Price::from_cents(2900));
    }

    #[test]
    fn test_adjusted_price_clamped_at_zero() {
        let cart = [
            line("istanbul", ProductType::Phonecase, 0, 1),
            line("ankara", ProductType::Phonecase, 0, 1),
        ];
        let priced = price_bundles(&cart, &PricingConfig::default());
        assert_eq!(priced[1].adjusted_price, Price::ZERO);
    }

    #[test]
    fn test_idempotent_over_unchanged_cart() {
        let cart = [case("istanbul", 2), shirt("rize", 3), case("izmir", 1)];
        let config = PricingConfig::default();
        assert_eq!(price_bundles(&cart, &config), price_bundles(&cart, &config));
    }

    #[test]
    fn test_empty_cart() {
        assert!(price_bundles(&[], &PricingConfig::default()).is_empty());
    }
}
