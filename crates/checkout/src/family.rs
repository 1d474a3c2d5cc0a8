//! The memleket family quantity discount.
//!
//! A flat, cart-level reduction driven by the aggregate quantity of
//! memleket-collection items: nothing below 2 items, €5 at exactly 2, €10 at
//! 3 or more. Independent of the bundle engine; subtracted once from the cart
//! total, and attributable to a single line for display purposes.

use memleket_core::{CartLineItem, Price};

use crate::catalog;
use crate::config::PricingConfig;

/// Total quantity of memleket-collection items in the cart.
#[must_use]
pub fn memleket_quantity(lines: &[CartLineItem]) -> u32 {
    lines
        .iter()
        .filter(|l| catalog::is_memleket(&l.slug))
        .map(|l| l.quantity)
        .sum()
}

/// The flat family discount for the cart.
#[must_use]
pub fn family_discount(lines: &[CartLineItem], config: &PricingConfig) -> Price {
    match memleket_quantity(lines) {
        0 | 1 => Price::ZERO,
        2 => config.family_pair_discount,
        _ => config.family_bulk_discount,
    }
}

/// Attribute the flat discount to lines for display.
///
/// Replays the bundle engine's tie-break: the first qualifying line in cart
/// order absorbs the whole discount; every other line shows zero.
#[must_use]
pub fn attribute_family_discount(lines: &[CartLineItem], config: &PricingConfig) -> Vec<Price> {
    let discount = family_discount(lines, config);
    let mut absorbed = false;
    lines
        .iter()
        .map(|l| {
            if !absorbed && !discount.is_zero() && catalog::is_memleket(&l.slug) {
                absorbed = true;
                discount
            } else {
                Price::ZERO
            }
        })
        .collect()
}
