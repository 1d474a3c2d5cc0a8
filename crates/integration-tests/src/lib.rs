//! End-to-end checkout scenarios for the Memleket shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p memleket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `bundle_scenarios` - Cross-rule bundle and family discount interactions
//! - `checkout_flow` - Cart mutations through quote assembly
//!
//! The helpers here build fully configured cart lines so scenario tests read
//! as product configurations, not struct literals.

#![cfg_attr(not(test), forbid(unsafe_code))]

use memleket_core::{CartLineItem, Price, ProductType};

/// A phone case line at the catalog price for its slug.
#[must_use]
pub fn phonecase(slug: &str, model: &str, quantity: u32) -> CartLineItem {
    CartLineItem {
        slug: slug.to_string(),
        product_type: ProductType::Phonecase,
        color: "black".to_string(),
        size: None,
        price: memleket_checkout::catalog::base_price(slug, ProductType::Phonecase),
        quantity,
        personalization: None,
        gift_package: None,
        phone_model: Some(model.to_string()),
        custom_phone_model: None,
    }
}

/// A t-shirt line at the catalog price for its slug.
#[must_use]
pub fn tshirt(slug: &str, size: &str, quantity: u32) -> CartLineItem {
    CartLineItem {
        slug: slug.to_string(),
        product_type: ProductType::Tshirt,
        color: "white".to_string(),
        size: Some(size.to_string()),
        price: memleket_checkout::catalog::base_price(slug, ProductType::Tshirt),
        quantity,
        personalization: None,
        gift_package: None,
        phone_model: None,
        custom_phone_model: None,
    }
}

/// A line at an explicit unit price, for scenarios that pin exact amounts.
#[must_use]
pub fn priced(mut line: CartLineItem, cents: i64) -> CartLineItem {
    line.price = Price::from_cents(cents);
    line
}
