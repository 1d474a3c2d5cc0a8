//! Checkout quote assembly.
//!
//! Folds the pricing core's outputs into the request body sent to the
//! external payment-session endpoint: adjusted items, subtotal, combined
//! discount, post-discount total, and shipping. The quote is a plain value;
//! sending it anywhere is the caller's business.

use chrono::Utc;
use memleket_core::{CartLineItem, CountryCode, CountryCodeError, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::bundle::{self, BundleType};
use crate::config::PricingConfig;
use crate::shipping::{self, DeliveryWindow};

/// Errors rejecting a quote before it reaches the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The cart holds no lines.
    #[error("cannot quote an empty cart")]
    EmptyCart,

    /// The destination is not in the shipping rate table.
    #[error(transparent)]
    UnsupportedCountry(#[from] CountryCodeError),
}

/// One priced line in the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    #[serde(flatten)]
    pub line: CartLineItem,
    /// Unit price after bundle adjustment.
    pub adjusted_price: Price,
    /// Total bundle discount on this line.
    pub bundle_discount: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_type: Option<BundleType>,
}

/// The checkout request body, as the payment-session endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub items: Vec<QuoteItem>,
    pub shipping_country: CountryCode,
    /// Sum of `price * quantity`, before any discount.
    pub items_subtotal: Price,
    /// Subtotal minus `discount`.
    pub items_total: Price,
    /// Combined bundle and family discount.
    pub discount: Price,
    pub shipping_cost: Price,
    pub estimated_delivery: DeliveryWindow,
}

/// Price the cart and assemble the checkout request body.
///
/// `country` is the raw country string from the shipping selector.
///
/// # Errors
///
/// [`QuoteError::EmptyCart`] for a cart with no lines,
/// [`QuoteError::UnsupportedCountry`] for destinations outside the rate table.
pub fn build_quote(
    lines: &[CartLineItem],
    country: &str,
    config: &PricingConfig,
) -> Result<CheckoutQuote, QuoteError> {
    if lines.is_empty() {
        warn!("rejected quote for empty cart");
        return Err(QuoteError::EmptyCart);
    }
    let shipping_country: CountryCode = country.parse().inspect_err(|e: &CountryCodeError| {
        warn!(country = %e.0, "rejected quote for unsupported destination");
    })?;

    let priced = bundle::price_bundles(lines, config);
    let items: Vec<QuoteItem> = lines
        .iter()
        .zip(priced)
        .map(|(line, adjusted)| QuoteItem {
            line: line.clone(),
            adjusted_price: adjusted.adjusted_price,
            bundle_discount: adjusted.bundle_discount,
            bundle_type: adjusted.bundle_type,
        })
        .collect();

    let items_subtotal: Price = lines.iter().map(CartLineItem::line_total).sum();
    let bundle_discount: Price = items.iter().map(|i| i.bundle_discount).sum();
    let discount = bundle_discount + crate::family::family_discount(lines, config);
    let items_total = items_subtotal.saturating_sub(discount);
    let shipping_cost = shipping::shipping_cost(shipping_country, items_total, config);

    Ok(CheckoutQuote {
        items,
        shipping_country,
        items_subtotal,
        items_total,
        discount,
        shipping_cost,
        estimated_delivery: shipping::rate_for(shipping_country).delivery,
    })
}

/// Generate an order id for orders entered outside the payment provider.
///
/// Orders created through checkout use the provider's session id instead.
#[must_use]
pub fn manual_order_id() -> String {
    format!("manual_{}", Utc::now().timestamp_millis())
}
