//! Cart line items and their identity keys.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;
use crate::types::product::{GiftPackage, Personalization, ProductType};

/// One configured product selection in the cart.
///
/// Two lines with the same [`LineKey`] are the same line; adding one to the
/// cart again merges quantities instead of appending. `price` is the unit
/// price before any bundle adjustment, but already includes personalization
/// and gift surcharges applied by the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product slug (e.g. `"istanbul"`).
    pub slug: String,
    pub product_type: ProductType,
    pub color: String,
    /// Garment size; phone cases carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Unit price in cents, surcharges included, bundle adjustment excluded.
    pub price: Price,
    /// Always >= 1 while the line is present; 0 removes the line.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_package: Option<GiftPackage>,
    /// Phone model for cases (e.g. `"iPhone 15 Pro"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_model: Option<String>,
    /// Free-text model when the customer's phone is not in the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_phone_model: Option<String>,
}

impl CartLineItem {
    /// The identity key for this line.
    ///
    /// Every configuration field participates; quantity does not.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            slug: self.slug.clone(),
            product_type: self.product_type,
            color: self.color.clone(),
            size: self.size.clone(),
            personalization: self.personalization.clone(),
            gift_package: self.gift_package.clone(),
            phone_model: self.phone_model.clone(),
            custom_phone_model: self.custom_phone_model.clone(),
        }
    }

    /// `price * quantity` for this line, before any discount.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Structural identity of a cart line: the full product configuration minus
/// quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    pub slug: String,
    pub product_type: ProductType,
    pub color: String,
    pub size: Option<String>,
    pub personalization: Option<Personalization>,
    pub gift_package: Option<GiftPackage>,
    pub phone_model: Option<String>,
    pub custom_phone_model: Option<String>,
}
