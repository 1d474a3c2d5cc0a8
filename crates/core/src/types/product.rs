//! Product configuration types.
//!
//! A cart line is identified by its full configuration: product, color, size,
//! personalization, and gift packaging. These types derive `Eq` and `Hash` so
//! line identity is explicit structural equality rather than comparing
//! serialized blobs.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// The kinds of products sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Tshirt,
    Hoodie,
    Sweater,
    Phonecase,
}

impl ProductType {
    /// Whether this product counts as a "shirt" for the phone-case + shirt
    /// bundle (t-shirts, hoodies, and sweaters all qualify).
    #[must_use]
    pub const fn is_shirt_like(self) -> bool {
        matches!(self, Self::Tshirt | Self::Hoodie | Self::Sweater)
    }
}

/// How a personalization is applied to a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalizationMethod {
    Embroidery,
    Print,
}

/// A customer-supplied personalization on a garment.
///
/// The surcharge is baked into the line's unit price by the product page;
/// `cost` is kept for display and order records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Personalization {
    pub method: PersonalizationMethod,
    pub text: String,
    pub placement: String,
    pub font: String,
    pub color: String,
    pub cost: Price,
}

/// Optional gift packaging for a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GiftPackage {
    pub included: bool,
    pub cost: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
