//! Static catalog tables.
//!
//! Base prices per product type, per-slug overrides, memleket collection
//! membership, and the surcharge tables the product page uses when baking
//! personalization and gift costs into a line's unit price. These are
//! configuration data consumed by the pricing core, not computed logic.

use memleket_core::{PersonalizationMethod, Price, ProductType};

/// Slugs belonging to the memleket (hometown) collection.
///
/// Aggregate quantity across these slugs drives the family discount.
const MEMLEKET_SLUGS: &[&str] = &[
    "istanbul",
    "ankara",
    "izmir",
    "trabzon",
    "rize",
    "adana",
    "antalya",
    "bursa",
    "eskisehir",
    "gaziantep",
    "kayseri",
    "samsun",
];

/// Per-product price overrides in cents, keyed by slug and type.
const PRICE_OVERRIDES: &[(&str, ProductType, i64)] = &[
    ("trabzon", ProductType::Tshirt, 3600),
    ("rize", ProductType::Tshirt, 3600),
    ("trabzon", ProductType::Hoodie, 5600),
    ("kayseri", ProductType::Sweater, 5200),
];

/// Cost of gift packaging per line.
pub const GIFT_PACKAGE_COST: Price = Price::from_cents(500);

/// Whether a product slug belongs to the memleket collection.
#[must_use]
pub fn is_memleket(slug: &str) -> bool {
    MEMLEKET_SLUGS.contains(&slug)
}

/// Default unit price for a product type.
#[must_use]
pub const fn default_price(product_type: ProductType) -> Price {
    match product_type {
        ProductType::Tshirt => Price::from_cents(3400),
        ProductType::Hoodie => Price::from_cents(5400),
        ProductType::Sweater => Price::from_cents(4900),
        ProductType::Phonecase => Price::from_cents(4000),
    }
}

/// Base unit price for a slug, falling back to the type default when no
/// override exists.
#[must_use]
pub fn base_price(slug: &str, product_type: ProductType) -> Price {
    PRICE_OVERRIDES
        .iter()
        .find(|(s, t, _)| *s == slug && *t == product_type)
        .map_or_else(
            || default_price(product_type),
            |&(_, _, cents)| Price::from_cents(cents),
        )
}

/// Surcharge for a personalization method.
#[must_use]
pub const fn personalization_cost(method: PersonalizationMethod) -> Price {
    match method {
        PersonalizationMethod::Embroidery => Price::from_cents(800),
        PersonalizationMethod::Print => Price::from_cents(500),
    }
}

/// The unit price the product page bakes into a line: base price plus any
/// personalization and gift surcharges.
#[must_use]
pub fn unit_price(
    slug: &str,
    product_type: ProductType,
    personalization: Option<PersonalizationMethod>,
    gift_package: bool,
) -> Price {
    let mut price = base_price(slug, product_type);
    if let Some(method) = personalization {
        price += personalization_cost(method);
    }
    if gift_package {
        price += GIFT_PACKAGE_COST;
    }
    price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memleket_membership() {
        assert!(is_memleket("istanbul"));
        assert!(is_memleket("rize"));
        assert!(!is_memleket("plain-logo"));
    }

    #[test]
    fn test_base_price_override_and_fallback() {
        assert_eq!(
            base_price("trabzon", ProductType::Tshirt),
            Price::from_cents(3600)
        );
        assert_eq!(
            base_price("plain-logo", ProductType::Tshirt),
            Price::from_cents(3400)
        );
        assert_eq!(
            base_price("plain-logo", ProductType::Phonecase),
            Price::from_cents(4000)
        );
    }

    #[test]
    fn test_unit_price_bakes_surcharges() {
        let price = unit_price(
            "istanbul",
            ProductType::Tshirt,
            Some(PersonalizationMethod::Embroidery),
            true,
        );
        assert_eq!(price, Price::from_cents(3400 + 800 + 500));
    }
}
