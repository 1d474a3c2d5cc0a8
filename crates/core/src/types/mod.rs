//! Core types for the Memleket shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod country;
pub mod line_item;
pub mod price;
pub mod product;

pub use country::{CountryCode, CountryCodeError};
pub use line_item::{CartLineItem, LineKey};
pub use price::Price;
pub use product::*;
