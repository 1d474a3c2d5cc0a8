//! Memleket Checkout - Cart state and order pricing.
//!
//! This crate owns the pricing core of the Memleket shop: the in-memory cart,
//! the bundle pricing engine, the memleket family discount, the static
//! catalog and shipping tables, and assembly of the checkout quote handed to
//! the external payment-session endpoint.
//!
//! All pricing is pure and synchronous. Nothing here performs I/O; payment,
//! persistence, and email live behind external services and are out of scope.
//!
//! # Modules
//!
//! - [`catalog`] - Per-slug price tables and memleket collection membership
//! - [`shipping`] - Per-country rates and the free-shipping threshold
//! - [`config`] - Discount rates and thresholds as injectable configuration
//! - [`bundle`] - The bundle pricing engine (pair and case+shirt bundles)
//! - [`family`] - The flat memleket family quantity discount
//! - [`cart`] - The cart store and its derived aggregates
//! - [`quote`] - Checkout quote assembly

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bundle;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod family;
pub mod quote;
pub mod shipping;

pub use bundle::{AdjustedLine, BundleType, price_bundles};
pub use cart::CartStore;
pub use config::PricingConfig;
pub use quote::{CheckoutQuote, QuoteError, build_quote};
