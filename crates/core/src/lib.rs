//! Memleket Core - Shared domain types.
//!
//! This crate provides the common types used across the Memleket shop
//! components:
//! - `checkout` - Cart state, bundle pricing, and quote assembly
//! - `integration-tests` - End-to-end checkout scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices in integer cents, product configuration, cart line
//!   items, and shipping country codes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
