//! The in-memory cart store.
//!
//! Owns the canonical ordered cart and exposes the derived aggregates the
//! storefront reads on every render. Insertion order is significant: it is
//! the tie-break order for bundle-discount assignment, so merging and removal
//! always preserve it.
//!
//! The store is an explicit value, not a global; tests and request contexts
//! each hold their own instance.

use memleket_core::{CartLineItem, LineKey, Price};
use tracing::debug;

use crate::config::PricingConfig;
use crate::family;

/// Ordered cart lines plus the transient last-added marker used for UI
/// feedback.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLineItem>,
    last_added: Option<LineKey>,
    config: PricingConfig,
}

impl CartStore {
    /// An empty cart with production pricing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cart pricing against an explicit configuration.
    #[must_use]
    pub fn with_config(config: PricingConfig) -> Self {
        Self {
            lines: Vec::new(),
            last_added: None,
            config,
        }
    }

    /// The ordered cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// The pricing configuration this cart evaluates against.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Key of the most recently added line, for transient UI feedback.
    #[must_use]
    pub const fn last_added(&self) -> Option<&LineKey> {
        self.last_added.as_ref()
    }

    /// Add an item, merging quantities into an existing line with the same
    /// identity key or appending a new line.
    ///
    /// Items with quantity 0 are ignored; a line never enters the cart below
    /// quantity 1.
    pub fn add_item(&mut self, item: CartLineItem) {
        if item.quantity == 0 {
            return;
        }
        let key = item.key();
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key() == key) {
            existing.quantity += item.quantity;
            debug!(slug = %item.slug, quantity = existing.quantity, "merged cart line");
        } else {
            debug!(slug = %item.slug, quantity = item.quantity, "added cart line");
            self.lines.push(item);
        }
        self.last_added = Some(key);
    }

    /// Set a line's quantity; 0 removes the line entirely.
    ///
    /// No-op when no line matches the key.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) {
        if quantity == 0 {
            self.remove_item(key);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.key() == key) {
            line.quantity = quantity;
            debug!(slug = %key.slug, quantity, "updated cart line quantity");
        }
    }

    /// Remove a line unconditionally.
    pub fn remove_item(&mut self, key: &LineKey) {
        self.lines.retain(|l| &l.key() != key);
        if self.last_added.as_ref() == Some(key) {
            self.last_added = None;
        }
        debug!(slug = %key.slug, "removed cart line");
    }

    /// Empty the cart. Invoked after a successful payment.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "cleared cart");
        self.lines.clear();
        self.last_added = None;
    }

    /// Sum of `price * quantity` over all lines, before any discount.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Subtotal minus the flat memleket family discount.
    ///
    /// Bundle discounts are *not* subtracted here; they are computed at
    /// checkout time and passed to the payment request as a separate field.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal().saturating_sub(self.memleket_savings())
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The flat memleket family discount, as a display figure.
    #[must_use]
    pub fn memleket_savings(&self) -> Price {
        family::family_discount(&self.lines, &self.config)
    }
}
