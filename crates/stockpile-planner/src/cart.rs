//! The caller-owned shopping cart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stockpile_common::ItemId;

/// Desired output items and their quantities.
///
/// Quantities are clamped to at least 1 at every mutation, so an entry that
/// exists always asks for something. The resolver reads the cart and never
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: HashMap<ItemId, u64>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds `qty` of an item (minimum 1), accumulating with any existing
    /// entry. Saturates instead of overflowing.
    pub fn add(&mut self, item: ItemId, qty: u64) {
        let qty = qty.max(1);
        let entry = self.entries.entry(item).or_insert(0);
        *entry = entry.saturating_add(qty);
    }

    /// Sets the exact quantity for an item, clamped to at least 1.
    pub fn set_quantity(&mut self, item: ItemId, qty: u64) {
        self.entries.insert(item, qty.max(1));
    }

    /// Removes an item, returning its quantity when it was present.
    pub fn remove(&mut self, item: ItemId) -> Option<u64> {
        self.entries.remove(&item)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity requested for an item, 0 when absent.
    #[must_use]
    pub fn quantity(&self, item: ItemId) -> u64 {
        self.entries.get(&item).copied().unwrap_or(0)
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(item, quantity)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.entries.iter().map(|(item, qty)| (*item, *qty))
    }
}

impl FromIterator<(ItemId, u64)> for Cart {
    fn from_iter<T: IntoIterator<Item = (ItemId, u64)>>(iter: T) -> Self {
        let mut cart = Self::new();
        for (item, qty) in iter {
            cart.set_quantity(item, qty);
        }
        cart
    }
}
