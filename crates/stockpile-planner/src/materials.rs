//! Material resolution over the recipe graph.
//!
//! This module provides:
//! - [`MaterialTotals`], accumulated leaf requirements per item
//! - [`resolve_materials`], the depth-first bill-of-materials expansion with
//!   path-local cycle suppression

use std::collections::{HashMap, HashSet};

use stockpile_common::ItemId;
use tracing::trace;

use crate::cart::Cart;
use crate::catalog::RecipeCatalog;
use crate::craft_calc::crafts_needed;
use crate::settings::ResolveSettings;

// ============================================================================
// Totals
// ============================================================================

/// Accumulated material requirements keyed by item.
///
/// Zero amounts are never recorded, so every entry is something to gather.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialTotals {
    amounts: HashMap<ItemId, u64>,
}

impl MaterialTotals {
    /// Creates an empty total set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            amounts: HashMap::new(),
        }
    }

    /// Adds to an item's total, saturating. Zero amounts are ignored.
    pub fn add(&mut self, item: ItemId, amount: u64) {
        if amount == 0 {
            return;
        }
        let entry = self.amounts.entry(item).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Accumulated amount for an item, 0 when absent.
    #[must_use]
    pub fn amount(&self, item: ItemId) -> u64 {
        self.amounts.get(&item).copied().unwrap_or(0)
    }

    /// Number of distinct items with a non-zero total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true when nothing is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Iterates over `(item, amount)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.amounts.iter().map(|(item, amount)| (*item, *amount))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Expands every cart entry into leaf material totals.
///
/// A pure function of its inputs: the cart is read-only, results are
/// deterministic, and cyclic recipe data terminates because an item already
/// on the current expansion path is taken as a leaf for that occurrence. The
/// same item may still be expanded again on a different branch.
#[must_use]
pub fn resolve_materials(
    cart: &Cart,
    catalog: &RecipeCatalog,
    settings: ResolveSettings,
) -> MaterialTotals {
    let mut walk = Expansion::new(catalog, settings);
    for (item, qty) in cart.iter() {
        walk.expand(item, qty);
    }
    walk.totals
}

/// One in-flight expansion: catalog, settings, the visiting set for the
/// current path, and the running totals.
struct Expansion<'a> {
    catalog: &'a RecipeCatalog,
    settings: ResolveSettings,
    visiting: HashSet<ItemId>,
    totals: MaterialTotals,
}

impl<'a> Expansion<'a> {
    fn new(catalog: &'a RecipeCatalog, settings: ResolveSettings) -> Self {
        Self {
            catalog,
            settings,
            visiting: HashSet::new(),
            totals: MaterialTotals::new(),
        }
    }

    fn expand(&mut self, item: ItemId, desired: u64) {
        if desired == 0 {
            return;
        }
        let Some(recipe) = self.catalog.get(item) else {
            // Not craftable: the requested item is itself the material.
            self.totals.add(item, desired);
            return;
        };
        let crafts = crafts_needed(
            desired,
            recipe.output_amount,
            recipe.chance_percent,
            self.settings.account_for_chance,
        );
        trace!(item = item.raw(), desired, crafts, "expanding recipe");
        for material in &recipe.materials {
            let need = u64::from(material.amount).saturating_mul(crafts);
            if need == 0 {
                continue;
            }
            if !self.settings.recursive {
                self.totals.add(material.item, need);
                continue;
            }
            if self.visiting.contains(&material.item) {
                // Cycle on this path: take the item as-is instead of
                // recursing forever.
                self.totals.add(material.item, need);
                continue;
            }
            if self.catalog.contains(material.item) {
                self.visiting.insert(material.item);
                self.expand(material.item, need);
                self.visiting.remove(&material.item);
            } else {
                self.totals.add(material.item, need);
            }
        }
    }
}
