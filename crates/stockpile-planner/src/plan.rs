//! Craft-plan aggregation.
//!
//! This module provides:
//! - [`CraftPlan`], craft-action counts per output item plus total duration
//! - [`resolve_craft_plan`], the planning pass over the same traversal used
//!   for material resolution

use std::collections::{HashMap, HashSet};

use stockpile_common::ItemId;

use crate::cart::Cart;
use crate::catalog::RecipeCatalog;
use crate::craft_calc::crafts_needed;
use crate::settings::ResolveSettings;

/// Craft actions required per output item, with the summed duration.
///
/// Only craftable items appear, and only with positive counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CraftPlan {
    counts: HashMap<ItemId, u64>,
    total_duration_seconds: u64,
}

impl CraftPlan {
    /// Craft actions planned for an output item, 0 when absent.
    #[must_use]
    pub fn crafts_for(&self, item: ItemId) -> u64 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Total duration across all planned craft actions, in seconds.
    #[must_use]
    pub const fn total_duration_seconds(&self) -> u64 {
        self.total_duration_seconds
    }

    /// Number of distinct items planned for crafting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true when nothing needs crafting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(item, craft count)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.counts.iter().map(|(item, crafts)| (*item, *crafts))
    }

    fn add_crafts(&mut self, item: ItemId, crafts: u64) {
        if crafts == 0 {
            return;
        }
        let entry = self.counts.entry(item).or_insert(0);
        *entry = entry.saturating_add(crafts);
    }
}

/// Plans the craft actions behind a cart.
///
/// Walks the recipe graph with the same recursion and cycle discipline as
/// [`crate::materials::resolve_materials`], accumulating per-item craft
/// counts across all paths. With `recursive` off only top-level cart entries
/// are planned. Cart items without recipes contribute nothing. The total
/// duration is summed after the walk from each planned item's recipe.
#[must_use]
pub fn resolve_craft_plan(
    cart: &Cart,
    catalog: &RecipeCatalog,
    settings: ResolveSettings,
) -> CraftPlan {
    let mut walk = PlanWalk {
        catalog,
        settings,
        visiting: HashSet::new(),
        plan: CraftPlan::default(),
    };
    for (item, qty) in cart.iter() {
        walk.expand(item, qty);
    }

    let mut plan = walk.plan;
    let total = plan
        .iter()
        .map(|(item, crafts)| {
            let per_craft = catalog
                .get(item)
                .map_or(0, |recipe| u64::from(recipe.duration_seconds));
            per_craft.saturating_mul(crafts)
        })
        .fold(0u64, u64::saturating_add);
    plan.total_duration_seconds = total;
    plan
}

struct PlanWalk<'a> {
    catalog: &'a RecipeCatalog,
    settings: ResolveSettings,
    visiting: HashSet<ItemId>,
    plan: CraftPlan,
}

impl<'a> PlanWalk<'a> {
    fn expand(&mut self, item: ItemId, desired: u64) {
        if desired == 0 {
            return;
        }
        let Some(recipe) = self.catalog.get(item) else {
            return;
        };
        let crafts = crafts_needed(
            desired,
            recipe.output_amount,
            recipe.chance_percent,
            self.settings.account_for_chance,
        );
        self.plan.add_crafts(item, crafts);
        if !self.settings.recursive {
            return;
        }
        for material in &recipe.materials {
            let need = u64::from(material.amount).saturating_mul(crafts);
            if need == 0 || self.visiting.contains(&material.item) {
                continue;
            }
            if self.catalog.contains(material.item) {
                self.visiting.insert(material.item);
                self.expand(material.item, need);
                self.visiting.remove(&material.item);
            }
        }
    }
}
