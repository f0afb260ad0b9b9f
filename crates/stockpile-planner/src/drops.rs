//! Drop-source ranking.
//!
//! This module provides:
//! - [`DropSource`], one monster or gathering node that can yield an item
//! - [`DropIndex`], per-item source lists with best-source ranking

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use stockpile_common::{ItemId, SourceId};

/// One source an item can drop from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSource {
    /// Source identifier.
    pub source: SourceId,
    /// Display name of the monster or node.
    pub name: String,
    /// Source level, when known.
    pub level: Option<u32>,
    /// Source tier, when known.
    pub tier: Option<u32>,
    /// True for gathering nodes, false for monsters.
    pub is_gathering_node: bool,
    /// Drop chance in percent.
    pub drop_chance: f64,
}

/// Drop sources for each item, ranked on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropIndex {
    sources: HashMap<ItemId, Vec<DropSource>>,
}

impl DropIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Records a source for an item.
    pub fn add(&mut self, item: ItemId, source: DropSource) {
        self.sources.entry(item).or_default().push(source);
    }

    /// All recorded sources for an item, in insertion order.
    #[must_use]
    pub fn sources(&self, item: ItemId) -> &[DropSource] {
        self.sources.get(&item).map_or(&[], Vec::as_slice)
    }

    /// Number of items with at least one source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true when no sources are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The best places to obtain an item.
    ///
    /// Sources sorted by descending drop chance, one entry per source ID
    /// (the highest-chance occurrence wins), at most `limit` results. An
    /// unknown item yields an empty list.
    #[must_use]
    pub fn best_sources(&self, item: ItemId, limit: usize) -> Vec<DropSource> {
        let Some(candidates) = self.sources.get(&item) else {
            return Vec::new();
        };
        let mut ranked = candidates.clone();
        // Stable sort keeps insertion order among equal chances.
        ranked.sort_by(|a, b| b.drop_chance.total_cmp(&a.drop_chance));
        let mut seen = HashSet::new();
        ranked.retain(|source| seen.insert(source.source));
        ranked.truncate(limit);
        ranked
    }
}
