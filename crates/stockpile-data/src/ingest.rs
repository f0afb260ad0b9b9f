//! Building planner data from raw documents.
//!
//! This module provides:
//! - Parse helpers wrapping `serde_json` errors into [`IngestError`]
//! - Builders applying the documented defaulting rules, skipping unusable
//!   rows with warnings, and resolving duplicates by keeping the first
//! - [`GameData`], the bundle handed to planning callers

use stockpile_common::{ItemId, RecipeId, SourceId};
use stockpile_planner::catalog::{Item, ItemIndex, Recipe, RecipeCatalog};
use stockpile_planner::drops::{DropIndex, DropSource};
use thiserror::Error;
use tracing::{info, warn};

use crate::documents::{CatalogDocument, DropsDocument, ItemsDocument};

// ============================================================================
// Errors and stats
// ============================================================================

/// Errors that can occur while ingesting exported documents.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A document is not valid JSON or has the wrong top-level shape.
    #[error("failed to parse {document} document: {source}")]
    Parse {
        /// Which export failed ("recipes", "items", or "drops").
        document: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Statistics for one ingestion pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Rows successfully loaded.
    pub loaded: u32,
    /// Rows skipped as structurally unusable.
    pub skipped: u32,
    /// Duplicate rows resolved by keeping the first.
    pub duplicates: u32,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses the recipes export.
pub fn parse_catalog(json: &str) -> IngestResult<CatalogDocument> {
    serde_json::from_str(json).map_err(|source| IngestError::Parse {
        document: "recipes",
        source,
    })
}

/// Parses the items export.
pub fn parse_items(json: &str) -> IngestResult<ItemsDocument> {
    serde_json::from_str(json).map_err(|source| IngestError::Parse {
        document: "items",
        source,
    })
}

/// Parses the drops export.
pub fn parse_drops(json: &str) -> IngestResult<DropsDocument> {
    serde_json::from_str(json).map_err(|source| IngestError::Parse {
        document: "drops",
        source,
    })
}

// ============================================================================
// Building
// ============================================================================

/// Builds a recipe catalog from a parsed recipes export.
///
/// Rows whose map key disagrees with the embedded output ID, or that carry
/// no usable output ID at all, are skipped with a warning. When two keys
/// resolve to the same output item the first (in sorted key order) wins.
/// Absent output amounts become 1, absent durations 0, and materials
/// without an item ID are dropped from their recipe.
#[must_use]
pub fn build_catalog(doc: CatalogDocument) -> (RecipeCatalog, IngestStats) {
    let mut catalog = RecipeCatalog::new();
    let mut stats = IngestStats::default();

    for (key, row) in doc.recipes_by_output_item_id {
        let key_id = key.trim().parse::<u32>().ok();
        let output = match (key_id, row.output_item_id) {
            (Some(from_key), Some(embedded)) if from_key != embedded => {
                warn!(key = %key, embedded, "recipe key disagrees with embedded output id, skipping");
                stats.skipped += 1;
                continue;
            }
            (Some(from_key), _) => ItemId::new(from_key),
            (None, Some(embedded)) => ItemId::new(embedded),
            (None, None) => {
                warn!(key = %key, "recipe row has no usable output id, skipping");
                stats.skipped += 1;
                continue;
            }
        };

        let mut recipe = Recipe::new(RecipeId::new(row.recipe_id.unwrap_or(0)), output)
            .with_output_amount(row.output_amount.unwrap_or(1))
            .with_duration_seconds(row.time_seconds.unwrap_or(0));
        if let Some(name) = row.name {
            recipe = recipe.with_name(name);
        }
        if let Some(chance) = row.chance_percent {
            recipe = recipe.with_chance_percent(chance);
        }
        if let Some(craft) = row.craft {
            recipe = recipe.with_craft(craft);
        }
        if let Some(category) = row.category {
            recipe = recipe.with_category(category);
        }
        for material in row.materials {
            let Some(item_id) = material.item_id else {
                warn!(output = output.raw(), "material row without item id, dropped");
                continue;
            };
            recipe = recipe.with_material(ItemId::new(item_id), material.amount.unwrap_or(0));
        }

        match catalog.insert(recipe) {
            Ok(()) => stats.loaded += 1,
            Err(err) => {
                warn!(%err, "duplicate recipe output, keeping the first");
                stats.duplicates += 1;
            }
        }
    }

    (catalog, stats)
}

/// Builds an item index from a parsed items export.
///
/// Rows without an `id` are skipped. Rows without a usable name get the
/// `"Item #<id>"` placeholder so downstream display code sees the same text
/// either way. Repeated IDs keep the first row, like recipes.
#[must_use]
pub fn build_items(doc: ItemsDocument) -> (ItemIndex, IngestStats) {
    let mut index = ItemIndex::new();
    let mut stats = IngestStats::default();

    for row in doc.into_entries() {
        let Some(raw_id) = row.id else {
            stats.skipped += 1;
            continue;
        };
        let id = ItemId::new(raw_id);
        if index.get(id).is_some() {
            warn!(item = raw_id, "duplicate item row, keeping the first");
            stats.duplicates += 1;
            continue;
        }

        let name = match row.name {
            Some(name) if !name.is_empty() => name,
            _ => format!("Item #{id}"),
        };
        let mut item = Item::new(id, name);
        item.tier = row.tier;
        item.kind = row.kind;
        item.subtype = row.subtype;
        item.description = row.description;
        index.insert(item);
        stats.loaded += 1;
    }

    (index, stats)
}

/// Builds a drop index from a parsed drops export.
///
/// Keys that do not parse as item IDs are skipped with a warning, as are
/// source rows without a source ID. Absent drop chances read as 0.
#[must_use]
pub fn build_drop_index(doc: DropsDocument) -> (DropIndex, IngestStats) {
    let mut index = DropIndex::new();
    let mut stats = IngestStats::default();

    for (key, rows) in doc.drops_by_item_id {
        let Ok(raw_id) = key.trim().parse::<u32>() else {
            warn!(key = %key, "drop key is not an item id, skipping");
            stats.skipped += 1;
            continue;
        };
        let item = ItemId::new(raw_id);

        for row in rows {
            let Some(source_id) = row.source_id else {
                stats.skipped += 1;
                continue;
            };
            let name = match row.name {
                Some(name) if !name.is_empty() => name,
                _ => format!("Source #{source_id}"),
            };
            index.add(
                item,
                DropSource {
                    source: SourceId::new(source_id),
                    name,
                    level: row.level,
                    tier: row.tier,
                    is_gathering_node: row.is_gathering_node,
                    drop_chance: row.drop_chance.unwrap_or(0.0),
                },
            );
            stats.loaded += 1;
        }
    }

    (index, stats)
}

// ============================================================================
// Game data bundle
// ============================================================================

/// Everything the planner needs, built from exported game documents.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    /// Recipes keyed by output item.
    pub recipes: RecipeCatalog,
    /// Item metadata for display names.
    pub items: ItemIndex,
    /// Drop sources per item.
    pub drops: DropIndex,
}

impl GameData {
    /// Builds game data from in-memory JSON exports.
    ///
    /// `items_json` and `drops_json` are optional; planning degrades to
    /// placeholder names and empty source lists without them. The caller is
    /// responsible for having fetched the strings; no I/O happens here.
    pub fn from_json(
        recipes_json: &str,
        items_json: Option<&str>,
        drops_json: Option<&str>,
    ) -> IngestResult<Self> {
        let (recipes, recipe_stats) = build_catalog(parse_catalog(recipes_json)?);
        info!(
            loaded = recipe_stats.loaded,
            skipped = recipe_stats.skipped,
            duplicates = recipe_stats.duplicates,
            "ingested recipe catalog"
        );

        let items = match items_json {
            Some(json) => {
                let (index, stats) = build_items(parse_items(json)?);
                info!(loaded = stats.loaded, skipped = stats.skipped, "ingested item catalog");
                index
            }
            None => ItemIndex::new(),
        };

        let drops = match drops_json {
            Some(json) => {
                let (index, stats) = build_drop_index(parse_drops(json)?);
                info!(loaded = stats.loaded, skipped = stats.skipped, "ingested drop sources");
                index
            }
            None => DropIndex::new(),
        };

        Ok(Self {
            recipes,
            items,
            drops,
        })
    }
}
