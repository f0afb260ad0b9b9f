//! Raw document types mirroring the game's exported JSON.
//!
//! This module provides:
//! - Serde structs for the recipes, items, and drops exports
//! - Lenient field handling: anything optional degrades to a default
//!   instead of failing the whole document
//!
//! Field names follow the exports' camelCase convention. Unknown fields are
//! ignored, so documents carrying extra metadata still parse.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Recipes export
// ============================================================================

/// Top-level recipes export, keyed by output item ID.
///
/// Keys are sorted, so ingestion order is deterministic regardless of how
/// the JSON object was written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Recipes keyed by their output item ID (a string, JSON-object style).
    #[serde(default)]
    pub recipes_by_output_item_id: BTreeMap<String, RecipeDocument>,
}

/// One recipe row from the export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    /// Recipe row identifier.
    #[serde(default)]
    pub recipe_id: Option<u32>,
    /// Output item ID, expected to agree with the map key.
    #[serde(default)]
    pub output_item_id: Option<u32>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Coarse craft classification.
    #[serde(default)]
    pub craft: Option<String>,
    /// Finer category within the craft.
    #[serde(default)]
    pub category: Option<String>,
    /// Units produced per craft action. Absent or 0 means 1.
    #[serde(default)]
    pub output_amount: Option<u32>,
    /// Craft time in seconds. Absent means unknown (0).
    #[serde(default)]
    pub time_seconds: Option<u32>,
    /// Success chance in percent. Absent or 0 means guaranteed.
    #[serde(default)]
    pub chance_percent: Option<f64>,
    /// Materials consumed per craft action.
    #[serde(default)]
    pub materials: Vec<MaterialDocument>,
}

/// One material row inside a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDocument {
    /// Item consumed. Rows without an ID are dropped.
    #[serde(default)]
    pub item_id: Option<u32>,
    /// Amount consumed per craft action. Absent means 0.
    #[serde(default)]
    pub amount: Option<u32>,
}

// ============================================================================
// Items export
// ============================================================================

/// Items export: either a bare array or an object wrapping it in `data`.
/// Both shapes occur in the wild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemsDocument {
    /// Bare array of item rows.
    List(Vec<ItemDocument>),
    /// Object wrapping the array.
    Wrapped {
        /// The item rows.
        data: Vec<ItemDocument>,
    },
}

impl ItemsDocument {
    /// The item rows regardless of wrapper shape.
    #[must_use]
    pub fn entries(&self) -> &[ItemDocument] {
        match self {
            Self::List(items) => items,
            Self::Wrapped { data } => data,
        }
    }

    /// Consumes the document, yielding the item rows.
    #[must_use]
    pub fn into_entries(self) -> Vec<ItemDocument> {
        match self {
            Self::List(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// One item row from the export. Rows without an `id` are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    /// Item identifier.
    #[serde(default)]
    pub id: Option<u32>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Progression tier.
    #[serde(default)]
    pub tier: Option<u32>,
    /// Coarse classification.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Finer classification.
    #[serde(default)]
    pub subtype: Option<String>,
    /// Description text.
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Drops export
// ============================================================================

/// Drop-source export, keyed by the dropped item's ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropsDocument {
    /// Sources keyed by dropped item ID.
    #[serde(default)]
    pub drops_by_item_id: BTreeMap<String, Vec<DropSourceDocument>>,
}

/// One drop source row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropSourceDocument {
    /// Source identifier. Rows without an ID are dropped.
    #[serde(default)]
    pub source_id: Option<u32>,
    /// Source display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Source level.
    #[serde(default)]
    pub level: Option<u32>,
    /// Source tier.
    #[serde(default)]
    pub tier: Option<u32>,
    /// True for gathering nodes, false for monsters.
    #[serde(default)]
    pub is_gathering_node: bool,
    /// Drop chance in percent. Absent means 0.
    #[serde(default)]
    pub drop_chance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_document() {
        let json = r#"{
            "meta": {"generated": "2024-11-02", "source": "crafts.json"},
            "craftableOutputItemIds": [10, 20],
            "recipesByOutputItemId": {
                "10": {
                    "recipeId": 7,
                    "outputItemId": 10,
                    "name": "Smelt Iron Bar",
                    "craft": "smithing",
                    "outputAmount": 2,
                    "timeSeconds": 4,
                    "chancePercent": 100.0,
                    "materials": [
                        {"itemId": 1, "amount": 3},
                        {"itemId": 2, "amount": 1}
                    ]
                },
                "20": {
                    "recipeId": 8,
                    "outputItemId": 20,
                    "materials": []
                }
            }
        }"#;

        let doc: CatalogDocument = serde_json::from_str(json).expect("parse");
        assert_eq!(doc.recipes_by_output_item_id.len(), 2);

        let bar = &doc.recipes_by_output_item_id["10"];
        assert_eq!(bar.recipe_id, Some(7));
        assert_eq!(bar.name.as_deref(), Some("Smelt Iron Bar"));
        assert_eq!(bar.output_amount, Some(2));
        assert_eq!(bar.materials.len(), 2);

        // Defaults for the sparse entry.
        let sparse = &doc.recipes_by_output_item_id["20"];
        assert_eq!(sparse.output_amount, None);
        assert_eq!(sparse.time_seconds, None);
        assert_eq!(sparse.chance_percent, None);
        assert!(sparse.materials.is_empty());
    }

    #[test]
    fn test_parse_items_bare_array() {
        let json = r#"[
            {"id": 1, "name": "Wood", "type": "resource"},
            {"id": 2, "name": "Iron Ore", "tier": 2}
        ]"#;

        let doc: ItemsDocument = serde_json::from_str(json).expect("parse");
        let entries = doc.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind.as_deref(), Some("resource"));
        assert_eq!(entries[1].tier, Some(2));
    }

    #[test]
    fn test_parse_items_wrapped_array() {
        let json = r#"{"data": [{"id": 5, "name": "Coal"}]}"#;

        let doc: ItemsDocument = serde_json::from_str(json).expect("parse");
        assert_eq!(doc.entries().len(), 1);
        assert_eq!(doc.into_entries()[0].id, Some(5));
    }

    #[test]
    fn test_parse_drops_document() {
        let json = r#"{
            "dropsByItemId": {
                "2": [
                    {"sourceId": 31, "name": "Iron Vein", "isGatheringNode": true, "dropChance": 80.0},
                    {"sourceId": 44, "name": "Rock Golem", "level": 12, "dropChance": 35.5}
                ]
            }
        }"#;

        let doc: DropsDocument = serde_json::from_str(json).expect("parse");
        let sources = &doc.drops_by_item_id["2"];
        assert_eq!(sources.len(), 2);
        assert!(sources[0].is_gathering_node);
        assert!(!sources[1].is_gathering_node);
        assert_eq!(sources[1].drop_chance, Some(35.5));
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let json = r#"{
            "recipesByOutputItemId": {
                "10": {"outputItemId": 10, "name": null, "outputAmount": null}
            }
        }"#;

        let doc: CatalogDocument = serde_json::from_str(json).expect("parse");
        let recipe = &doc.recipes_by_output_item_id["10"];
        assert_eq!(recipe.name, None);
        assert_eq!(recipe.output_amount, None);
    }
}
