//! Item and recipe catalog.
//!
//! This module provides:
//! - Item metadata with never-failing name lookup
//! - Recipe records keyed by their output item
//! - Search and classification queries over the catalog

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use stockpile_common::{ItemId, RecipeId};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by catalog mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An output item already has a registered recipe.
    #[error("duplicate recipe for output item {output}: kept {existing}, rejected {incoming}")]
    DuplicateOutput {
        /// Output item with more than one candidate recipe.
        output: ItemId,
        /// Recipe already registered for this output.
        existing: RecipeId,
        /// Recipe that was rejected.
        incoming: RecipeId,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Items
// ============================================================================

/// Immutable metadata for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Progression tier, when the export provides one.
    pub tier: Option<u32>,
    /// Coarse classification ("resource", "equipment", ...).
    pub kind: Option<String>,
    /// Finer classification within `kind`.
    pub subtype: Option<String>,
    /// Description text.
    pub description: Option<String>,
}

impl Item {
    /// Creates an item with a name and no optional metadata.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tier: None,
            kind: None,
            subtype: None,
            description: None,
        }
    }
}

/// Lookup table from item ID to metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemIndex {
    items: HashMap<ItemId, Item>,
}

impl ItemIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Inserts an item, returning the previous entry for the same ID.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id, item)
    }

    /// Looks up an item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Display name for an item.
    ///
    /// Unknown IDs resolve to the `"Item #<id>"` placeholder so name lookup
    /// never fails, even against a partial or missing item export.
    #[must_use]
    pub fn name_of(&self, id: ItemId) -> String {
        match self.items.get(&id) {
            Some(item) => item.name.clone(),
            None => format!("Item #{id}"),
        }
    }

    /// Number of items in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

// ============================================================================
// Recipes
// ============================================================================

/// One material consumed by a single craft action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// Item consumed.
    pub item: ItemId,
    /// Amount consumed per craft action. Zero is legal and contributes
    /// nothing to resolution.
    pub amount: u32,
}

impl MaterialRequirement {
    /// Creates a material requirement.
    #[must_use]
    pub const fn new(item: ItemId, amount: u32) -> Self {
        Self { item, amount }
    }
}

/// A crafting recipe producing one output item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe row in the source data, kept for traceability.
    pub recipe_id: RecipeId,
    /// Item this recipe produces. Unique key within a catalog.
    pub output_item: ItemId,
    /// Display name. Presentation falls back to the output item's name.
    pub name: Option<String>,
    /// Units produced per craft action. Always at least 1.
    pub output_amount: u32,
    /// Materials consumed per craft action.
    pub materials: Vec<MaterialRequirement>,
    /// Success chance in percent. `None` means guaranteed.
    pub chance_percent: Option<f64>,
    /// Time per craft action in seconds. Zero when unknown.
    pub duration_seconds: u32,
    /// Coarse craft classification from the export ("smithing", ...).
    pub craft: Option<String>,
    /// Finer category within the craft.
    pub category: Option<String>,
}

impl Recipe {
    /// Creates a guaranteed, single-output recipe with no materials.
    #[must_use]
    pub fn new(recipe_id: RecipeId, output_item: ItemId) -> Self {
        Self {
            recipe_id,
            output_item,
            name: None,
            output_amount: 1,
            materials: Vec::new(),
            chance_percent: None,
            duration_seconds: 0,
            craft: None,
            category: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets units produced per craft action, clamped to at least 1.
    #[must_use]
    pub fn with_output_amount(mut self, amount: u32) -> Self {
        self.output_amount = amount.max(1);
        self
    }

    /// Adds a material requirement.
    #[must_use]
    pub fn with_material(mut self, item: ItemId, amount: u32) -> Self {
        self.materials.push(MaterialRequirement::new(item, amount));
        self
    }

    /// Sets the success chance in percent.
    #[must_use]
    pub fn with_chance_percent(mut self, chance: f64) -> Self {
        self.chance_percent = Some(chance);
        self
    }

    /// Sets the craft duration in seconds.
    #[must_use]
    pub fn with_duration_seconds(mut self, seconds: u32) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets the coarse craft classification.
    #[must_use]
    pub fn with_craft(mut self, craft: impl Into<String>) -> Self {
        self.craft = Some(craft.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Display name for this recipe.
    ///
    /// The recipe's own name when present and non-empty, else the output
    /// item's name with the usual placeholder fallback.
    #[must_use]
    pub fn display_name(&self, items: &ItemIndex) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => items.name_of(self.output_item),
        }
    }
}

// ============================================================================
// Recipe catalog
// ============================================================================

/// All known recipes, keyed by output item.
///
/// At most one recipe per output item. [`RecipeCatalog::insert`] rejects
/// duplicates so the caller decides its own conflict policy (the ingestion
/// layer keeps the first and logs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeCatalog {
    recipes: HashMap<ItemId, Recipe>,
}

impl RecipeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recipes: HashMap::new(),
        }
    }

    /// Registers a recipe.
    ///
    /// Fails with [`CatalogError::DuplicateOutput`] when the output item
    /// already has a recipe.
    pub fn insert(&mut self, recipe: Recipe) -> CatalogResult<()> {
        if let Some(existing) = self.recipes.get(&recipe.output_item) {
            return Err(CatalogError::DuplicateOutput {
                output: recipe.output_item,
                existing: existing.recipe_id,
                incoming: recipe.recipe_id,
            });
        }
        self.recipes.insert(recipe.output_item, recipe);
        Ok(())
    }

    /// Looks up the recipe producing an item.
    #[must_use]
    pub fn get(&self, output: ItemId) -> Option<&Recipe> {
        self.recipes.get(&output)
    }

    /// Returns true when an item is craftable.
    #[must_use]
    pub fn contains(&self, output: ItemId) -> bool {
        self.recipes.contains_key(&output)
    }

    /// Number of recipes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true when the catalog holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterates over recipes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Output item IDs in ascending order.
    #[must_use]
    pub fn output_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.recipes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Recipes whose display name contains `query`, case-insensitively,
    /// sorted by output item for stable listings.
    #[must_use]
    pub fn search(&self, query: &str, items: &ItemIndex) -> Vec<&Recipe> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|recipe| recipe.display_name(items).to_lowercase().contains(&needle))
            .collect();
        hits.sort_by_key(|recipe| recipe.output_item);
        hits
    }

    /// Distinct craft classifications, sorted.
    #[must_use]
    pub fn crafts(&self) -> Vec<String> {
        let set: BTreeSet<String> = self
            .recipes
            .values()
            .filter_map(|recipe| recipe.craft.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Distinct categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<String> = self
            .recipes
            .values()
            .filter_map(|recipe| recipe.category.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Recipes matching the given classification filters, sorted by output
    /// item. A `None` filter matches everything.
    #[must_use]
    pub fn filtered(&self, craft: Option<&str>, category: Option<&str>) -> Vec<&Recipe> {
        let mut hits: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|recipe| {
                craft.map_or(true, |c| recipe.craft.as_deref() == Some(c))
                    && category.map_or(true, |c| recipe.category.as_deref() == Some(c))
            })
            .collect();
        hits.sort_by_key(|recipe| recipe.output_item);
        hits
    }
}
