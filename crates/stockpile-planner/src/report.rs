//! Report model for presentation layers.
//!
//! This module provides:
//! - [`MaterialLine`] and [`PlanLine`], presentation-ready rows with
//!   resolved names and deterministic ordering
//! - Plain-text rendering of a shopping list

use stockpile_common::{format_amount, ItemId};

use crate::catalog::{ItemIndex, RecipeCatalog};
use crate::materials::MaterialTotals;
use crate::plan::CraftPlan;

/// Rendered in place of an empty shopping list.
pub const EMPTY_REPORT_TEXT: &str = "No materials (empty list).";

/// One row of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLine {
    /// Material item.
    pub item: ItemId,
    /// Resolved display name (placeholder for unknown items).
    pub name: String,
    /// Total amount to gather.
    pub amount: u64,
}

/// Builds sorted shopping-list rows from resolved totals.
///
/// Rows are ordered by descending amount, ties by ascending name, so the
/// same totals always render identically.
#[must_use]
pub fn material_lines(totals: &MaterialTotals, items: &ItemIndex) -> Vec<MaterialLine> {
    let mut lines: Vec<MaterialLine> = totals
        .iter()
        .map(|(item, amount)| MaterialLine {
            item,
            name: items.name_of(item),
            amount,
        })
        .collect();
    lines.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
    lines
}

/// Renders shopping-list rows as one `"<name> ×<amount>"` line each.
#[must_use]
pub fn render_text(lines: &[MaterialLine]) -> String {
    if lines.is_empty() {
        return EMPTY_REPORT_TEXT.to_string();
    }
    let rows: Vec<String> = lines
        .iter()
        .map(|line| format!("{} ×{}", line.name, format_amount(line.amount)))
        .collect();
    rows.join("\n")
}

/// One row of the craft plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLine {
    /// Output item being crafted.
    pub item: ItemId,
    /// Resolved display name.
    pub name: String,
    /// Craft actions planned.
    pub crafts: u64,
    /// Seconds spent on this row (crafts x recipe duration).
    pub duration_seconds: u64,
}

/// Builds sorted craft-plan rows.
///
/// Ordered by descending craft count, ties by ascending name.
#[must_use]
pub fn plan_lines(plan: &CraftPlan, catalog: &RecipeCatalog, items: &ItemIndex) -> Vec<PlanLine> {
    let mut lines: Vec<PlanLine> = plan
        .iter()
        .map(|(item, crafts)| {
            let per_craft = catalog
                .get(item)
                .map_or(0, |recipe| u64::from(recipe.duration_seconds));
            PlanLine {
                item,
                name: items.name_of(item),
                crafts,
                duration_seconds: per_craft.saturating_mul(crafts),
            }
        })
        .collect();
    lines.sort_by(|a, b| b.crafts.cmp(&a.crafts).then_with(|| a.name.cmp(&b.name)));
    lines
}
