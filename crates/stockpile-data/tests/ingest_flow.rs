//! End-to-end flow: exported JSON documents to a rendered shopping list.

use stockpile_common::ItemId;
use stockpile_data::ingest::GameData;
use stockpile_planner::cart::Cart;
use stockpile_planner::materials::resolve_materials;
use stockpile_planner::plan::resolve_craft_plan;
use stockpile_planner::report::{material_lines, render_text, EMPTY_REPORT_TEXT};
use stockpile_planner::settings::ResolveSettings;

const RECIPES_JSON: &str = r#"{
    "meta": {"generated": "2024-11-02"},
    "recipesByOutputItemId": {
        "10": {
            "recipeId": 100,
            "outputItemId": 10,
            "name": "Smelt Iron Bar",
            "craft": "smithing",
            "outputAmount": 1,
            "timeSeconds": 4,
            "materials": [
                {"itemId": 2, "amount": 3},
                {"itemId": 3, "amount": 1}
            ]
        },
        "20": {
            "recipeId": 101,
            "outputItemId": 20,
            "name": "Forge Sword",
            "craft": "smithing",
            "category": "weapon",
            "timeSeconds": 10,
            "chancePercent": 50.0,
            "materials": [
                {"itemId": 10, "amount": 2},
                {"itemId": 1, "amount": 1}
            ]
        }
    }
}"#;

const ITEMS_JSON: &str = r#"[
    {"id": 1, "name": "Wood", "type": "resource"},
    {"id": 2, "name": "Iron Ore", "type": "resource", "tier": 1},
    {"id": 3, "name": "Coal", "type": "resource"},
    {"id": 10, "name": "Iron Bar", "type": "material", "tier": 1},
    {"id": 20, "name": "Sword", "type": "equipment", "tier": 2}
]"#;

const DROPS_JSON: &str = r#"{
    "dropsByItemId": {
        "2": [
            {"sourceId": 31, "name": "Iron Vein", "isGatheringNode": true, "dropChance": 80.0},
            {"sourceId": 44, "name": "Rock Golem", "level": 12, "dropChance": 35.0}
        ]
    }
}"#;

#[test]
fn test_documents_to_rendered_report() {
    let data = GameData::from_json(RECIPES_JSON, Some(ITEMS_JSON), Some(DROPS_JSON))
        .expect("valid documents");

    let cart = Cart::from_iter([(ItemId::new(20), 1)]);
    let settings = ResolveSettings::new().with_recursive(true);

    let totals = resolve_materials(&cart, &data.recipes, settings);
    // 1 sword: 2 bars and 1 wood; 2 bars: 6 ore and 2 coal.
    assert_eq!(totals.amount(ItemId::new(2)), 6);
    assert_eq!(totals.amount(ItemId::new(3)), 2);
    assert_eq!(totals.amount(ItemId::new(1)), 1);

    let text = render_text(&material_lines(&totals, &data.items));
    assert_eq!(text, "Iron Ore ×6\nCoal ×2\nWood ×1");
}

#[test]
fn test_chance_compensation_flows_from_documents() {
    let data = GameData::from_json(RECIPES_JSON, Some(ITEMS_JSON), None).expect("valid documents");

    let cart = Cart::from_iter([(ItemId::new(20), 1)]);
    let settings = ResolveSettings::new()
        .with_recursive(true)
        .with_account_for_chance(true);

    // The sword recipe succeeds half the time: 2 forges planned, and the
    // guaranteed bar recipe scales with the doubled demand.
    let plan = resolve_craft_plan(&cart, &data.recipes, settings);
    assert_eq!(plan.crafts_for(ItemId::new(20)), 2);
    assert_eq!(plan.crafts_for(ItemId::new(10)), 4);
    assert_eq!(plan.total_duration_seconds(), 2 * 10 + 4 * 4);
}

#[test]
fn test_zero_quantity_cart_entries_resolve_to_nothing() {
    let data = GameData::from_json(RECIPES_JSON, Some(ITEMS_JSON), None).expect("valid documents");

    // A restored cart can carry a zero quantity the mutation clamp never
    // saw. Both resolvers read it as zero need.
    let cart: Cart = serde_json::from_str(r#"{"entries": {"20": 0}}"#).expect("valid cart");
    assert_eq!(cart.quantity(ItemId::new(20)), 0);

    let settings = ResolveSettings::new().with_recursive(true);
    let totals = resolve_materials(&cart, &data.recipes, settings);
    assert!(totals.is_empty());
    assert_eq!(render_text(&material_lines(&totals, &data.items)), EMPTY_REPORT_TEXT);

    let plan = resolve_craft_plan(&cart, &data.recipes, settings);
    assert!(plan.is_empty());
    assert_eq!(plan.total_duration_seconds(), 0);
}

#[test]
fn test_drop_sources_rank_from_documents() {
    let data = GameData::from_json(RECIPES_JSON, None, Some(DROPS_JSON)).expect("valid documents");

    let best = data.drops.best_sources(ItemId::new(2), 1);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].name, "Iron Vein");
    assert!(best[0].is_gathering_node);
}

#[test]
fn test_missing_item_export_degrades_to_placeholders() {
    let data = GameData::from_json(RECIPES_JSON, None, None).expect("valid documents");

    let cart = Cart::from_iter([(ItemId::new(10), 1)]);
    let totals = resolve_materials(&cart, &data.recipes, ResolveSettings::new());
    let text = render_text(&material_lines(&totals, &data.items));

    assert_eq!(text, "Item #2 ×3\nItem #3 ×1");
}

#[test]
fn test_catalog_queries_reflect_the_export() {
    let data = GameData::from_json(RECIPES_JSON, Some(ITEMS_JSON), None).expect("valid documents");

    assert_eq!(data.recipes.crafts(), vec!["smithing"]);
    assert_eq!(data.recipes.categories(), vec!["weapon"]);
    assert_eq!(data.recipes.filtered(Some("smithing"), None).len(), 2);
    assert_eq!(data.recipes.search("sword", &data.items).len(), 1);
}
