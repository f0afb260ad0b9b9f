//! Benchmark for cart resolution performance.
//!
//! Run with: cargo bench --package stockpile-planner --bench resolve_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stockpile_common::{ItemId, RecipeId, SourceId};
use stockpile_planner::cart::Cart;
use stockpile_planner::catalog::{Recipe, RecipeCatalog};
use stockpile_planner::drops::{DropIndex, DropSource};
use stockpile_planner::materials::resolve_materials;
use stockpile_planner::plan::resolve_craft_plan;
use stockpile_planner::settings::ResolveSettings;

fn create_test_catalog() -> RecipeCatalog {
    let mut catalog = RecipeCatalog::new();

    // 500 recipes in a layered chain: each output consumes the output below
    // it plus one leaf material, bottoming out at items 1..=50.
    for i in 1..=500u32 {
        let below = if i > 1 { 1000 + (i - 1) } else { 1 };
        let recipe = Recipe::new(RecipeId::new(i), ItemId::new(1000 + i))
            .with_output_amount((i % 3) + 1)
            .with_duration_seconds(i % 60)
            .with_material(ItemId::new(below), (i % 4) + 1)
            .with_material(ItemId::new(i % 50 + 1), 2);
        catalog.insert(recipe).expect("unique outputs");
    }

    catalog
}

fn benchmark_shallow_resolution(c: &mut Criterion) {
    let catalog = create_test_catalog();
    let cart = Cart::from_iter([(ItemId::new(1500), 10)]);

    c.bench_function("resolve_shallow", |b| {
        b.iter(|| black_box(resolve_materials(&cart, &catalog, ResolveSettings::new())));
    });
}

fn benchmark_recursive_resolution(c: &mut Criterion) {
    let catalog = create_test_catalog();
    let cart = Cart::from_iter([(ItemId::new(1500), 10)]);
    let settings = ResolveSettings::new().with_recursive(true);

    c.bench_function("resolve_recursive_chain_500", |b| {
        b.iter(|| black_box(resolve_materials(&cart, &catalog, settings)));
    });
}

fn benchmark_craft_plan(c: &mut Criterion) {
    let catalog = create_test_catalog();
    let cart = Cart::from_iter([(ItemId::new(1500), 10)]);
    let settings = ResolveSettings::new()
        .with_recursive(true)
        .with_account_for_chance(true);

    c.bench_function("craft_plan_chain_500", |b| {
        b.iter(|| black_box(resolve_craft_plan(&cart, &catalog, settings)));
    });
}

fn benchmark_drop_ranking(c: &mut Criterion) {
    let mut index = DropIndex::new();
    for i in 0..200u32 {
        index.add(
            ItemId::new(1),
            DropSource {
                source: SourceId::new(i % 50),
                name: format!("Monster {i}"),
                level: Some(i),
                tier: None,
                is_gathering_node: i % 4 == 0,
                drop_chance: f64::from(i % 100),
            },
        );
    }

    c.bench_function("best_sources_200_candidates", |b| {
        b.iter(|| black_box(index.best_sources(ItemId::new(1), 10)));
    });
}

criterion_group!(
    benches,
    benchmark_shallow_resolution,
    benchmark_recursive_resolution,
    benchmark_craft_plan,
    benchmark_drop_ranking
);
criterion_main!(benches);
