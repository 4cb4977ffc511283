//! Benchmarks for catalog filtering and pagination.

use cafe_catalog::{filter_catalog, paginate, Category, FilterParams, MenuItem, SortKey, VegMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_items(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|i| MenuItem {
            id: i as u32,
            name: format!("Item {i}"),
            description: format!("House special number {i}"),
            subtitle: None,
            fit: None,
            price: format!("${}.{:02}", 3 + i % 12, i % 100),
            image: None,
            category: Category::ALL[i % Category::ALL.len()],
            rating: 3.5 + (i % 15) as f64 / 10.0,
            time: if i % 5 == 0 { "Ready".to_string() } else { format!("{} mins", i % 25) },
            tags: if i % 2 == 0 {
                vec!["Veg".to_string(), "Wraps".to_string()]
            } else {
                vec!["Non-Veg".to_string(), "Burgers".to_string()]
            },
            variants: vec![],
            add_ons: vec![],
        })
        .collect()
}

fn bench_filter_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_catalog");
    let params = FilterParams::default()
        .with_query("special")
        .with_sort(SortKey::PriceAsc);

    for size in [50, 500, 5000].iter() {
        let items = create_items(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_catalog(black_box(&items), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_food_subfilters(c: &mut Criterion) {
    let items = create_items(1000);
    let params = FilterParams::default()
        .with_category(Some(Category::Food))
        .with_sub_category(Some("Wraps".to_string()))
        .with_veg(VegMode::Veg)
        .with_sort(SortKey::Time);

    c.bench_function("filter_food_subfilters", |b| {
        b.iter(|| filter_catalog(black_box(&items), black_box(&params)))
    });
}

fn bench_paginate(c: &mut Criterion) {
    let items = create_items(1000);
    let filtered = filter_catalog(&items, &FilterParams::default());

    c.bench_function("paginate_middle", |b| {
        b.iter(|| paginate(black_box(&filtered), 6, black_box(80)))
    });
}

criterion_group!(benches, bench_filter_sort, bench_food_subfilters, bench_paginate);
criterion_main!(benches);
