//! Benchmarks for geo crate distance and polygon calculations.

use cafe_geo::{circle_polygon, distance_km, nearest_branch, Branch, GeoPoint};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_branches(count: usize) -> Vec<Branch> {
    (0..count)
        .map(|i| {
            // Spread branches in a grid around Hyderabad
            let lat = 17.0 + (i as f64 * 0.01) % 1.0;
            let lng = 78.0 + (i as f64 * 0.01) % 1.0;
            Branch {
                id: i.to_string(),
                name: format!("Branch {i}"),
                coords: GeoPoint::new(lat, lng),
                address_line: None,
                phone: None,
                maps_url: None,
            }
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let berlin = GeoPoint::new(52.5200, 13.4050);
    let paris = GeoPoint::new(48.8566, 2.3522);

    c.bench_function("haversine_single", |b| {
        b.iter(|| distance_km(black_box(&berlin), black_box(&paris)))
    });
}

fn bench_circle_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_polygon");
    let center = GeoPoint::new(17.385, 78.4867);

    for steps in [16usize, 64, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(steps), steps, |b, &steps| {
            b.iter(|| circle_polygon(black_box(center), black_box(4000.0), steps))
        });
    }

    group.finish();
}

fn bench_nearest_branch(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_branch");
    let me = GeoPoint::new(17.43, 78.41);

    for size in [10, 100, 1000].iter() {
        let branches = create_branches(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| nearest_branch(black_box(&me), black_box(&branches)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_circle_polygon, bench_nearest_branch);
criterion_main!(benches);
