//! Benchmarks for the hotel filter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wanderstay_core::models::Hotel;
use wanderstay_search::{filter_hotels, levenshtein_distance};

const CITIES: [&str; 6] = ["Shimla", "Agra", "Goa", "Paris", "Manali", "Jaipur"];

fn create_hotels(count: usize) -> Vec<Hotel> {
    (0..count)
        .map(|i| Hotel {
            id: i.to_string(),
            place_id: None,
            name: format!("Hotel {i}"),
            address: format!("{i} Station Road, {}", CITIES[i % CITIES.len()]),
            price_per_night: 1500.0,
            rooms_available: 10,
            amenities: vec![],
            rating: 4.2,
            images: vec![],
        })
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_short", |b| {
        b.iter(|| levenshtein_distance(black_box("shimlaa"), black_box("shimla")))
    });
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_hotels");

    for size in [10, 100, 1000, 10000].iter() {
        let hotels = create_hotels(*size);

        group.bench_with_input(BenchmarkId::new("substring", size), size, |b, _| {
            b.iter(|| filter_hotels(black_box(&hotels), black_box("agra")))
        });

        group.bench_with_input(BenchmarkId::new("fuzzy_fallback", size), size, |b, _| {
            b.iter(|| filter_hotels(black_box(&hotels), black_box("manaly")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_filter);
criterion_main!(benches);
