//! Benchmarks for the directory and info hub pipelines
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pawconnect::city::City;
use pawconnect::dataset::{Dataset, ServiceProvider};
use pawconnect::directory::{paginate, DirectoryQuery, SortOrder};
use pawconnect::infohub::ArticleFilter;

/// Bundled providers repeated until there are at least `count`, with unique ids
fn create_test_providers(count: usize) -> Vec<ServiceProvider> {
    let seed = Dataset::bundled().unwrap().providers;
    (0..count)
        .map(|i| {
            let mut provider = seed[i % seed.len()].clone();
            provider.id = i as u32 + 1;
            provider.rating = (i % 50) as f32 / 10.0;
            provider
        })
        .collect()
}

fn bench_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory");

    for size in [100, 1000, 10000] {
        let providers = create_test_providers(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("filter_{}", size), |b| {
            let query = DirectoryQuery::new()
                .query("pet")
                .city(Some(City::Amsterdam));
            b.iter(|| query.matching(black_box(&providers)))
        });

        for sort in [SortOrder::Rating, SortOrder::Name, SortOrder::Recent] {
            group.bench_function(format!("run_{}_{}", sort, size), |b| {
                let query = DirectoryQuery::new().sort(sort).page(3);
                b.iter(|| query.run(black_box(&providers)))
            });
        }
    }

    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let items: Vec<u32> = (0..10000).collect();

    c.bench_function("paginate_10000", |b| {
        b.iter(|| paginate(black_box(&items), black_box(1250), 4))
    });
}

fn bench_articles(c: &mut Criterion) {
    let dataset = Dataset::bundled().unwrap();
    let filter = ArticleFilter {
        query: "vet".to_string(),
        ..ArticleFilter::default()
    };

    c.bench_function("article_filter", |b| {
        b.iter(|| filter.apply(black_box(&dataset.articles)))
    });
}

criterion_group!(benches, bench_directory, bench_paginate, bench_articles);
criterion_main!(benches);
