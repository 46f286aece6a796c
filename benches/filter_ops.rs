//! Filter operation benchmarks: add, lookup hit, lookup miss, occupancy.

mod common;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bloomsieve::BloomFilter;

const FILTER_SIZE: usize = 1_000_003;
const PRELOAD: usize = 10_000;

fn preloaded_filter(items: &[String]) -> BloomFilter {
    let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();
    for item in items {
        filter.add(item);
    }
    filter
}

fn bench_add(c: &mut Criterion) {
    let items = common::random_strings(PRELOAD, 16);

    c.bench_function("add", |b| {
        let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();
        let mut i = 0;
        b.iter(|| {
            filter.add(black_box(&items[i % items.len()]));
            i += 1;
        });
    });
}

fn bench_lookup_hit(c: &mut Criterion) {
    let items = common::random_strings(PRELOAD, 16);
    let filter = preloaded_filter(&items);

    c.bench_function("lookup_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let found = filter.lookup(black_box(&items[i % items.len()]));
            i += 1;
            found
        });
    });
}

fn bench_lookup_miss(c: &mut Criterion) {
    let items = common::random_strings(PRELOAD, 16);
    let misses = common::random_strings(PRELOAD, 24);
    let filter = preloaded_filter(&items);

    c.bench_function("lookup_miss", |b| {
        let mut i = 0;
        b.iter(|| {
            let found = filter.lookup(black_box(&misses[i % misses.len()]));
            i += 1;
            found
        });
    });
}

fn bench_occupancy(c: &mut Criterion) {
    let items = common::random_strings(PRELOAD, 16);
    let filter = preloaded_filter(&items);

    c.bench_function("occupancy", |b| {
        b.iter(|| black_box(filter.occupancy()));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_lookup_hit,
    bench_lookup_miss,
    bench_occupancy
);
criterion_main!(benches);
