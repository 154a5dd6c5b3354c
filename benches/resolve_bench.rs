//! Benchmarks for route resolution and navigation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use market_state::{MemoryHistory, Navigator, Resolution, RouteTable};

const PATHS: [&str; 6] = [
    "/",
    "/dashboard",
    "/symbol/AAPL",
    "/symbol/BRK%2EB?range=1y",
    "/settings",
    "/nonexistent",
];

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let table = RouteTable::standard();

    for path in PATHS {
        group.throughput(Throughput::Elements(1));
        group.bench_function(path, |b| b.iter(|| table.resolve(black_box(path))));
    }

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigate");

    group.bench_function("round_trip", |b| {
        let mut navigator = Navigator::new(
            RouteTable::standard(),
            MemoryHistory::new("/"),
            |resolution: &Resolution| {
                black_box(resolution);
            },
        );

        b.iter(|| {
            navigator.navigate(black_box("/symbol/MSFT")).unwrap();
            navigator.navigate(black_box("/dashboard")).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_navigate);
criterion_main!(benches);
