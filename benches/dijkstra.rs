use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_dijkstra::compute;
use lazy_dijkstra::graph::generators::{generate_grid, generate_random};

fn bench_random(c: &mut Criterion) {
    let graph = generate_random(10_000, 4, 100, 42).expect("valid parameters");

    c.bench_function("lazy_dijkstra_random_10k_40k", |b| {
        b.iter(|| {
            let result = compute(&graph, black_box(&0));
            black_box(result.stats.finalized);
        })
    });
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(100, 100, 1).expect("valid parameters");

    c.bench_function("lazy_dijkstra_grid_100x100", |b| {
        b.iter(|| {
            let result = compute(&graph, black_box(&0));
            black_box(result.stats.stale_entries);
        })
    });
}

criterion_group!(benches, bench_random, bench_grid);
criterion_main!(benches);
