use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabulation::dynamic::{count_change_ways, min_coins_for_change};

fn bench_coin_change(c: &mut Criterion) {
    let coins = [1_u32, 2, 5, 10, 20, 50, 100, 200];
    let mut group = c.benchmark_group("coin_change");

    for &amount in &[100_u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("min_coins", amount), &amount, |b, &amount| {
            b.iter(|| min_coins_for_change(black_box(&coins), black_box(amount)))
        });
        group.bench_with_input(BenchmarkId::new("count_ways", amount), &amount, |b, &amount| {
            b.iter(|| count_change_ways(black_box(&coins), black_box(amount)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coin_change);
criterion_main!(benches);
