use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabulation::dynamic::{count_subsets_with_sum, is_subset_sum, min_subset_sum_difference};

fn items(len: usize) -> Vec<u32> {
    (0..len as u32).map(|i| (i * 37 + 11) % 97 + 1).collect()
}

fn bench_subset_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_sum");

    for &len in &[10, 50, 200] {
        let input = items(len);
        let target: u32 = input.iter().sum::<u32>() / 3;

        group.bench_with_input(BenchmarkId::new("feasible", len), &input, |b, input| {
            b.iter(|| is_subset_sum(black_box(input), black_box(target)))
        });
        // Counts for the largest input exceed u128.
        if len <= 50 {
            group.bench_with_input(BenchmarkId::new("count", len), &input, |b, input| {
                b.iter(|| count_subsets_with_sum(black_box(input), black_box(target)))
            });
        }
        group.bench_with_input(BenchmarkId::new("min_difference", len), &input, |b, input| {
            b.iter(|| min_subset_sum_difference(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_subset_sum);
criterion_main!(benches);
