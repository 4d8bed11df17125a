use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use order_statistics::sort::{median, select_deterministic, select_random};

fn shuffled(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut values: Vec<i32> = (0..n as i32).collect();
    values.shuffle(&mut rng);
    values
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for &n in &[1_000usize, 10_000, 100_000] {
        let data = shuffled(n, 7);
        let k = n / 2;

        group.bench_with_input(BenchmarkId::new("select_random", n), &data, |b, data| {
            b.iter(|| {
                let mut copy = data.clone();
                black_box(select_random(&mut copy, black_box(k)).unwrap())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("select_deterministic", n),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut copy = data.clone();
                    black_box(select_deterministic(&mut copy, black_box(k)).unwrap())
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("sort_then_index", n), &data, |b, data| {
            b.iter(|| {
                let mut copy = data.clone();
                copy.sort_unstable();
                black_box(copy[k])
            })
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let data = shuffled(10_000, 11);
    c.bench_function("median_10k", |b| {
        b.iter(|| black_box(median(black_box(&data)).unwrap()))
    });
}

criterion_group!(benches, bench_selection, bench_median);
criterion_main!(benches);
