use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use primer::parallel::{fill_parallel, fill_sequential};

fn bench_fills(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_fill");
    for size in [100_000usize, 1_000_000, 10_000_000] {
        group.bench_function(BenchmarkId::new("sequential", size), |b| {
            b.iter(|| {
                let filled = fill_sequential(size);
                assert_eq!(filled.len(), size);
            });
        });
        group.bench_function(BenchmarkId::new("parallel", size), |b| {
            b.iter(|| {
                let filled = fill_parallel(size);
                assert_eq!(filled.len(), size);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fills);
criterion_main!(benches);
