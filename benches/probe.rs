//! Benchmarks for tempsweep.
//!
//! Run with: cargo bench

use std::fs::File;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempsweep::{allocate, TempRegistry};

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for occupied in [0usize, 10, 100, 1000] {
        let dir = tempfile::tempdir().unwrap();
        for i in 1..=occupied {
            File::create(dir.path().join(format!("bench{:03}.tmp", i))).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("occupied", occupied), &occupied, |b, _| {
            b.iter(|| black_box(allocate(dir.path(), "bench", ".tmp").unwrap()))
        });
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("defer_1000x_then_cleanup_missing", |b| {
        tempsweep::suppress_diagnostics(true);
        let registry = TempRegistry::new();
        b.iter(|| {
            for i in 0..1000 {
                registry.defer_delete(format!("/nonexistent/tempsweep/{}", i));
            }
            registry.cleanup();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_allocate, bench_registry);
criterion_main!(benches);
