//! Performance benchmarks for signal record construction and queries

use biosig_core::SignalRecord;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark record construction across sample counts
fn bench_record_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_construction");

    let sizes = [64, 256, 1024, 4096];

    for &size in &sizes {
        let data: Vec<f64> = (0..size).map(|i| (i as f64 * 0.1).sin()).collect();

        group.bench_with_input(BenchmarkId::new("flat", size), &data, |b, data| {
            b.iter(|| {
                let record = SignalRecord::new(black_box(data.clone()), black_box(250.0), "ecg");
                black_box(record)
            });
        });
    }

    group.finish();
}

/// Benchmark the derived queries on a fixed record
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let data: Vec<f64> = (0..4096).map(|i| (i as f64 * 0.1).sin()).collect();
    let record = SignalRecord::new(data, 1000.0, "emg").unwrap();

    group.bench_function("sample_count", |b| {
        b.iter(|| black_box(record.sample_count()));
    });

    group.bench_function("duration_seconds", |b| {
        b.iter(|| black_box(record.duration_seconds()));
    });

    group.bench_function("time_vector", |b| {
        b.iter(|| black_box(record.time_vector()));
    });

    group.finish();
}

criterion_group!(benches, bench_record_construction, bench_queries);
criterion_main!(benches);
