//! Criterion benchmarks for octaver-analysis
//!
//! Run with: cargo bench -p octaver-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use octaver_analysis::signal::sine_samples;
use octaver_analysis::{count_sign_changes, peak, rms};

const SAMPLE_RATE: f32 = 48000.0;

fn bench_zero_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_sign_changes");
    for size in [1024, 8192, 65536] {
        let signal = sine_samples(SAMPLE_RATE, 440.0, size, 1.0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &signal, |b, s| {
            b.iter(|| count_sign_changes(black_box(s)));
        });
    }
    group.finish();
}

fn bench_levels(c: &mut Criterion) {
    let signal = sine_samples(SAMPLE_RATE, 440.0, 8192, 1.0);
    c.bench_function("rms_8192", |b| b.iter(|| rms(black_box(&signal))));
    c.bench_function("peak_8192", |b| b.iter(|| peak(black_box(&signal))));
}

criterion_group!(benches, bench_zero_crossings, bench_levels);
criterion_main!(benches);
