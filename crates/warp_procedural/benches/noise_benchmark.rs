//! Benchmark for noise generation performance.
//!
//! TARGET: two shake samples per frame are free; 1,000,000 samples well
//! under a millisecond per thousand.
//!
//! Run with: cargo bench --package warp_procedural --bench noise_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use warp_procedural::{noise_1d, octave_noise};

fn benchmark_single_sample(c: &mut Criterion) {
    c.bench_function("single_noise_1d_sample", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            if x > 256.0 {
                x = 0.0;
            }
            black_box(noise_1d(black_box(x)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise_1d_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = (i % 10_000) as f32 * 0.01;
                black_box(noise_1d(x));
            }
        });
    });

    group.finish();
}

fn benchmark_shake_octaves(c: &mut Criterion) {
    c.bench_function("octave_noise_shake_2_octaves", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.48;
            if t > 10.0 {
                t = 0.3;
            }
            black_box(octave_noise(black_box(t), 2, 1.5, 0.75))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_shake_octaves
);
criterion_main!(benches);
