#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use isovox_noise::noise::{FractalMode, FractalNoise, lattice_noise, noise_2d, noise_3d};
use std::hint::black_box;

const SIDE: i32 = 64;
const STEP: f32 = 0.173;

fn bench_base_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("base_noise_2d");
    group.bench_function("unrolled", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                for j in 0..SIDE {
                    black_box(noise_2d(i as f32 * STEP, j as f32 * STEP, black_box(42)));
                }
            }
        });
    });
    group.bench_function("lattice", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                for j in 0..SIDE {
                    black_box(lattice_noise([i as f32 * STEP, j as f32 * STEP], black_box(42)));
                }
            }
        });
    });
    group.finish();
}

fn bench_base_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("base_noise_3d");
    group.bench_function("unrolled", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                for j in 0..SIDE {
                    let (x, y) = (i as f32 * STEP, j as f32 * STEP);
                    black_box(noise_3d(x, y, x - y, black_box(42)));
                }
            }
        });
    });
    group.bench_function("lattice", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                for j in 0..SIDE {
                    let (x, y) = (i as f32 * STEP, j as f32 * STEP);
                    black_box(lattice_noise([x, y, x - y], black_box(42)));
                }
            }
        });
    });
    group.finish();
}

// ── Fractal ─────────────────────────────────────────────────────────────────

fn bench_fractal_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractal_2d_4_octaves");
    for mode in FractalMode::ALL {
        let noise = FractalNoise::new(42, 0.02, mode, 4);
        group.bench_with_input(BenchmarkId::from_parameter(mode.name()), &noise, |b, n| {
            b.iter(|| {
                for i in 0..SIDE {
                    for j in 0..SIDE {
                        black_box(n.sample_2d(i as f32, j as f32));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_fractal_dimensions(c: &mut Criterion) {
    let noise = FractalNoise::new(42, 0.02, FractalMode::Fbm, 3);
    let mut group = c.benchmark_group("fractal_fbm_by_dimension");
    group.bench_function("4d", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                let t = i as f32;
                black_box(noise.sample_4d(t, t * 0.5, -t, 3.0));
            }
        });
    });
    group.bench_function("6d", |b| {
        b.iter(|| {
            for i in 0..SIDE {
                let t = i as f32;
                black_box(noise.sample_6d(t, t * 0.5, -t, 3.0, t * 0.25, 1.0));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_base_2d,
    bench_base_3d,
    bench_fractal_modes,
    bench_fractal_dimensions
);
criterion_main!(benches);
