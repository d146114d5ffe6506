#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use isovox_core::config::TerrainConfig;
use isovox_core::worldgen::{TerrainGenerator, Wanderer};
use std::hint::black_box;

fn bench_single_column(c: &mut Criterion) {
    let generator = TerrainGenerator::new(&TerrainConfig::default(), 0);

    c.bench_function("terrain_single_column", |b| {
        b.iter(|| black_box(generator.sample_column(black_box(37), black_box(-12))));
    });
}

fn bench_map_sizes(c: &mut Criterion) {
    let generator = TerrainGenerator::new(&TerrainConfig::default(), 0);

    let mut group = c.benchmark_group("terrain_map");
    for side in [64usize, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &side,
            |b, &s| {
                b.iter(|| black_box(generator.generate(0, 0, s, s)));
            },
        );
    }
    group.finish();
}

fn bench_wanderers(c: &mut Criterion) {
    let wanderers: Vec<Wanderer> = (0..1000).map(|id| Wanderer::for_entity(0, id)).collect();

    c.bench_function("wander_1000_entities", |b| {
        b.iter(|| {
            for wanderer in &wanderers {
                black_box(wanderer.offset(black_box(12.5)));
            }
        });
    });
}

criterion_group!(benches, bench_single_column, bench_map_sizes, bench_wanderers);
criterion_main!(benches);
