//! Terrain regression tests.
//!
//! Maps are reduced to an MD5 digest of every column (height, material and
//! path flag, row by row) so two generations can be compared cheaply. The
//! digest must not depend on the thread count, on how the world is split into
//! windows, or on anything but the configuration and the seed.

use isovox_core::config::{TerrainConfig, WorldConfig, resolve_seed};
use isovox_core::worldgen::{Column, Heightmap, TerrainGenerator};

fn consume_column(ctx: &mut md5::Context, column: &Column) {
    ctx.consume(column.height.to_le_bytes());
    ctx.consume(column.material.name().as_bytes());
    ctx.consume([u8::from(column.path)]);
}

fn map_hash(map: &Heightmap) -> String {
    let mut ctx = md5::Context::new();
    for (_, _, column) in map.iter() {
        consume_column(&mut ctx, column);
    }
    format!("{:x}", ctx.finalize())
}

/// Digest of a sub-window, in the same order `map_hash` would see it.
fn window_hash(map: &Heightmap, x0: usize, z0: usize, width: usize, depth: usize) -> String {
    let mut ctx = md5::Context::new();
    for z in z0..z0 + depth {
        for x in x0..x0 + width {
            let column = map.get(x, z).expect("window inside map");
            consume_column(&mut ctx, column);
        }
    }
    format!("{:x}", ctx.finalize())
}

#[test]
fn repeated_generation_is_identical() {
    let generator = TerrainGenerator::new(&TerrainConfig::default(), resolve_seed("regression"));
    let first = map_hash(&generator.generate(-64, -64, 128, 128));
    let second = map_hash(&generator.generate(-64, -64, 128, 128));
    assert_eq!(first, second);
}

#[test]
fn thread_count_does_not_matter() {
    let generator = TerrainGenerator::new(&TerrainConfig::default(), 4242);
    let parallel = map_hash(&generator.generate(0, 0, 96, 96));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("single-thread pool");
    let sequential = pool.install(|| map_hash(&generator.generate(0, 0, 96, 96)));
    assert_eq!(parallel, sequential);
}

#[test]
fn windows_agree_with_the_whole_map() {
    let generator = TerrainGenerator::new(&TerrainConfig::default(), -17);
    let whole = generator.generate(-32, -32, 64, 64);
    for (x0, z0) in [(0, 0), (10, 40), (40, 7)] {
        let window = generator.generate(-32 + x0 as i32, -32 + z0 as i32, 24, 24);
        assert_eq!(
            map_hash(&window),
            window_hash(&whole, x0, z0, 24, 24),
            "window at ({x0}, {z0}) differs from the whole map"
        );
    }
}

#[test]
fn seeds_give_different_worlds() {
    let config = WorldConfig::default();
    let hashes: Vec<String> = ["", "1", "2", "meadow", "tundra"]
        .iter()
        .map(|seed| {
            let generator = TerrainGenerator::new(&config.terrain, resolve_seed(seed));
            map_hash(&generator.generate(0, 0, 48, 48))
        })
        .collect();
    for i in 0..hashes.len() {
        for j in i + 1..hashes.len() {
            assert_ne!(hashes[i], hashes[j], "seed {i} and {j} generated the same map");
        }
    }
}

#[test]
fn noise_string_and_object_build_the_same_world() {
    let from_object = WorldConfig::from_json5(
        r#"{ terrain: { height_noise: { seed: 3, frequency: 0.025, mode: "fbm", octaves: 4 } } }"#,
    )
    .expect("object form");
    let from_string =
        WorldConfig::from_json5(r#"{ terrain: { height_noise: "`3~0.025~0~4`" } }"#)
            .expect("string form");
    let a = TerrainGenerator::new(&from_object.terrain, 8).generate(0, 0, 40, 40);
    let b = TerrainGenerator::new(&from_string.terrain, 8).generate(0, 0, 40, 40);
    assert_eq!(map_hash(&a), map_hash(&b));
}
