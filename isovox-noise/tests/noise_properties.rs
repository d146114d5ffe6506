//! Behavioural properties of the base and fractal noise.
//!
//! These run against the public API only: determinism, range, seed
//! sensitivity, continuity across lattice boundaries and configuration strings
//! that restore an identical sampler.

use isovox_noise::noise::{
    FractalMode, FractalNoise, GradientNoise, noise_1d, noise_2d, noise_3d, noise_4d, noise_5d,
    noise_6d,
};

/// Deterministic pseudo-random coordinates spread over a wide range.
fn scattered(count: usize) -> Vec<[f32; 6]> {
    let mut state = 0x2545_F491_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f32 / u32::MAX as f32) * 400.0 - 200.0
    };
    (0..count)
        .map(|_| [next(), next(), next(), next(), next(), next()])
        .collect()
}

/// Coordinates around and past the `i32` range, mixed with ordinary ones.
fn far_points() -> Vec<[f32; 6]> {
    const FAR: [f32; 12] = [
        2_147_483_520.0,
        2_147_483_648.0,
        -2_147_483_648.0,
        -2_147_483_904.0,
        4.3e9,
        -4.3e9,
        1.0e12,
        1.0e20,
        -1.0e30,
        1.0e30,
        f32::MAX,
        f32::MIN,
    ];
    let near = [0.37_f32, -12.5, 199.9];
    let mut points = Vec::new();
    for (i, &far) in FAR.iter().enumerate() {
        let n = near[i % near.len()];
        points.push([far; 6]);
        points.push([far, n, far, n, far, n]);
        points.push([n, far, n, -far, n, far]);
    }
    points
}

fn sample_all(p: [f32; 6], seed: i32) -> [f32; 6] {
    [
        noise_1d(p[0], seed),
        noise_2d(p[0], p[1], seed),
        noise_3d(p[0], p[1], p[2], seed),
        noise_4d(p[0], p[1], p[2], p[3], seed),
        noise_5d(p[0], p[1], p[2], p[3], p[4], seed),
        noise_6d(p[0], p[1], p[2], p[3], p[4], p[5], seed),
    ]
}

fn correlation(pairs: &[(f32, f32)]) -> f32 {
    let n = pairs.len() as f64;
    let (mut sa, mut sb) = (0.0f64, 0.0f64);
    for &(a, b) in pairs {
        sa += f64::from(a);
        sb += f64::from(b);
    }
    let (ma, mb) = (sa / n, sb / n);
    let (mut cov, mut va, mut vb) = (0.0f64, 0.0f64, 0.0f64);
    for &(a, b) in pairs {
        let (da, db) = (f64::from(a) - ma, f64::from(b) - mb);
        cov += da * db;
        va += da * da;
        vb += db * db;
    }
    (cov / (va.sqrt() * vb.sqrt())) as f32
}

#[test]
fn same_input_same_output() {
    for p in scattered(500) {
        for seed in [0, -1, 1337] {
            let first = sample_all(p, seed);
            let second = sample_all(p, seed);
            assert_eq!(
                first.map(f32::to_bits),
                second.map(f32::to_bits),
                "non-deterministic at {p:?}"
            );
        }
    }
}

#[test]
fn every_dimension_is_bounded() {
    for seed in [0, 9, -77_777, i32::MAX] {
        for p in scattered(2000) {
            for (i, v) in sample_all(p, seed).into_iter().enumerate() {
                assert!(
                    v.is_finite() && v.abs() < 1.2,
                    "{}D gave {v} at {p:?} with seed {seed}",
                    i + 1
                );
            }
        }
    }
}

#[test]
fn far_coordinates_stay_bounded() {
    for seed in [0, 9, -77_777, i32::MIN, i32::MAX] {
        for p in far_points() {
            for (i, v) in sample_all(p, seed).into_iter().enumerate() {
                assert!(
                    v.is_finite() && v.abs() < 1.2,
                    "{}D gave {v} at {p:?} with seed {seed}",
                    i + 1
                );
            }
        }
    }
}

#[test]
fn deep_fractals_stay_bounded_in_every_mode() {
    let mut points = scattered(200);
    points.extend(far_points());
    for mode in FractalMode::ALL {
        for octaves in [32, 48, 160] {
            let noise = FractalNoise::new(2024, 0.05, mode, octaves);
            for p in &points {
                let values = [
                    noise.sample_1d(p[0]),
                    noise.sample_2d(p[0], p[1]),
                    noise.sample_3d(p[0], p[1], p[2]),
                    noise.sample_6d(p[0], p[1], p[2], p[3], p[4], p[5]),
                ];
                for v in values {
                    assert!(
                        v.is_finite() && v.abs() < 1.2,
                        "{mode:?} with {octaves} octaves gave {v} at {p:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn adjacent_seeds_are_unrelated() {
    let points = scattered(50);
    for dimension in 0..6 {
        let mut pairs = Vec::with_capacity(points.len() * 200);
        for seed in 0..200 {
            for &p in &points {
                let a = sample_all(p, seed)[dimension];
                let b = sample_all(p, seed + 1)[dimension];
                pairs.push((a, b));
            }
        }
        let r = correlation(&pairs);
        assert!(
            r.abs() < 0.3,
            "{}D seeds n and n+1 correlate at {r}",
            dimension + 1
        );
    }
}

#[test]
fn continuous_across_lattice_boundaries() {
    let eps = 1e-4;
    let seed = 4242;
    for cell in -10..10 {
        let edge = cell as f32;
        let off = 0.37;
        let checks = [
            (noise_2d(edge - eps, off, seed), noise_2d(edge + eps, off, seed)),
            (noise_2d(off, edge - eps, seed), noise_2d(off, edge + eps, seed)),
            (
                noise_3d(off, off, edge - eps, seed),
                noise_3d(off, off, edge + eps, seed),
            ),
            (
                noise_4d(edge - eps, off, off, off, seed),
                noise_4d(edge + eps, off, off, off, seed),
            ),
            (
                noise_5d(off, off, off, off, edge - eps, seed),
                noise_5d(off, off, off, off, edge + eps, seed),
            ),
            (
                noise_6d(off, off, off, edge - eps, off, off, seed),
                noise_6d(off, off, off, edge + eps, off, off, seed),
            ),
        ];
        for (i, (before, after)) in checks.into_iter().enumerate() {
            assert!(
                (before - after).abs() < 1e-2,
                "check {i} jumps at {edge}: {before} vs {after}"
            );
        }
    }
}

#[test]
fn cell_centre_differs_from_lattice_point() {
    let noise = GradientNoise::new(123);
    let corner = noise.get_2d(0.0, 0.0);
    let centre = noise.get_2d(0.5, 0.5);
    assert!(corner.abs() < 0.01, "lattice point carries only the hash fraction");
    assert!((centre - corner).abs() > 1e-6);
}

#[test]
fn ridged_three_octaves_stays_near_unit_range() {
    let noise = FractalNoise::new(31_337, 0.043, FractalMode::Ridged, 3);
    for i in 0..100 {
        for j in 0..100 {
            let v = noise.sample_2d(i as f32 * 1.7 - 85.0, j as f32 * 2.3 - 115.0);
            assert!((-1.05..=1.05).contains(&v), "ridged gave {v}");
        }
    }
}

#[test]
fn warp_only_acts_with_several_octaves() {
    let single = FractalNoise::new(64, 0.09, FractalMode::Warp, 1);
    let layered = single.with_octaves(4);
    let x = 12.3;
    let y = -45.6;
    let base = single.sample_2d(x, y);
    assert!(base.abs() > 1e-6, "base sample happened to be zero");
    assert!((base - layered.sample_2d(x, y)).abs() > 1e-6);
}

#[test]
fn configuration_string_restores_an_identical_sampler() {
    let configs = [
        FractalNoise::new(7, 0.031_25, FractalMode::Fbm, 5),
        FractalNoise::new(-1_000_003, 0.011, FractalMode::Billow, 3),
        FractalNoise::new(i32::MAX, 0.27, FractalMode::Ridged, 4),
        FractalNoise::new(0, 1.0 / 3.0, FractalMode::Warp, 2),
    ];
    for original in configs {
        let text = original.serialize_to_string();
        let lenient = FractalNoise::deserialize_from_string(&text);
        let strict: FractalNoise = text.parse().expect("own output parses strictly");
        assert_eq!(lenient, original, "lenient reader changed {text}");
        assert_eq!(strict, original, "strict reader changed {text}");

        for (i, p) in scattered(60).into_iter().enumerate() {
            let seed = i as i32 * 7919 - 200_000;
            let expected = [
                original.sample_1d_with_seed(p[0], seed),
                original.sample_2d_with_seed(p[0], p[1], seed),
                original.sample_3d_with_seed(p[0], p[1], p[2], seed),
                original.sample_6d_with_seed(p, seed),
            ];
            let restored = [
                lenient.sample_1d_with_seed(p[0], seed),
                lenient.sample_2d_with_seed(p[0], p[1], seed),
                lenient.sample_3d_with_seed(p[0], p[1], p[2], seed),
                lenient.sample_6d_with_seed(p, seed),
            ];
            assert_eq!(
                expected.map(f32::to_bits),
                restored.map(f32::to_bits),
                "{text} diverged at {p:?}"
            );
        }
    }
}

#[test]
fn damaged_configuration_still_loads() {
    let noise = FractalNoise::deserialize_from_string("`12abc~0.5.5~7~");
    assert_eq!(noise.seed(), 12);
    assert!((noise.frequency() - 0.5).abs() < f32::EPSILON);
    assert_eq!(noise.mode(), FractalMode::Fbm);
    assert_eq!(noise.octaves(), 1);
    assert!(noise.sample_2d(3.0, 4.0).is_finite());
}
