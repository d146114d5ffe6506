//! Octave layering over the base gradient noise.
//!
//! Every mode scales the input by `frequency` for the first octave, doubles the
//! coordinates for each later octave and samples octave `i` with seed
//! `seed + i`. The hash avalanches well enough that adjacent seeds are already
//! unrelated fields, so no rehash is needed.
//!
//! A single octave is always the plain base sample, whatever the mode.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::gradient_noise::{lattice_noise, noise_2d, noise_3d};
use super::line_noise::noise_1d;

/// How octaves are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalMode {
    /// Amplitude-halved sum, normalized by the amplitudes used.
    #[default]
    Fbm,
    /// Like [`Fbm`](Self::Fbm), but each octave is folded with `|v| * 2 - 1`.
    Billow,
    /// Sum of `1 - |v|` spikes, sharp at each octave's zero crossings.
    Ridged,
    /// Each octave's sample point is pushed around by the previous octave.
    Warp,
}

impl FractalMode {
    /// Every mode in code order.
    pub const ALL: [Self; 4] = [Self::Fbm, Self::Billow, Self::Ridged, Self::Warp];

    /// Stable integer code used by the configuration string.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Fbm => 0,
            Self::Billow => 1,
            Self::Ridged => 2,
            Self::Warp => 3,
        }
    }

    /// Mode for an integer code. Unknown codes fall back to [`Fbm`](Self::Fbm).
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Billow,
            2 => Self::Ridged,
            3 => Self::Warp,
            _ => Self::Fbm,
        }
    }

    /// Lower-case name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fbm => "fbm",
            Self::Billow => "billow",
            Self::Ridged => "ridged",
            Self::Warp => "warp",
        }
    }
}

/// A configured octave pipeline over the base noise.
///
/// This is a small `Copy` value. Reconfiguring means building a new value with
/// the `with_*` methods, so a configuration shared between threads during a
/// generation pass can never change underneath a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FractalRepr")]
pub struct FractalNoise {
    seed: i32,
    frequency: f32,
    mode: FractalMode,
    octaves: u32,
}

impl Default for FractalNoise {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 1.0 / 32.0,
            mode: FractalMode::Fbm,
            octaves: 1,
        }
    }
}

impl FractalNoise {
    /// Create a pipeline.
    ///
    /// `octaves` below 1 is raised to 1. `frequency` is taken as given; zero
    /// or negative values give collapsed or mirrored sampling, not errors.
    #[must_use]
    pub fn new(seed: i32, frequency: f32, mode: FractalMode, octaves: i32) -> Self {
        Self {
            seed,
            frequency,
            mode,
            octaves: octaves.max(1) as u32,
        }
    }

    /// The default seed used by the `sample_*` methods.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Coordinate multiplier for the first octave.
    #[must_use]
    pub const fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Octave combination mode.
    #[must_use]
    pub const fn mode(&self) -> FractalMode {
        self.mode
    }

    /// Number of layered octaves, at least 1.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// A copy with a different seed.
    #[must_use]
    pub const fn with_seed(self, seed: i32) -> Self {
        Self { seed, ..self }
    }

    /// A copy with a different frequency.
    #[must_use]
    pub const fn with_frequency(self, frequency: f32) -> Self {
        Self { frequency, ..self }
    }

    /// A copy with a different mode.
    #[must_use]
    pub const fn with_mode(self, mode: FractalMode) -> Self {
        Self { mode, ..self }
    }

    /// A copy with a different octave count, raised to at least 1.
    #[must_use]
    pub fn with_octaves(self, octaves: i32) -> Self {
        Self {
            octaves: octaves.max(1) as u32,
            ..self
        }
    }

    /// Sample 1D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_1d(&self, x: f32) -> f32 {
        self.sample_1d_with_seed(x, self.seed)
    }

    /// Sample 1D fractal noise with an explicit seed.
    #[must_use]
    pub fn sample_1d_with_seed(&self, x: f32, seed: i32) -> f32 {
        self.layer([x], seed, |[x], s| noise_1d(x, s))
    }

    /// Sample 2D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_2d(&self, x: f32, y: f32) -> f32 {
        self.sample_2d_with_seed(x, y, self.seed)
    }

    /// Sample 2D fractal noise with an explicit seed.
    #[must_use]
    pub fn sample_2d_with_seed(&self, x: f32, y: f32, seed: i32) -> f32 {
        self.layer([x, y], seed, |[x, y], s| noise_2d(x, y, s))
    }

    /// Sample 3D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sample_3d_with_seed(x, y, z, self.seed)
    }

    /// Sample 3D fractal noise with an explicit seed.
    #[must_use]
    pub fn sample_3d_with_seed(&self, x: f32, y: f32, z: f32, seed: i32) -> f32 {
        self.layer([x, y, z], seed, |[x, y, z], s| noise_3d(x, y, z, s))
    }

    /// Sample 4D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        self.sample_4d_with_seed(x, y, z, w, self.seed)
    }

    /// Sample 4D fractal noise with an explicit seed.
    #[must_use]
    pub fn sample_4d_with_seed(&self, x: f32, y: f32, z: f32, w: f32, seed: i32) -> f32 {
        self.layer([x, y, z, w], seed, lattice_noise::<4>)
    }

    /// Sample 5D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_5d(&self, x: f32, y: f32, z: f32, w: f32, u: f32) -> f32 {
        self.sample_5d_with_seed(x, y, z, w, u, self.seed)
    }

    /// Sample 5D fractal noise with an explicit seed.
    #[must_use]
    pub fn sample_5d_with_seed(&self, x: f32, y: f32, z: f32, w: f32, u: f32, seed: i32) -> f32 {
        self.layer([x, y, z, w, u], seed, lattice_noise::<5>)
    }

    /// Sample 6D fractal noise with the bound seed.
    #[must_use]
    pub fn sample_6d(&self, x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> f32 {
        self.sample_6d_with_seed([x, y, z, w, u, v], self.seed)
    }

    /// Sample 6D fractal noise with an explicit seed. The point is passed as an array.
    #[must_use]
    pub fn sample_6d_with_seed(&self, point: [f32; 6], seed: i32) -> f32 {
        self.layer(point, seed, lattice_noise::<6>)
    }

    /// Run the configured pipeline over `base` for a point of any dimension.
    fn layer<const D: usize>(
        &self,
        point: [f32; D],
        seed: i32,
        base: impl Fn([f32; D], i32) -> f32,
    ) -> f32 {
        let point = point.map(|c| saturate(c * self.frequency));
        if self.octaves == 1 {
            return base(point, seed);
        }
        match self.mode {
            FractalMode::Fbm => self.weighted_sum(point, seed, &base, |v| v),
            FractalMode::Billow => self.weighted_sum(point, seed, &base, |v| v.abs() * 2.0 - 1.0),
            FractalMode::Ridged => self.ridged(point, seed, &base),
            FractalMode::Warp => self.warped(point, seed, &base),
        }
    }

    fn weighted_sum<const D: usize>(
        &self,
        mut point: [f32; D],
        seed: i32,
        base: &impl Fn([f32; D], i32) -> f32,
        shape: impl Fn(f32) -> f32,
    ) -> f32 {
        let mut sum = shape(base(point, seed));
        let mut amp = 1.0;
        let mut total = 1.0;
        for i in 1..self.octaves {
            double(&mut point);
            amp *= 0.5;
            sum += shape(base(point, seed.wrapping_add(i as i32))) * amp;
            total += amp;
        }
        sum / total
    }

    fn ridged<const D: usize>(
        &self,
        mut point: [f32; D],
        seed: i32,
        base: &impl Fn([f32; D], i32) -> f32,
    ) -> f32 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        let mut total = 0.0;
        for i in 0..self.octaves {
            if i > 0 {
                double(&mut point);
            }
            let spike = 1.0 - base(point, seed.wrapping_add(i as i32)).abs();
            sum += spike * amp;
            total += amp;
            amp *= 0.5;
        }
        sum * 2.0 / total - 1.0
    }

    fn warped<const D: usize>(
        &self,
        mut point: [f32; D],
        seed: i32,
        base: &impl Fn([f32; D], i32) -> f32,
    ) -> f32 {
        let mut latest = base(point, seed);
        let mut sum = latest;
        let mut amp = 1.0;
        let mut total = 1.0;
        let phase = PI / D as f32;
        for i in 1..self.octaves {
            double(&mut point);
            // latest * 180 degrees; each axis gets its own phase of the same angle.
            let angle = latest * PI;
            for (k, c) in point.iter_mut().enumerate() {
                *c += (angle + k as f32 * phase).sin();
            }
            amp *= 0.5;
            latest = base(point, seed.wrapping_add(i as i32));
            sum += latest * amp;
            total += amp;
        }
        sum / total
    }
}

#[inline]
fn double<const D: usize>(point: &mut [f32; D]) {
    for c in point {
        *c = saturate(*c * 2.0);
    }
}

/// Pin overflowed coordinates to the largest finite value. NaN stays NaN.
#[inline]
fn saturate(c: f32) -> f32 {
    c.clamp(f32::MIN, f32::MAX)
}

/// Accepts either the field object or the backtick configuration string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FractalRepr {
    Serialized(String),
    Fields(FractalFields),
}

#[derive(Deserialize)]
#[serde(default)]
struct FractalFields {
    seed: i32,
    frequency: f32,
    mode: FractalMode,
    octaves: i32,
}

impl Default for FractalFields {
    fn default() -> Self {
        let defaults = FractalNoise::default();
        Self {
            seed: defaults.seed,
            frequency: defaults.frequency,
            mode: defaults.mode,
            octaves: defaults.octaves as i32,
        }
    }
}

impl From<FractalRepr> for FractalNoise {
    fn from(repr: FractalRepr) -> Self {
        match repr {
            FractalRepr::Serialized(data) => Self::deserialize_from_string(&data),
            FractalRepr::Fields(f) => Self::new(f.seed, f.frequency, f.mode, f.octaves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{noise_4d, noise_5d, noise_6d};

    fn grid() -> impl Iterator<Item = (f32, f32)> {
        (0..100).flat_map(|i| (0..100).map(move |j| (i as f32 * 3.7 - 180.0, j as f32 * 2.9)))
    }

    #[test]
    fn octaves_are_clamped() {
        assert_eq!(FractalNoise::new(1, 0.1, FractalMode::Fbm, 0).octaves(), 1);
        assert_eq!(FractalNoise::new(1, 0.1, FractalMode::Fbm, -5).octaves(), 1);
        assert_eq!(FractalNoise::default().with_octaves(-1).octaves(), 1);
        assert_eq!(FractalNoise::default().with_octaves(6).octaves(), 6);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn single_octave_is_the_base_sample_in_every_mode() {
        let frequency = 0.037;
        for mode in FractalMode::ALL {
            let noise = FractalNoise::new(99, frequency, mode, 1);
            for (x, y) in grid().step_by(37) {
                let z = x * 0.5 - y;
                assert_eq!(
                    noise.sample_2d(x, y),
                    noise_2d(x * frequency, y * frequency, 99)
                );
                assert_eq!(
                    noise.sample_3d(x, y, z),
                    noise_3d(x * frequency, y * frequency, z * frequency, 99)
                );
                assert_eq!(noise.sample_1d(x), noise_1d(x * frequency, 99));
                assert_eq!(
                    noise.sample_4d(x, y, z, 1.5),
                    noise_4d(x * frequency, y * frequency, z * frequency, 1.5 * frequency, 99)
                );
                assert_eq!(
                    noise.sample_5d(x, y, z, 1.5, -2.0),
                    noise_5d(
                        x * frequency,
                        y * frequency,
                        z * frequency,
                        1.5 * frequency,
                        -2.0 * frequency,
                        99
                    )
                );
                assert_eq!(
                    noise.sample_6d(x, y, z, 1.5, -2.0, 0.25),
                    noise_6d(
                        x * frequency,
                        y * frequency,
                        z * frequency,
                        1.5 * frequency,
                        -2.0 * frequency,
                        0.25 * frequency,
                        99
                    )
                );
            }
        }
    }

    #[test]
    fn every_mode_stays_bounded() {
        for mode in FractalMode::ALL {
            for octaves in [2, 3, 5] {
                let noise = FractalNoise::new(7, 0.05, mode, octaves);
                for (x, y) in grid() {
                    let v = noise.sample_2d(x, y);
                    assert!(
                        v.abs() < 1.2,
                        "{} x{octaves} gave {v} at ({x}, {y})",
                        mode.name()
                    );
                }
            }
        }
    }

    #[test]
    fn deep_octave_stacks_stay_finite() {
        // Coordinates double per octave and pass the i32 range after ~30
        // octaves and the f32 range after ~130.
        for mode in FractalMode::ALL {
            for octaves in [32, 40, 64, 140] {
                let noise = FractalNoise::new(1, 0.05, mode, octaves);
                for (x, y) in grid().step_by(997) {
                    let v = noise.sample_2d(x + 0.4, y + 0.7);
                    assert!(
                        v.is_finite() && v.abs() < 1.2,
                        "{} x{octaves} gave {v} at ({x}, {y})",
                        mode.name()
                    );
                }
                let v = noise.sample_3d(123.4, 56.7, -8.9);
                assert!(v.is_finite() && v.abs() < 1.2, "{} x{octaves} 3D gave {v}", mode.name());
            }
        }
    }

    #[test]
    fn huge_frequency_does_not_overflow() {
        for mode in FractalMode::ALL {
            let noise = FractalNoise::new(3, 1.0e30, mode, 4);
            for v in [
                noise.sample_1d(1.0e20),
                noise.sample_2d(1.0e20, -1.0e20),
                noise.sample_4d(1.0e20, 2.0, 3.0, -1.0e15),
            ] {
                assert!(v.is_finite() && v.abs() < 1.2, "{} gave {v}", mode.name());
            }
        }
    }

    #[test]
    fn ridged_three_octaves_on_a_dense_grid() {
        let noise = FractalNoise::new(2024, 0.05, FractalMode::Ridged, 3);
        for (x, y) in grid() {
            let v = noise.sample_2d(x, y);
            assert!((-1.05..=1.05).contains(&v), "ridged value {v}");
        }
    }

    #[test]
    fn warp_needs_more_than_one_octave() {
        let single = FractalNoise::new(31, 0.08, FractalMode::Warp, 1);
        let layered = single.with_octaves(4);
        let mut differing = 0;
        for (x, y) in grid().step_by(101) {
            if (single.sample_2d(x, y) - layered.sample_2d(x, y)).abs() > 1e-6 {
                differing += 1;
            }
        }
        assert!(differing > 90, "only {differing} of 100 samples were warped");
    }

    #[test]
    fn modes_give_distinct_fields() {
        let base = FractalNoise::new(5, 0.06, FractalMode::Fbm, 4);
        let sums: Vec<f32> = FractalMode::ALL
            .iter()
            .map(|&mode| {
                let noise = base.with_mode(mode);
                grid().step_by(53).map(|(x, y)| noise.sample_2d(x, y)).sum()
            })
            .collect();
        for i in 0..sums.len() {
            for j in i + 1..sums.len() {
                assert!((sums[i] - sums[j]).abs() > 1e-3);
            }
        }
    }

    #[test]
    fn billow_pulls_the_mean_down() {
        // |v| sits mostly below 0.5, so |v| * 2 - 1 is mostly negative.
        let billow = FractalNoise::new(8, 0.05, FractalMode::Billow, 3);
        let fbm = billow.with_mode(FractalMode::Fbm);
        let count = 10_000.0;
        let fbm_mean: f32 = grid().map(|(x, y)| fbm.sample_2d(x, y)).sum::<f32>() / count;
        let billow_mean: f32 = grid().map(|(x, y)| billow.sample_2d(x, y)).sum::<f32>() / count;
        assert!(fbm_mean.abs() < 0.15, "fbm mean {fbm_mean}");
        assert!(billow_mean < fbm_mean, "billow mean {billow_mean}");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn explicit_seed_overrides_the_bound_one() {
        let noise = FractalNoise::new(1, 0.1, FractalMode::Fbm, 3);
        assert_eq!(
            noise.sample_2d_with_seed(4.0, 5.0, 2),
            noise.with_seed(2).sample_2d(4.0, 5.0)
        );
        assert_ne!(noise.sample_2d(4.3, 5.1), noise.sample_2d_with_seed(4.3, 5.1, 2));
    }

    #[test]
    fn nan_propagates() {
        for mode in FractalMode::ALL {
            let noise = FractalNoise::new(1, 0.1, mode, 3);
            assert!(noise.sample_2d(f32::NAN, 0.0).is_nan());
        }
    }

    #[test]
    fn mode_codes_round_trip() {
        for mode in FractalMode::ALL {
            assert_eq!(FractalMode::from_code(mode.code()), mode);
        }
        assert_eq!(FractalMode::from_code(17), FractalMode::Fbm);
        assert_eq!(FractalMode::from_code(-1), FractalMode::Fbm);
    }

    #[test]
    fn serde_object_and_string_forms() {
        let noise = FractalNoise::new(12, 0.25, FractalMode::Ridged, 4);
        let json = serde_json::to_string(&noise).expect("serializes");
        assert_eq!(
            json,
            r#"{"seed":12,"frequency":0.25,"mode":"ridged","octaves":4}"#
        );
        let back: FractalNoise = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, noise);

        let from_string: FractalNoise =
            serde_json::from_str(r#""`12~0.25~2~4`""#).expect("string form");
        assert_eq!(from_string, noise);

        let clamped: FractalNoise =
            serde_json::from_str(r#"{"octaves":0,"mode":"warp"}"#).expect("partial object");
        assert_eq!(clamped.octaves(), 1);
        assert_eq!(clamped.mode(), FractalMode::Warp);
        assert_eq!(clamped.seed(), 0);
    }
}
