//! One-dimensional noise.
//!
//! There is no useful gradient direction on a line, so 1D noise blends hashed
//! heights instead. Three 64-bit lanes feed each height: a seed lane fixed per
//! call, a cell lane that steps by a constant per integer cell, and a mix lane
//! that scrambles their combination. The four heights around the sample are
//! blended with a uniform cubic B-spline, which is smooth across cell
//! boundaries and never leaves the range of the heights it blends.

use crate::math::split_cell;

use super::equalize;

const SEED_LANE: u64 = 0x9E37_79B9_7F4A_7C15;
const CELL_STEP: u64 = 0xD1B5_4A32_D192_ED03;
const MIX_LANE: u64 = 0xBEA2_25F9_EB34_556D;

const ADD_1D: f32 = 0.3;
#[allow(clippy::unreadable_literal)]
const MUL_1D: f32 = 1.1401755;

/// Height for one cell in `[-1, 1)`.
#[inline]
fn height(seed_lane: u64, cell_lane: u64) -> f32 {
    let mut mix = seed_lane ^ cell_lane;
    mix = (mix ^ mix >> 32).wrapping_mul(MIX_LANE);
    mix = (mix ^ mix >> 29).wrapping_mul(MIX_LANE);
    mix ^= mix >> 32;
    // Top 24 bits fit an f32 mantissa exactly.
    (mix >> 40) as f32 * (1.0 / (1u32 << 23) as f32) - 1.0
}

/// Sample 1D noise.
///
/// Returns a value in `(-1, 1)` for finite input; NaN input yields NaN.
#[must_use]
pub fn noise_1d(x: f32, seed: i32) -> f32 {
    let (cell, t) = split_cell(x);

    let seed_lane = (i64::from(seed) as u64).wrapping_mul(SEED_LANE);
    let first = (i64::from(cell) - 1) as u64;
    let mut cell_lane = first.wrapping_mul(CELL_STEP);
    let mut heights = [0.0f32; 4];
    for h in &mut heights {
        *h = height(seed_lane, cell_lane);
        cell_lane = cell_lane.wrapping_add(CELL_STEP);
    }

    let t2 = t * t;
    let t3 = t2 * t;
    let s = 1.0 - t;
    let w0 = s * s * s;
    let w1 = 3.0 * t3 - 6.0 * t2 + 4.0;
    let w2 = -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0;
    let w3 = t3;
    let value = (w0 * heights[0] + w1 * heights[1] + w2 * heights[2] + w3 * heights[3]) / 6.0;

    equalize(value, ADD_1D, MUL_1D)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn deterministic() {
        for i in -50..50 {
            let x = i as f32 * 0.37;
            assert_eq!(noise_1d(x, 9), noise_1d(x, 9));
        }
    }

    #[test]
    fn bounded() {
        for seed in [-3, 0, 11, i32::MIN, i32::MAX] {
            for i in -2000..2000 {
                let v = noise_1d(i as f32 * 0.113, seed);
                assert!(v.abs() < 1.0, "value {v} out of range");
            }
        }
    }

    #[test]
    fn continuous_across_cells() {
        for cell in -20..20 {
            let edge = cell as f32;
            let before = noise_1d(edge - 1e-4, 5);
            let after = noise_1d(edge + 1e-4, 5);
            assert!(
                (before - after).abs() < 1e-2,
                "jump at {edge}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn seeds_differ() {
        let a: Vec<f32> = (0..32).map(|i| noise_1d(i as f32 * 0.5, 1)).collect();
        let b: Vec<f32> = (0..32).map(|i| noise_1d(i as f32 * 0.5, 2)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn varies_along_the_line() {
        let values: Vec<f32> = (0..64).map(|i| noise_1d(i as f32 * 0.75, 42)).collect();
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.3, "1D noise should wander, spread {}", max - min);
    }

    #[test]
    fn nan_propagates() {
        assert!(noise_1d(f32::NAN, 0).is_nan());
    }

    #[test]
    fn huge_coordinates_stay_finite_and_bounded() {
        for x in [
            2_147_483_520.0_f32,
            -2_147_483_904.0,
            1.0e12,
            -1.0e20,
            1.0e30,
            f32::MAX,
            f32::MIN,
        ] {
            let v = noise_1d(x, 8);
            assert!(v.is_finite() && v.abs() < 1.0, "value {v} at {x}");
        }
    }

    #[test]
    fn cells_past_the_i32_range_still_differ() {
        // Cell indices wrap instead of clamping, so distant lattice lines
        // are not all the same cell.
        let a = noise_1d(1.0e12, 4);
        let b = noise_1d(3.0e12, 4);
        let c = noise_1d(7.0e15, 4);
        assert!(a != b || b != c, "far cells all collapsed to one value");
    }
}
