//! Cubic-interpolated gradient noise in 2 to 6 dimensions.
//!
//! Each sample hashes the `2^D` lattice corners around the point, takes the
//! dot product of every corner's gradient with the offset from that corner,
//! and blends the corner values with the cubic ease `t² (3 - 2t)` one axis at
//! a time (x first). Dot products shrink as the dimension grows, so the blend
//! is multiplied by a per-dimension scale before [`equalize`]. In 2D the scale
//! maps the theoretical extreme `sqrt(2) / 2` onto 1; from 3D up the scales
//! were measured so the largest observed magnitude sits near 0.9.
//!
//! 2D and 3D are written out by hand because terrain generation samples them
//! in tight loops. [`lattice_noise`] covers every dimension with one routine
//! and agrees with the hand-written versions bit for bit.

use crate::math::{cubic_ease, lerp, split_cell};

use super::equalize;
use super::gradients::{
    GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D, GRADIENTS_5D, GRADIENTS_6D, GradientTable,
};
use super::hash::{
    PRIMES_2D, PRIMES_3D, PRIMES_4D, PRIMES_5D, PRIMES_6D, hash_2d, hash_3d, hash_all,
    hash_offset,
};
use super::line_noise::noise_1d;

#[allow(clippy::unreadable_literal)]
const SCALE_2D: f32 = 1.4142135;
const ADD_2D: f32 = 0.6;
const MUL_2D: f32 = 1.264911;

const SCALE_3D: f32 = 1.45;
const ADD_3D: f32 = 0.4;
const MUL_3D: f32 = 1.183216;

const SCALE_4D: f32 = 1.55;
const ADD_4D: f32 = 0.3;
#[allow(clippy::unreadable_literal)]
const MUL_4D: f32 = 1.1401755;

const SCALE_5D: f32 = 1.9;
const ADD_5D: f32 = 0.25;
const MUL_5D: f32 = 1.118034;

const SCALE_6D: f32 = 2.2;
const ADD_6D: f32 = 0.2;
#[allow(clippy::unreadable_literal)]
const MUL_6D: f32 = 1.0954452;

/// Per-dimension constants for the generic routine.
struct Profile {
    primes: &'static [i32],
    table: &'static GradientTable,
    scale: f32,
    add: f32,
    mul: f32,
}

impl Profile {
    #[inline]
    fn for_dimension(dimension: usize) -> Self {
        match dimension {
            2 => Self {
                primes: &PRIMES_2D,
                table: &GRADIENTS_2D,
                scale: SCALE_2D,
                add: ADD_2D,
                mul: MUL_2D,
            },
            3 => Self {
                primes: &PRIMES_3D,
                table: &GRADIENTS_3D,
                scale: SCALE_3D,
                add: ADD_3D,
                mul: MUL_3D,
            },
            4 => Self {
                primes: &PRIMES_4D,
                table: &GRADIENTS_4D,
                scale: SCALE_4D,
                add: ADD_4D,
                mul: MUL_4D,
            },
            5 => Self {
                primes: &PRIMES_5D,
                table: &GRADIENTS_5D,
                scale: SCALE_5D,
                add: ADD_5D,
                mul: MUL_5D,
            },
            _ => Self {
                primes: &PRIMES_6D,
                table: &GRADIENTS_6D,
                scale: SCALE_6D,
                add: ADD_6D,
                mul: MUL_6D,
            },
        }
    }
}

/// Corner contribution in 2D: gradient dot offset, plus the hash fraction.
#[inline]
pub(crate) fn grad_2d(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    let h = hash_2d(seed, x, y);
    let g = GRADIENTS_2D.lookup(h);
    hash_offset(h) + xd * g[0] + yd * g[1]
}

#[inline]
fn grad_3d(seed: i32, x: i32, y: i32, z: i32, xd: f32, yd: f32, zd: f32) -> f32 {
    let h = hash_3d(seed, x, y, z);
    let g = GRADIENTS_3D.lookup(h);
    hash_offset(h) + xd * g[0] + yd * g[1] + zd * g[2]
}

/// Sample 2D gradient noise.
///
/// Returns a value in `(-1, 1)` for finite input; NaN input yields NaN.
#[must_use]
pub fn noise_2d(x: f32, y: f32, seed: i32) -> f32 {
    let (xf, xd) = split_cell(x);
    let (yf, yd) = split_cell(y);
    let wx = cubic_ease(xd);
    let wy = cubic_ease(yd);

    let [px, py] = PRIMES_2D;
    let x0 = xf.wrapping_mul(px);
    let y0 = yf.wrapping_mul(py);
    let x1 = x0.wrapping_add(px);
    let y1 = y0.wrapping_add(py);

    let value = lerp(
        wy,
        lerp(
            wx,
            grad_2d(seed, x0, y0, xd, yd),
            grad_2d(seed, x1, y0, xd - 1.0, yd),
        ),
        lerp(
            wx,
            grad_2d(seed, x0, y1, xd, yd - 1.0),
            grad_2d(seed, x1, y1, xd - 1.0, yd - 1.0),
        ),
    );
    equalize(value * SCALE_2D, ADD_2D, MUL_2D)
}

/// Sample 3D gradient noise.
///
/// Returns a value in `(-1, 1)` for finite input; NaN input yields NaN.
#[must_use]
pub fn noise_3d(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let (xf, xd) = split_cell(x);
    let (yf, yd) = split_cell(y);
    let (zf, zd) = split_cell(z);
    let wx = cubic_ease(xd);
    let wy = cubic_ease(yd);
    let wz = cubic_ease(zd);

    let [px, py, pz] = PRIMES_3D;
    let x0 = xf.wrapping_mul(px);
    let y0 = yf.wrapping_mul(py);
    let z0 = zf.wrapping_mul(pz);
    let x1 = x0.wrapping_add(px);
    let y1 = y0.wrapping_add(py);
    let z1 = z0.wrapping_add(pz);
    let (xe, ye, ze) = (xd - 1.0, yd - 1.0, zd - 1.0);

    let value = lerp(
        wz,
        lerp(
            wy,
            lerp(
                wx,
                grad_3d(seed, x0, y0, z0, xd, yd, zd),
                grad_3d(seed, x1, y0, z0, xe, yd, zd),
            ),
            lerp(
                wx,
                grad_3d(seed, x0, y1, z0, xd, ye, zd),
                grad_3d(seed, x1, y1, z0, xe, ye, zd),
            ),
        ),
        lerp(
            wy,
            lerp(
                wx,
                grad_3d(seed, x0, y0, z1, xd, yd, ze),
                grad_3d(seed, x1, y0, z1, xe, yd, ze),
            ),
            lerp(
                wx,
                grad_3d(seed, x0, y1, z1, xd, ye, ze),
                grad_3d(seed, x1, y1, z1, xe, ye, ze),
            ),
        ),
    );
    equalize(value * SCALE_3D, ADD_3D, MUL_3D)
}

/// Sample 4D gradient noise.
#[must_use]
pub fn noise_4d(x: f32, y: f32, z: f32, w: f32, seed: i32) -> f32 {
    lattice_noise([x, y, z, w], seed)
}

/// Sample 5D gradient noise.
#[must_use]
pub fn noise_5d(x: f32, y: f32, z: f32, w: f32, u: f32, seed: i32) -> f32 {
    lattice_noise([x, y, z, w, u], seed)
}

/// Sample 6D gradient noise.
#[must_use]
pub fn noise_6d(x: f32, y: f32, z: f32, w: f32, u: f32, v: f32, seed: i32) -> f32 {
    lattice_noise([x, y, z, w, u, v], seed)
}

/// Gradient noise for any dimension from 2 to 6.
///
/// Corner `i` takes the upper lattice neighbour on axis `k` when bit `k` of
/// `i` is set. Corners are then collapsed pairwise, axis 0 first, which is
/// the same nesting the hand-written 2D and 3D samplers use.
#[must_use]
pub fn lattice_noise<const D: usize>(point: [f32; D], seed: i32) -> f32 {
    const { assert!(D >= 2 && D <= 6, "lattice noise covers 2 to 6 dimensions") };
    let profile = Profile::for_dimension(D);

    let mut base = [0i32; D];
    let mut delta = [0.0f32; D];
    let mut weight = [0.0f32; D];
    for k in 0..D {
        let (cell, t) = split_cell(point[k]);
        base[k] = cell.wrapping_mul(profile.primes[k]);
        delta[k] = t;
        weight[k] = cubic_ease(delta[k]);
    }

    // 2^6 corners at most.
    let mut corners = [0.0f32; 64];
    let mut coords = [0i32; D];
    let mut offset = [0.0f32; D];
    for (corner, slot) in corners.iter_mut().enumerate().take(1 << D) {
        for k in 0..D {
            if (corner >> k) & 1 == 1 {
                coords[k] = base[k].wrapping_add(profile.primes[k]);
                offset[k] = delta[k] - 1.0;
            } else {
                coords[k] = base[k];
                offset[k] = delta[k];
            }
        }
        let h = hash_all(seed, &coords);
        *slot = profile.table.dot(h, hash_offset(h), &offset);
    }

    let mut live = 1usize << D;
    for &w in &weight {
        live >>= 1;
        for i in 0..live {
            corners[i] = lerp(w, corners[2 * i], corners[2 * i + 1]);
        }
    }

    equalize(corners[0] * profile.scale, profile.add, profile.mul)
}

/// Gradient noise bound to a default seed.
///
/// The seed only changes through [`with_seed`](Self::with_seed); sampling
/// never mutates anything, so one value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GradientNoise {
    seed: i32,
}

impl GradientNoise {
    /// Create a sampler bound to `seed`.
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// The bound seed.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// A copy bound to a different seed.
    #[must_use]
    pub const fn with_seed(self, seed: i32) -> Self {
        Self { seed }
    }

    /// Sample 1D noise at `x`.
    #[must_use]
    pub fn get_1d(&self, x: f32) -> f32 {
        noise_1d(x, self.seed)
    }

    /// Sample 2D noise at `(x, y)`.
    #[must_use]
    pub fn get_2d(&self, x: f32, y: f32) -> f32 {
        noise_2d(x, y, self.seed)
    }

    /// Sample 3D noise at `(x, y, z)`.
    #[must_use]
    pub fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        noise_3d(x, y, z, self.seed)
    }

    /// Sample 4D noise.
    #[must_use]
    pub fn get_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        noise_4d(x, y, z, w, self.seed)
    }

    /// Sample 5D noise.
    #[must_use]
    pub fn get_5d(&self, x: f32, y: f32, z: f32, w: f32, u: f32) -> f32 {
        noise_5d(x, y, z, w, u, self.seed)
    }

    /// Sample 6D noise.
    #[must_use]
    pub fn get_6d(&self, x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> f32 {
        noise_6d(x, y, z, w, u, v, self.seed)
    }
}
