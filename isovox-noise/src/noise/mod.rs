//! Noise generation primitives for isovox terrain.
//!
//! This module provides the sampling building blocks used by world generation:
//!
//! - [`GradientNoise`] - cubic-interpolated gradient noise in 1 to 6 dimensions
//! - [`FractalNoise`] - octave layering over the gradient noise ([`FractalMode`])
//! - [`GradientTable`] - static unit-vector catalogs indexed by hash
//! - [`equalize`] - the contrast correction applied to every base sample
//!
//! Data flows one way: a [`FractalNoise`] calls the base functions with scaled
//! coordinates and derived seeds, the base functions consult the hash and the
//! gradient tables, and nothing ever writes back into either.

mod fractal;
mod gradient_noise;
mod gradients;
mod hash;
mod line_noise;
mod serial;

pub use fractal::{FractalMode, FractalNoise};
pub use gradient_noise::{
    GradientNoise, lattice_noise, noise_2d, noise_3d, noise_4d, noise_5d, noise_6d,
};
pub use gradients::GradientTable;
pub use line_noise::noise_1d;
pub use serial::{SerialError, parse_float_prefix, parse_int_prefix};

/// Spread a noise value toward the ends of its range.
///
/// `x * mul / sqrt(x² + add)`. Monotone and odd, so sign and ordering survive;
/// with `mul = sqrt(1 + add)` the endpoints ±1 map to themselves. Smaller
/// `add` spreads values near zero harder.
#[inline]
#[must_use]
pub fn equalize(x: f32, add: f32, mul: f32) -> f32 {
    x * mul / (x * x + add).sqrt()
}
