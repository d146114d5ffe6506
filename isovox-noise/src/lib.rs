//! Seeded coherent noise used by isovox world generation.
//!
//! The crate is a leaf: no I/O, no global mutable state. Every sampling
//! function is a pure function of its coordinates and seed, so a map generated
//! from the same configuration is identical on every run.
//!
//! - [`noise::GradientNoise`] and the `noise_*d` functions - base gradient noise, 1D to 6D
//! - [`noise::FractalNoise`] - octave layering (FBM, billow, ridged, domain warp)
//! - [`noise::GradientTable`] - the static unit-vector catalogs behind the base noise

pub mod math;
pub mod noise;
