//! World generation.
//!
//! Terrain columns come from [`TerrainGenerator`], which shapes fractal noise
//! with a [`HeightCurve`]. NPC idle motion comes from [`Wanderer`].

mod height_curve;
mod terrain;
mod wander;

pub use height_curve::{CurveError, CurvePoint, HeightCurve};
pub use terrain::{Column, Heightmap, Material, TerrainGenerator};
pub use wander::Wanderer;
