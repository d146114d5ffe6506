//! World generation for isovox.
//!
//! Turns a [`config::WorldConfig`] into a tile map: a height and a surface
//! material per column plus a path overlay, and drives the idle wandering of
//! NPCs. All randomness comes from the seeded noise in `isovox-noise`, so the
//! same configuration always yields the same world.

pub mod config;
pub mod worldgen;
