//! Idle wandering for NPCs.
//!
//! An NPC standing around drifts near its home tile. The drift is 1D noise
//! over time, one noise seed per axis, so it is smooth, repeatable for a given
//! entity and never further than the configured radius on either axis.

use glam::Vec2;
use isovox_noise::noise::noise_1d;

/// Mixed into the seed for the second axis.
const AXIS_SALT: i32 = 0x5F35_6495;
/// Spreads consecutive entity ids across the seed space.
const ENTITY_MIX: i32 = 0x27D4_EB2D;

/// Time-driven offset generator for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wanderer {
    seed: i32,
    speed: f32,
    radius: f32,
}

impl Wanderer {
    /// Noise cells crossed per second of game time.
    pub const DEFAULT_SPEED: f32 = 0.35;
    /// Largest offset from home, in tiles.
    pub const DEFAULT_RADIUS: f32 = 1.5;

    /// Create a wanderer with an explicit seed.
    #[must_use]
    pub const fn new(seed: i32, speed: f32, radius: f32) -> Self {
        Self {
            seed,
            speed,
            radius,
        }
    }

    /// A wanderer with default speed and radius, seeded from the world seed
    /// and the entity id.
    #[must_use]
    pub const fn for_entity(world_seed: i32, entity_id: u32) -> Self {
        let seed = world_seed ^ (entity_id as i32).wrapping_mul(ENTITY_MIX);
        Self::new(seed, Self::DEFAULT_SPEED, Self::DEFAULT_RADIUS)
    }

    /// The noise seed for the x axis.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// A copy moving at a different speed.
    #[must_use]
    pub const fn with_speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    /// A copy with a different radius.
    #[must_use]
    pub const fn with_radius(self, radius: f32) -> Self {
        Self { radius, ..self }
    }

    /// Offset from home at `time` seconds.
    #[must_use]
    pub fn offset(&self, time: f32) -> Vec2 {
        let t = time * self.speed;
        Vec2::new(noise_1d(t, self.seed), noise_1d(t, self.seed ^ AXIS_SALT)) * self.radius
    }

    /// Position at `time` for an entity whose home is `home`.
    #[must_use]
    pub fn position(&self, home: Vec2, time: f32) -> Vec2 {
        home + self.offset(time)
    }
}
