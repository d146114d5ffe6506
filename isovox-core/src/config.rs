//! World configuration, loaded from a JSON5 file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! playable world. Noise settings accept either the field object or the
//! compact backtick string, e.g. `` "`0~0.02~0~5`" ``.

use std::io;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

use isovox_noise::noise::{FractalMode, FractalNoise};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::worldgen::HeightCurve;

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json5::Error,
    },
}

/// Top-level world settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed. Empty means 0, a number is used as is, other text is hashed.
    pub seed: String,
    /// Map width in columns.
    pub width: u32,
    /// Map depth in columns.
    pub depth: u32,
    /// World x coordinate of the first column.
    pub origin_x: i32,
    /// World z coordinate of the first row.
    pub origin_z: i32,
    /// Terrain shaping.
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            width: 96,
            depth: 40,
            origin_x: 0,
            origin_z: 0,
            terrain: TerrainConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Load the configuration at `path`.
    ///
    /// A missing file is not an error: the defaults are returned and the fact
    /// is logged.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_json5(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, serde_json5::Error> {
        serde_json5::from_str(text)
    }

    /// The numeric world seed.
    #[must_use]
    pub fn resolved_seed(&self) -> i32 {
        resolve_seed(&self.seed)
    }
}

/// Turn a seed string into a numeric seed.
///
/// Empty (or blank) text gives 0. Text that parses as an integer gives that
/// integer truncated to 32 bits. Anything else is hashed with `h = h * 31 + byte`.
#[must_use]
pub fn resolve_seed(text: &str) -> i32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    text.parse::<i64>().map_or_else(
        |_| {
            text.bytes()
                .fold(0i32, |hash, byte| hash.wrapping_mul(31).wrapping_add(i32::from(byte)))
        },
        |seed| seed as i32,
    )
}

/// Terrain shaping parameters.
///
/// Noise seeds here are offsets added to the world seed, so one file can
/// describe many worlds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise driving the column height.
    pub height_noise: FractalNoise,
    /// Noise whose ridges become paths.
    pub path_noise: FractalNoise,
    /// Maps the height noise to a fraction of `max_height`.
    pub height_curve: HeightCurve,
    /// Tallest possible column.
    pub max_height: i32,
    /// Columns below this are water.
    pub sea_level: i32,
    /// Columns less than this far above sea level are sand.
    pub beach_width: i32,
    /// Columns at or above this are bare stone.
    pub stone_level: i32,
    /// Columns at or above this are snow.
    pub snow_level: i32,
    /// Path noise at or above this marks a path.
    pub path_threshold: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            height_noise: FractalNoise::new(0, 1.0 / 48.0, FractalMode::Fbm, 5),
            path_noise: FractalNoise::new(1000, 1.0 / 40.0, FractalMode::Ridged, 2),
            height_curve: HeightCurve::default(),
            max_height: 64,
            sea_level: 18,
            beach_width: 2,
            stone_level: 40,
            snow_level: 52,
            path_threshold: 0.8,
        }
    }
}

impl fmt::Display for TerrainConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "height {} path {} (sea {}, stone {}, snow {}, max {})",
            self.height_noise,
            self.path_noise,
            self.sea_level,
            self.stone_level,
            self.snow_level,
            self.max_height
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn seed_resolution() {
        assert_eq!(resolve_seed(""), 0);
        assert_eq!(resolve_seed("   "), 0);
        assert_eq!(resolve_seed("42"), 42);
        assert_eq!(resolve_seed("-7"), -7);
        assert_eq!(resolve_seed("4294967297"), 1);
        // "a" = 97, "ab" = 97 * 31 + 98
        assert_eq!(resolve_seed("a"), 97);
        assert_eq!(resolve_seed("ab"), 3105);
        assert_ne!(resolve_seed("isovox"), resolve_seed("isovoy"));
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = WorldConfig::from_json5("{}").expect("empty object parses");
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn json5_with_comments_and_noise_strings() {
        let text = r#"{
            // trailing commas and comments are fine
            seed: "meadow",
            width: 32,
            terrain: {
                height_noise: "`5~0.03~1~4`",
                path_noise: { mode: "ridged", octaves: 3, seed: 9 },
                sea_level: 12,
            },
        }"#;
        let config = WorldConfig::from_json5(text).expect("valid config");
        assert_eq!(config.width, 32);
        assert_eq!(config.depth, WorldConfig::default().depth);
        assert_eq!(config.resolved_seed(), resolve_seed("meadow"));
        assert_eq!(
            config.terrain.height_noise,
            FractalNoise::new(5, 0.03, FractalMode::Billow, 4)
        );
        assert_eq!(config.terrain.path_noise.octaves(), 3);
        assert_eq!(config.terrain.path_noise.seed(), 9);
        assert_eq!(config.terrain.sea_level, 12);
        assert_eq!(config.terrain.max_height, 64);
    }

    #[test]
    fn custom_height_curve_is_validated() {
        let good = r"{ terrain: { height_curve: [
            { input: -1.0, height: 0.0, slope: 0.5 },
            { input: 1.0, height: 1.0, slope: 0.5 },
        ] } }";
        let config = WorldConfig::from_json5(good).expect("sorted curve");
        assert_eq!(config.terrain.height_curve.points().len(), 2);

        let bad = r"{ terrain: { height_curve: [
            { input: 1.0, height: 0.0, slope: 0.0 },
            { input: -1.0, height: 1.0, slope: 0.0 },
        ] } }";
        assert!(WorldConfig::from_json5(bad).is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = WorldConfig::load("/nonexistent/isovox/world.json5").expect("defaults");
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = env::temp_dir().join(format!("isovox-bad-{}.json5", process::id()));
        fs::write(&path, "{ width: ").expect("temp file writes");
        let result = WorldConfig::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
