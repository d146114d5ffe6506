//! Heightmap terrain over a 2D tile grid.
//!
//! Each column gets its height from fractal noise pushed through the
//! [`HeightCurve`], a surface material from the height band it falls in, and a
//! path flag where the ridged path noise peaks. Columns are independent, so a
//! map is generated row by row in parallel and any window of the world can be
//! generated on its own with identical results.

use std::fmt;
use std::time::Instant;

use isovox_noise::noise::FractalNoise;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::HeightCurve;
use crate::config::TerrainConfig;

/// Surface material of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    /// Below sea level.
    #[default]
    Water,
    /// Just above sea level.
    Sand,
    /// Lowland.
    Grass,
    /// High ground.
    Stone,
    /// Peaks.
    Snow,
    /// A path crossing sand or grass.
    Path,
}

impl Material {
    /// Every material.
    pub const ALL: [Self; 6] = [
        Self::Water,
        Self::Sand,
        Self::Grass,
        Self::Stone,
        Self::Snow,
        Self::Path,
    ];

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Stone => "stone",
            Self::Snow => "snow",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One generated column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Column {
    /// Height in tiles, within `0..=max_height`.
    pub height: i32,
    /// Surface material.
    pub material: Material,
    /// Whether the path noise marks this column. Stone and snow keep their
    /// material even when marked.
    pub path: bool,
}

/// Samples terrain columns for one world seed.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    height_noise: FractalNoise,
    path_noise: FractalNoise,
    curve: HeightCurve,
    max_height: i32,
    sea_level: i32,
    beach_width: i32,
    stone_level: i32,
    snow_level: i32,
    path_threshold: f32,
}

impl TerrainGenerator {
    /// Create a generator. Noise seeds in `config` are offsets from `seed`.
    #[must_use]
    pub fn new(config: &TerrainConfig, seed: i32) -> Self {
        let height_noise = config
            .height_noise
            .with_seed(seed.wrapping_add(config.height_noise.seed()));
        let path_noise = config
            .path_noise
            .with_seed(seed.wrapping_add(config.path_noise.seed()));
        log::debug!("Terrain noise for seed {seed}: height {height_noise}, path {path_noise}");
        Self {
            height_noise,
            path_noise,
            curve: config.height_curve.clone(),
            max_height: config.max_height.max(0),
            sea_level: config.sea_level,
            beach_width: config.beach_width,
            stone_level: config.stone_level,
            snow_level: config.snow_level,
            path_threshold: config.path_threshold,
        }
    }

    /// The seeded height noise.
    #[must_use]
    pub const fn height_noise(&self) -> &FractalNoise {
        &self.height_noise
    }

    /// The seeded path noise.
    #[must_use]
    pub const fn path_noise(&self) -> &FractalNoise {
        &self.path_noise
    }

    /// Column height at world coordinates.
    #[must_use]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let value = self.height_noise.sample_2d(x as f32, z as f32);
        let fraction = self.curve.evaluate(value);
        // NaN casts to 0.
        ((fraction * self.max_height as f32).round() as i32).clamp(0, self.max_height)
    }

    /// Material for a height, before paths are applied.
    #[must_use]
    pub const fn material_for(&self, height: i32) -> Material {
        if height < self.sea_level {
            Material::Water
        } else if height < self.sea_level + self.beach_width {
            Material::Sand
        } else if height >= self.snow_level {
            Material::Snow
        } else if height >= self.stone_level {
            Material::Stone
        } else {
            Material::Grass
        }
    }

    /// Generate the column at world coordinates.
    #[must_use]
    pub fn sample_column(&self, x: i32, z: i32) -> Column {
        let height = self.height_at(x, z);
        let mut material = self.material_for(height);
        let path = material != Material::Water
            && self.path_noise.sample_2d(x as f32, z as f32) >= self.path_threshold;
        if path && matches!(material, Material::Grass | Material::Sand) {
            material = Material::Path;
        }
        Column {
            height,
            material,
            path,
        }
    }

    /// Generate a `width` by `depth` window whose first column is at
    /// `(origin_x, origin_z)`. Rows are generated in parallel.
    #[must_use]
    pub fn generate(&self, origin_x: i32, origin_z: i32, width: usize, depth: usize) -> Heightmap {
        let start = Instant::now();
        let columns: Vec<Column> = (0..depth)
            .into_par_iter()
            .flat_map_iter(|row| {
                let z = origin_z.wrapping_add(row as i32);
                (0..width).map(move |col| self.sample_column(origin_x.wrapping_add(col as i32), z))
            })
            .collect();
        log::debug!(
            "Generated {width}x{depth} terrain at ({origin_x}, {origin_z}) in {:?}",
            start.elapsed()
        );
        Heightmap {
            origin_x,
            origin_z,
            width,
            depth,
            columns,
        }
    }
}

/// A generated window of columns, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    origin_x: i32,
    origin_z: i32,
    width: usize,
    depth: usize,
    columns: Vec<Column>,
}

impl Heightmap {
    /// Columns per row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// World coordinates of the first column.
    #[must_use]
    pub const fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_z)
    }

    /// Column at local coordinates, if inside the map.
    #[must_use]
    pub fn get(&self, x: usize, z: usize) -> Option<&Column> {
        if x >= self.width || z >= self.depth {
            return None;
        }
        self.columns.get(z * self.width + x)
    }

    /// One row of columns.
    #[must_use]
    pub fn row(&self, z: usize) -> Option<&[Column]> {
        if z >= self.depth {
            return None;
        }
        let start = z.checked_mul(self.width)?;
        self.columns.get(start..start.checked_add(self.width)?)
    }

    /// All columns with their local coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Column)> + '_ {
        self.columns.iter().enumerate().map(move |(i, column)| {
            let (z, x) = (i / self.width, i % self.width);
            (x, z, column)
        })
    }

    /// How many columns use each material.
    #[must_use]
    pub fn material_counts(&self) -> FxHashMap<Material, usize> {
        let mut counts = FxHashMap::default();
        for column in &self.columns {
            *counts.entry(column.material).or_insert(0) += 1;
        }
        counts
    }

    /// Tallest column, or `None` for an empty map.
    #[must_use]
    pub fn max_height(&self) -> Option<i32> {
        self.columns.iter().map(|c| c.height).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: i32) -> TerrainGenerator {
        TerrainGenerator::new(&TerrainConfig::default(), seed)
    }

    #[test]
    fn heights_stay_in_range() {
        let generator = generator(11);
        let map = generator.generate(-40, -40, 80, 80);
        for (_, _, column) in map.iter() {
            assert!((0..=64).contains(&column.height));
        }
    }

    #[test]
    fn material_bands() {
        let generator = generator(0);
        assert_eq!(generator.material_for(0), Material::Water);
        assert_eq!(generator.material_for(17), Material::Water);
        assert_eq!(generator.material_for(18), Material::Sand);
        assert_eq!(generator.material_for(19), Material::Sand);
        assert_eq!(generator.material_for(20), Material::Grass);
        assert_eq!(generator.material_for(39), Material::Grass);
        assert_eq!(generator.material_for(40), Material::Stone);
        assert_eq!(generator.material_for(52), Material::Snow);
    }

    #[test]
    fn paths_never_cross_water() {
        let config = TerrainConfig {
            path_threshold: -2.0,
            ..TerrainConfig::default()
        };
        let generator = TerrainGenerator::new(&config, 3);
        let map = generator.generate(0, 0, 64, 64);
        for (_, _, column) in map.iter() {
            if column.height < config.sea_level {
                assert_eq!(column.material, Material::Water);
                assert!(!column.path);
            } else {
                assert!(column.path);
                assert!(!matches!(column.material, Material::Grass | Material::Sand));
            }
        }
    }

    #[test]
    fn generated_map_matches_single_columns() {
        let generator = generator(77);
        let map = generator.generate(10, -5, 17, 9);
        assert_eq!(map.origin(), (10, -5));
        for z in 0..9 {
            for x in 0..17 {
                assert_eq!(
                    map.get(x, z).copied(),
                    Some(generator.sample_column(10 + x as i32, -5 + z as i32))
                );
            }
        }
        assert!(map.get(17, 0).is_none());
        assert!(map.get(0, 9).is_none());
        assert_eq!(map.row(2).map(<[Column]>::len), Some(17));
        assert!(map.row(9).is_none());
    }

    #[test]
    fn far_rows_and_columns_are_absent() {
        let map = generator(2).generate(0, 0, 4, 3);
        assert!(map.row(usize::MAX).is_none());
        assert!(map.row(3).is_none());
        assert!(map.get(0, usize::MAX).is_none());
        assert!(map.get(usize::MAX, 0).is_none());
        assert!(map.get(usize::MAX, usize::MAX).is_none());
        assert_eq!(map.row(2).map(<[Column]>::len), Some(4));

        let wide = generator(2).generate(0, 0, usize::MAX, 0);
        assert!(wide.row(0).is_none());
        assert!(wide.row(1).is_none());
        assert!(wide.get(5, 1).is_none());
    }

    #[test]
    fn counts_cover_every_column() {
        let map = generator(5).generate(0, 0, 50, 30);
        let counts = map.material_counts();
        assert_eq!(counts.values().sum::<usize>(), 1500);
        assert!(map.max_height().is_some());
    }

    #[test]
    fn empty_window() {
        let map = generator(5).generate(0, 0, 0, 10);
        assert_eq!(map.iter().count(), 0);
        assert!(map.max_height().is_none());
        assert!(map.material_counts().is_empty());
    }

    #[test]
    fn world_seed_offsets_config_seeds() {
        let generator = generator(100);
        assert_eq!(generator.height_noise().seed(), 100);
        assert_eq!(generator.path_noise().seed(), 1100);
    }
}
