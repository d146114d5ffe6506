//! Isovox map generator.
//!
//! Usage: `isovox [config-path]`. Loads the world configuration (default
//! `isovox.json5`), generates the map and prints a coloured top-down preview.
//! Set `RUST_LOG` to change the log level.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use isovox_core::config::WorldConfig;
use isovox_core::worldgen::{Column, Heightmap, Material, TerrainGenerator, Wanderer};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const DEFAULT_CONFIG: &str = "isovox.json5";

fn main() -> anyhow::Result<()> {
    init_logging();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);
    let config = WorldConfig::load(&path)
        .with_context(|| format!("could not load config {}", path.display()))?;

    let seed = config.resolved_seed();
    log::info!("Seed {:?} resolved to {seed}", config.seed);
    log::info!("Terrain: {}", config.terrain);

    let map = {
        let _span = tracing::info_span!("generate", seed).entered();
        let start = Instant::now();
        let generator = TerrainGenerator::new(&config.terrain, seed);
        let map = generator.generate(
            config.origin_x,
            config.origin_z,
            config.width as usize,
            config.depth as usize,
        );
        log::info!(
            "Generated {}x{} map in {:?}",
            map.width(),
            map.depth(),
            start.elapsed()
        );
        map
    };

    print_preview(&map).context("could not write the map preview")?;

    let mut counts: Vec<(Material, usize)> = map.material_counts().into_iter().collect();
    counts.sort_unstable();
    for (material, count) in counts {
        log::info!("{material}: {count} columns");
    }
    if let Some(height) = map.max_height() {
        log::info!("Highest column: {height}");
    }

    for id in 0..3 {
        let wanderer = Wanderer::for_entity(seed, id);
        let drift = wanderer.offset(10.0);
        log::debug!("NPC {id} drifts ({:.2}, {:.2}) after 10s", drift.x, drift.y);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Also installs the bridge that forwards `log` records.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("Failed to install the log subscriber: {e}");
    }
}

const fn glyph(column: &Column) -> (char, Color) {
    match column.material {
        Material::Water => ('~', Color::Blue),
        Material::Sand => ('.', Color::Yellow),
        Material::Grass => ('"', Color::Green),
        Material::Stone if column.path => ('=', Color::Grey),
        Material::Stone => ('^', Color::DarkGrey),
        Material::Snow => ('*', Color::White),
        Material::Path => ('#', Color::DarkYellow),
    }
}

fn print_preview(map: &Heightmap) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for z in 0..map.depth() {
        let Some(row) = map.row(z) else {
            break;
        };
        for column in row {
            let (symbol, color) = glyph(column);
            queue!(out, SetForegroundColor(color), Print(symbol))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}
