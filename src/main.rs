//! Headless demo: two squads cross paths around a cliff.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Vec2, Vec3};
use log::info;
use sidestep::{init_logging, AvoidanceConfig, Mover, TileMap, World};

const DEMO_MAP: &str = "
    ....................
    ....................
    ....................
    ........###.........
    ........###.........
    ........###.........
    ....................
    ....................
    ....................
    ....................
";

/// Collision-aware steering demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 40)]
    ticks: u32,
    /// Seconds elapsed per tick
    #[arg(long, default_value_t = 0.5)]
    elapsed: f32,
    /// JSON file overriding the avoidance tuning
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text map (`.` ground, `#` cliff) replacing the built-in one
    #[arg(long)]
    map: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<AvoidanceConfig> {
    let Some(path) = path else {
        return Ok(AvoidanceConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    AvoidanceConfig::from_json_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn load_map(path: Option<&PathBuf>) -> Result<TileMap> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?,
        None => DEMO_MAP.to_owned(),
    };
    TileMap::from_ascii(&text).context("parsing map")
}

fn spawn_squads(world: &mut World) {
    let rows = [3.5_f32, 4.5, 5.5];
    for y in rows {
        world.spawn(
            Mover::new(Vec3::new(2.5, y, 0.0), 1.0, 0.4)
                .with_spacing(0.2)
                .heading_to(Vec2::new(17.5, 8.5 - y)),
        );
        world.spawn(
            Mover::new(Vec3::new(17.5, y, 0.0), 0.8, 0.4)
                .with_spacing(0.2)
                .heading_to(Vec2::new(2.5, 8.5 - y)),
        );
    }
    world.spawn(
        Mover::new(Vec3::new(10.0, 0.5, 0.0), 2.0, 0.3)
            .flying()
            .heading_to(Vec2::new(10.0, 9.5)),
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let map = load_map(args.map.as_ref())?;
    info!(
        "map {}x{} with {} cliff tiles",
        map.width(),
        map.height(),
        map.cliff_count()
    );

    let mut world = World::new(map, config);
    spawn_squads(&mut world);

    for _ in 0..args.ticks {
        world.tick(args.elapsed);
        let busiest = world.occupancy().into_values().max().unwrap_or(0);
        info!("tick {}: busiest tile holds {busiest}", world.tick_count());
    }

    for (index, mover) in world.movers().iter().enumerate() {
        info!(
            "mover {index}: at {:?}, velocity {:?}, destination {:?}",
            mover.position_2d(),
            mover.velocity.truncate(),
            mover.destination()
        );
    }
    Ok(())
}
