//! Minimal simulation driver.
//!
//! Owns the terrain, the movers and one [`CollisionManager`] per mover,
//! indexed alike. Each tick steers every mover straight at its destination
//! and lets its manager resolve collisions against all the others, in index
//! order, so later movers see where earlier ones already moved.
use glam::Vec3;
use hashbrown::HashMap;
use log::debug;

use crate::config::AvoidanceConfig;
use crate::map::{TileCoord, TileMap};
use crate::mover::Mover;
use crate::steering::CollisionManager;
use crate::vector_math::lift;

/// Distance under which a mover counts as arrived.
const ARRIVAL_DISTANCE: f32 = 1e-3;

/// Index of a mover within a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoverId(pub usize);

/// Terrain plus the movers walking on it.
#[derive(Debug, Clone)]
pub struct World {
    map: TileMap,
    config: AvoidanceConfig,
    movers: Vec<Mover>,
    managers: Vec<CollisionManager>,
    tick_count: u64,
}

impl World {
    /// An empty world on `map`; spawned movers use `config`.
    #[must_use]
    pub const fn new(map: TileMap, config: AvoidanceConfig) -> Self {
        Self {
            map,
            config,
            movers: Vec::new(),
            managers: Vec::new(),
            tick_count: 0,
        }
    }

    /// Adds a mover with a fresh collision manager.
    pub fn spawn(&mut self, mover: Mover) -> MoverId {
        let id = MoverId(self.movers.len());
        debug!("spawning mover {} at {:?}", id.0, mover.position);
        self.movers.push(mover);
        self.managers.push(CollisionManager::new(self.config));
        id
    }

    /// The mover with `id`, if spawned.
    #[must_use]
    pub fn mover(&self, id: MoverId) -> Option<&Mover> {
        self.movers.get(id.0)
    }

    /// Mutable access to the mover with `id`, e.g. to issue orders.
    pub fn mover_mut(&mut self, id: MoverId) -> Option<&mut Mover> {
        self.movers.get_mut(id.0)
    }

    /// The collision manager driving the mover with `id`.
    #[must_use]
    pub fn manager(&self, id: MoverId) -> Option<&CollisionManager> {
        self.managers.get(id.0)
    }

    /// All movers in spawn order.
    #[must_use]
    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    /// The terrain.
    #[must_use]
    pub const fn map(&self) -> &TileMap {
        &self.map
    }

    /// Number of completed ticks.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advances every mover by one tick of `elapsed_time`.
    pub fn tick(&mut self, elapsed_time: f32) {
        self.tick_count += 1;
        debug!("tick {}", self.tick_count);

        for (index, manager) in self.managers.iter_mut().enumerate() {
            let (before, rest) = self.movers.split_at_mut(index);
            let Some((mover, after)) = rest.split_first_mut() else {
                break;
            };
            arrive(mover);
            let steering = seek(mover);
            manager.apply_steering(
                mover,
                &self.map,
                steering,
                elapsed_time,
                before.iter().chain(after.iter()),
            );
        }
    }

    /// How many movers stand on each occupied tile.
    #[must_use]
    pub fn occupancy(&self) -> HashMap<TileCoord, u32> {
        let mut counts = HashMap::new();
        for mover in &self.movers {
            *counts
                .entry(TileCoord::containing(mover.position_2d()))
                .or_insert(0) += 1;
        }
        counts
    }
}

/// Steering that turns the current velocity straight at the destination.
///
/// Zero when the mover has no destination, which makes it brake. A mover
/// already moving exactly onto its destination is steered along the
/// remaining displacement instead, so it never brakes short of arrival.
#[must_use]
pub fn seek(mover: &Mover) -> Vec3 {
    mover.destination().map_or(Vec3::ZERO, |destination| {
        let remaining = lift(destination - mover.position_2d());
        let steering = remaining - mover.velocity;
        if steering == Vec3::ZERO {
            remaining
        } else {
            steering
        }
    })
}

fn arrive(mover: &mut Mover) {
    let arrived = mover
        .destination()
        .is_some_and(|destination| mover.position_2d().distance(destination) < ARRIVAL_DISTANCE);
    if arrived {
        mover.mark_destination_reached();
    }
}
