//! Collision-aware steering for realtime strategy units.
//!
//! Once per tick, each mover's [`CollisionManager`] turns a steering impulse
//! into a velocity that keeps clear of cliffs and of neighbouring units,
//! pushes out of existing overlaps, brakes when told to stop and abandons the
//! move order when no heading is free.
//!
//! ```
//! use glam::{Vec2, Vec3};
//! use sidestep::prelude::*;
//!
//! let map = TileMap::open(8, 8);
//! let mut mover = Mover::new(Vec3::new(1.5, 1.5, 0.0), 1.0, 0.4)
//!     .heading_to(Vec2::new(6.5, 1.5));
//! let mut manager = CollisionManager::default();
//! manager.apply_steering(&mut mover, &map, Vec3::X, 1.0, []);
//! assert_eq!(mover.position, Vec3::new(2.5, 1.5, 0.0));
//! ```
pub mod avoidance;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod map;
pub mod mover;
pub mod neighbourhood;
pub mod numeric;
pub mod overlap;
pub mod search;
pub mod steering;
pub mod vector_math;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use avoidance::{Adaptation, AvoidanceState, Outcome};
pub use config::AvoidanceConfig;
pub use error::{ConfigError, MapError, VectorError};
pub use geometry::BoundingShape;
pub use logging::init as init_logging;
pub use map::{TerrainMap, Tile, TileCoord, TileMap};
pub use mover::Mover;
pub use neighbourhood::{Contact, Neighbourhood, Probe};
pub use search::Rotation;
pub use steering::CollisionManager;
pub use world::{MoverId, World};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sidestep::prelude::*;
    //! ```

    pub use crate::AvoidanceConfig;
    pub use crate::CollisionManager;
    pub use crate::Mover;
    pub use crate::TerrainMap;
    pub use crate::TileMap;
    pub use crate::World;
}
