//! Convenience constructors for movers, maps and formations used in tests.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use sidestep::{Mover, TileCoord, TileMap};

/// Radius given to movers built by [`mover`].
pub const UNIT_RADIUS: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct Coords2D {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Coords3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A grounded unit-speed mover of radius [`UNIT_RADIUS`].
///
/// # Examples
/// ```rust
/// use test_utils::steering::mover;
/// let m = mover((2.0, 3.0));
/// assert_eq!(m.position.x, 2.0);
/// assert_eq!(m.speed, 1.0);
/// ```
pub fn mover<C>(position: C) -> Mover
where
    C: Into<Coords3D>,
{
    let position: Coords3D = position.into();
    Mover::new(position.into(), 1.0, UNIT_RADIUS)
}

/// A [`mover`] with an active destination.
///
/// # Examples
/// ```rust
/// use test_utils::steering::mover_heading_to;
/// let m = mover_heading_to((2.0, 3.0), (9.0, 3.0));
/// assert!(m.has_destination());
/// ```
pub fn mover_heading_to<C, D>(position: C, destination: D) -> Mover
where
    C: Into<Coords3D>,
    D: Into<Coords2D>,
{
    let destination: Coords2D = destination.into();
    mover(position).heading_to(destination.into())
}

/// An all-ground map large enough that its edges never matter.
pub fn open_field() -> TileMap {
    TileMap::open(64, 64)
}

/// An all-ground map with cliffs at the given tiles.
///
/// # Examples
/// ```rust
/// use test_utils::steering::map_with_cliffs;
/// let map = map_with_cliffs(8, 8, &[(3, 3), (3, 4)]);
/// assert_eq!(map.cliff_count(), 2);
/// ```
pub fn map_with_cliffs(width: i32, height: i32, cliffs: &[(i32, i32)]) -> TileMap {
    let mut map = TileMap::open(width, height);
    for &(x, y) in cliffs {
        map.set_cliff(TileCoord::new(x, y));
    }
    map
}

/// `count` stationary movers of `radius`, evenly spaced on a circle of
/// `distance` around `center`, each wanting `spacing` clearance.
///
/// # Examples
/// ```rust
/// use test_utils::steering::ring;
/// let movers = ring((10.0, 10.0), 12, 1.2, 0.6, 0.5);
/// assert_eq!(movers.len(), 12);
/// ```
pub fn ring<C>(center: C, count: u16, distance: f32, radius: f32, spacing: f32) -> Vec<Mover>
where
    C: Into<Coords2D>,
{
    let center: Coords2D = center.into();
    let center = Vec2::from(center);
    (0..count)
        .map(|i| {
            let angle = TAU * f32::from(i) / f32::from(count);
            let at = center + Vec2::from_angle(angle) * distance;
            Mover::new(Vec3::new(at.x, at.y, 0.0), 1.0, radius).with_spacing(spacing)
        })
        .collect()
}
