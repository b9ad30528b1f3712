//! Per-tick sampling of what surrounds a mover.
//!
//! [`Neighbourhood::sample`] gathers the impassable tiles in a small window
//! around the mover and the neighbours standing too close to ignore. The
//! result is rebuilt from scratch every tick; a [`Probe`] then answers
//! collision queries against it for candidate displacements.
use glam::{Vec2, Vec3};

use crate::geometry::BoundingShape;
use crate::map::{TerrainMap, TileCoord};
use crate::mover::Mover;

/// Obstacles and blockers found around a mover on one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighbourhood {
    /// Bounds of impassable tiles near the mover.
    pub obstacles: Vec<BoundingShape>,
    /// Bounds of neighbours inside their required spacing.
    pub blockers: Vec<BoundingShape>,
}

impl Neighbourhood {
    /// Samples terrain within `radius` tiles of the mover and every
    /// neighbour closer than its required spacing.
    pub fn sample<'n, M, I>(mover: &Mover, map: &M, neighbours: I, radius: i32) -> Self
    where
        M: TerrainMap + ?Sized,
        I: IntoIterator<Item = &'n Mover>,
    {
        Self {
            obstacles: sample_obstacles(mover, map, radius),
            blockers: sample_blockers(mover, neighbours),
        }
    }
}

/// Bounds of every impassable tile in the `(2 × radius + 1)²` window centred
/// on the mover's tile. Tiles off the map are skipped.
pub fn sample_obstacles<M>(mover: &Mover, map: &M, radius: i32) -> Vec<BoundingShape>
where
    M: TerrainMap + ?Sized,
{
    let origin = TileCoord::containing(mover.position_2d());
    (-radius..=radius)
        .flat_map(|dx| (-radius..=radius).map(move |dy| origin.offset(dx, dy)))
        .filter_map(|coord| map.tile(coord))
        .filter(|tile| tile.is_impassable())
        .map(|tile| tile.bounds())
        .collect()
}

/// Bounds of every neighbour closer to `mover` than their required spacing.
pub fn sample_blockers<'n, I>(mover: &Mover, neighbours: I) -> Vec<BoundingShape>
where
    I: IntoIterator<Item = &'n Mover>,
{
    neighbours
        .into_iter()
        .filter(|other| mover.distance(other) < mover.required_spacing(other))
        .map(Mover::bounds)
        .collect()
}

/// What a displacement would run into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing.
    Clear,
    /// Impassable terrain or the map edge.
    Terrain,
    /// Another mover.
    Blocker,
    /// Terrain and another mover at once.
    Both,
}

impl Contact {
    /// Whether terrain is involved.
    #[must_use]
    pub const fn hits_terrain(self) -> bool {
        matches!(self, Self::Terrain | Self::Both)
    }

    /// Whether another mover is involved.
    #[must_use]
    pub const fn hits_blocker(self) -> bool {
        matches!(self, Self::Blocker | Self::Both)
    }
}

/// Collision queries for one mover against one tick's neighbourhood.
pub struct Probe<'a> {
    center: Vec2,
    radius: f32,
    map: &'a dyn TerrainMap,
    neighbourhood: &'a Neighbourhood,
}

impl<'a> Probe<'a> {
    /// Builds a probe for a circle of `radius` at `center`.
    #[must_use]
    pub fn new(
        center: Vec2,
        radius: f32,
        map: &'a dyn TerrainMap,
        neighbourhood: &'a Neighbourhood,
    ) -> Self {
        Self {
            center,
            radius,
            map,
            neighbourhood,
        }
    }

    /// Builds a probe for `mover`'s current bounds.
    #[must_use]
    pub fn for_mover(
        mover: &Mover,
        map: &'a dyn TerrainMap,
        neighbourhood: &'a Neighbourhood,
    ) -> Self {
        Self::new(mover.position_2d(), mover.radius, map, neighbourhood)
    }

    /// Centre of the probed circle before any displacement.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// The probed circle moved by `velocity`.
    #[must_use]
    pub fn shape_after(&self, velocity: Vec3) -> BoundingShape {
        BoundingShape::circle(self.center + velocity.truncate(), self.radius)
    }

    /// Whether moving by `velocity` leaves the map or enters an obstacle.
    #[must_use]
    pub fn hits_terrain(&self, velocity: Vec3) -> bool {
        let shape = self.shape_after(velocity);
        !self.map.contains(shape.center()) || shape.collides_any(&self.neighbourhood.obstacles)
    }

    /// Whether moving by `velocity` runs into a blocker.
    #[must_use]
    pub fn hits_blocker(&self, velocity: Vec3) -> bool {
        self.shape_after(velocity)
            .collides_any(&self.neighbourhood.blockers)
    }

    /// Whether moving by `velocity` collides with anything.
    #[must_use]
    pub fn is_blocked(&self, velocity: Vec3) -> bool {
        self.hits_terrain(velocity) || self.hits_blocker(velocity)
    }

    /// Classifies what moving by `velocity` would run into.
    #[must_use]
    pub fn contact(&self, velocity: Vec3) -> Contact {
        match (self.hits_terrain(velocity), self.hits_blocker(velocity)) {
            (false, false) => Contact::Clear,
            (true, false) => Contact::Terrain,
            (false, true) => Contact::Blocker,
            (true, true) => Contact::Both,
        }
    }

    /// Obstacles and blockers the mover already intersects.
    pub fn overlapping(&self) -> impl Iterator<Item = &'a BoundingShape> {
        let shape = self.shape_after(Vec3::ZERO);
        let hood: &'a Neighbourhood = self.neighbourhood;
        hood.obstacles
            .iter()
            .chain(&hood.blockers)
            .filter(move |other| shape.collides(other))
    }

    /// Whether the mover already intersects an obstacle or blocker.
    #[must_use]
    pub fn is_overlapping(&self) -> bool {
        self.overlapping().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MockTerrainMap, Terrain, Tile, TileMap};
    use mockall::predicate::always;

    #[test]
    fn obstacle_window_is_five_by_five() {
        let mut map = MockTerrainMap::new();
        map.expect_tile().with(always()).times(25).returning(|coord| {
            let terrain = if coord == TileCoord::new(12, 8) {
                Terrain::Cliff
            } else {
                Terrain::Ground
            };
            Some(Tile { coord, terrain })
        });
        let mover = Mover::new(Vec3::new(10.5, 10.5, 0.0), 1.0, 0.5);

        let obstacles = sample_obstacles(&mover, &map, 2);

        assert_eq!(
            obstacles,
            vec![BoundingShape::aabb(Vec2::new(12.0, 8.0), Vec2::new(13.0, 9.0))]
        );
    }

    #[test]
    fn obstacles_off_the_map_are_skipped() {
        let mut map = TileMap::open(3, 3);
        map.set_cliff(TileCoord::new(0, 0));
        map.set_cliff(TileCoord::new(2, 2));
        let mover = Mover::new(Vec3::new(0.5, 0.5, 0.0), 1.0, 0.25);

        let obstacles = sample_obstacles(&mover, &map, 2);

        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn only_close_neighbours_block() {
        let mover = Mover::new(Vec3::ZERO, 1.0, 0.5).with_spacing(0.5);
        let near = Mover::new(Vec3::new(1.4, 0.0, 0.0), 1.0, 0.5);
        let far = Mover::new(Vec3::new(1.6, 0.0, 0.0), 1.0, 0.5);

        let blockers = sample_blockers(&mover, [&near, &far]);

        assert_eq!(blockers, vec![near.bounds()]);
    }

    #[test]
    fn contact_reports_map_edge_as_terrain() {
        let map = TileMap::open(4, 4);
        let hood = Neighbourhood::default();
        let probe = Probe::new(Vec2::new(3.5, 2.0), 0.25, &map, &hood);

        assert_eq!(probe.contact(Vec3::new(1.0, 0.0, 0.0)), Contact::Terrain);
        assert_eq!(probe.contact(Vec3::new(-1.0, 0.0, 0.0)), Contact::Clear);
    }

    #[test]
    fn contact_distinguishes_blockers_and_both() {
        let map = TileMap::open(8, 8);
        let hood = Neighbourhood {
            obstacles: vec![BoundingShape::aabb(Vec2::new(5.0, 3.0), Vec2::new(6.0, 4.0))],
            blockers: vec![BoundingShape::circle(Vec2::new(4.5, 4.0), 0.5)],
        };
        let probe = Probe::new(Vec2::new(3.0, 3.5), 0.4, &map, &hood);

        assert_eq!(probe.contact(Vec3::new(1.8, 0.0, 0.0)), Contact::Both);
        assert_eq!(probe.contact(Vec3::new(1.0, 0.5, 0.0)), Contact::Blocker);
        assert_eq!(probe.contact(Vec3::new(0.0, -1.0, 0.0)), Contact::Clear);
        assert!(!probe.is_overlapping());
    }
}
