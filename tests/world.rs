//! Multi-tick runs of the simulation driver.
use glam::{Vec2, Vec3};
use rstest::{fixture, rstest};
use sidestep::{AvoidanceConfig, Mover, TerrainMap, TileCoord, TileMap, World};
use test_utils::steering::map_with_cliffs;

const WALL: [(i32, i32); 3] = [(6, 2), (6, 3), (6, 4)];

/// A 12x7 field split by a three-tile cliff wall at x = 6.
#[fixture]
fn walled_field() -> TileMap {
    map_with_cliffs(12, 7, &WALL)
}

fn touches_wall(map: &TileMap, mover: &Mover) -> bool {
    WALL.iter()
        .filter_map(|&(x, y)| map.tile(TileCoord::new(x, y)))
        .any(|tile| tile.bounds().collides(&mover.bounds()))
}

#[rstest]
fn ground_mover_detours_around_wall(walled_field: TileMap) {
    let mut world = World::new(walled_field, AvoidanceConfig::default());
    let id = world.spawn(
        Mover::new(Vec3::new(2.5, 3.5, 0.0), 1.0, 0.4).heading_to(Vec2::new(10.5, 3.5)),
    );

    let mut rerouted = false;
    for _ in 0..20 {
        world.tick(1.0);
        let mover = world.mover(id).expect("spawned mover");
        assert!(
            !touches_wall(world.map(), mover),
            "mover entered the wall at {:?} on tick {}",
            mover.position,
            world.tick_count()
        );
        rerouted |= (mover.position.y - 3.5).abs() > 0.5;
    }

    let mover = world.mover(id).expect("spawned mover");
    assert!(rerouted, "mover never left the straight line");
    assert!(!mover.has_destination());
    assert!(
        mover.position_2d().distance(Vec2::new(10.5, 3.5)) < 0.25,
        "mover stopped at {:?}",
        mover.position
    );
    assert_eq!(mover.velocity, Vec3::ZERO);
    let manager = world.manager(id).expect("manager");
    assert!(manager.state().is_resting());
}

#[rstest]
fn flyer_crosses_the_wall(walled_field: TileMap) {
    let mut world = World::new(walled_field, AvoidanceConfig::default());
    let id = world.spawn(
        Mover::new(Vec3::new(2.5, 3.5, 0.0), 1.0, 0.4)
            .flying()
            .heading_to(Vec2::new(10.5, 3.5)),
    );

    for _ in 0..4 {
        world.tick(1.0);
    }
    let over_wall = world.mover(id).expect("spawned mover").position_2d();
    assert_eq!(over_wall, Vec2::new(6.5, 3.5));
    let tile = world
        .map()
        .tile(TileCoord::containing(over_wall))
        .expect("tile on map");
    assert!(tile.is_impassable());

    for _ in 0..4 {
        world.tick(1.0);
    }
    assert_eq!(
        world.mover(id).expect("spawned mover").position_2d(),
        Vec2::new(10.5, 3.5)
    );
}

#[rstest]
fn movers_heading_into_each_other_pass_without_touching() {
    let mut world = World::new(TileMap::open(20, 9), AvoidanceConfig::default());
    let west = world.spawn(
        Mover::new(Vec3::new(3.5, 4.5, 0.0), 1.0, 0.4)
            .with_spacing(1.0)
            .heading_to(Vec2::new(16.5, 4.5)),
    );
    let east = world.spawn(
        Mover::new(Vec3::new(16.5, 4.5, 0.0), 1.0, 0.4)
            .with_spacing(1.0)
            .heading_to(Vec2::new(3.5, 4.5)),
    );

    for _ in 0..30 {
        world.tick(0.5);
        let a = world.mover(west).expect("west mover");
        let b = world.mover(east).expect("east mover");
        assert!(
            a.distance(b) >= a.radius + b.radius - 1e-4,
            "movers overlapped at {:?} and {:?}",
            a.position,
            b.position
        );
    }

    for (id, destination) in [(west, Vec2::new(16.5, 4.5)), (east, Vec2::new(3.5, 4.5))] {
        let mover = world.mover(id).expect("spawned mover");
        assert!(!mover.has_destination());
        assert!(
            mover.position_2d().distance(destination) < 0.1,
            "{id:?} stopped at {:?}",
            mover.position
        );
    }
}
