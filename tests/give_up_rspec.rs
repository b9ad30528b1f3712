//! Behaviour-driven tests using rust-rspec.
//!
//! A mover boxed in by a ring of neighbours keeps finding every heading
//! blocked, raises its tolerance past the limit and abandons its order.
use glam::{Vec2, Vec3};
use sidestep::{AvoidanceConfig, AvoidanceState, CollisionManager, Mover, TileMap, DEGREE};
use test_utils::steering::{mover_heading_to, open_field, ring};

#[derive(Clone, Debug)]
struct BoxedIn {
    map: TileMap,
    crowd: Vec<Mover>,
    unit: Mover,
    manager: CollisionManager,
}

impl Default for BoxedIn {
    fn default() -> Self {
        Self {
            map: open_field(),
            crowd: Vec::new(),
            unit: mover_heading_to((10.0, 10.0), (20.0, 10.0)),
            manager: CollisionManager::default(),
        }
    }
}

impl BoxedIn {
    fn setup(&mut self, tolerance: f32) {
        let config = AvoidanceConfig::default();
        self.crowd = ring((10.0, 10.0), 12, 1.2, 0.6, 0.5);
        self.manager =
            CollisionManager::with_state(AvoidanceState::with_tolerance(config, tolerance));
    }

    fn tick(&mut self) {
        self.manager
            .apply_steering(&mut self.unit, &self.map, Vec3::X, 1.0, &self.crowd);
    }

    fn assert_gave_up(&self) {
        assert!(!self.unit.has_destination(), "destination still set");
        assert_eq!(self.unit.velocity, Vec3::ZERO);
        assert_eq!(self.unit.position_2d(), Vec2::new(10.0, 10.0));
        let tolerance = self.manager.state().tolerance();
        let expected = AvoidanceConfig::default().default_tolerance;
        assert!(
            (tolerance - expected).abs() < 1e-6,
            "expected tolerance {expected}, got {tolerance}"
        );
    }
}

#[test]
fn boxed_in_mover_gives_up() {
    rspec::run(&rspec::given(
        "a mover ringed by neighbours mid-manoeuvre",
        BoxedIn::default(),
        |ctx| {
            ctx.before_each(|world| world.setup(150.0 * DEGREE));
            ctx.when("the mover steers twice without finding a heading", |ctx| {
                ctx.before_each(|world| {
                    world.tick();
                    world.tick();
                });
                ctx.then("its order is abandoned and tolerance reset", |world| {
                    world.assert_gave_up();
                });
            });
        },
    ));
}

#[test]
fn resting_boxed_in_mover_gives_up_at_once() {
    rspec::run(&rspec::given(
        "a resting mover ringed by neighbours",
        BoxedIn::default(),
        |ctx| {
            ctx.before_each(|world| world.setup(AvoidanceConfig::default().default_tolerance));
            ctx.when("the mover steers once", |ctx| {
                ctx.before_each(|world| world.tick());
                ctx.then("the exhaustive search gives up immediately", |world| {
                    world.assert_gave_up();
                });
            });
        },
    ));
}
