//! Per-tick steering entry point.
//!
//! Each mover owns one [`CollisionManager`]. Once per tick the simulation
//! hands it the mover, the terrain, the steering impulse and the movers
//! standing nearby; the manager updates the mover's velocity and position.
use glam::Vec3;
use log::{debug, warn};

use crate::avoidance::{AvoidanceState, Outcome};
use crate::config::AvoidanceConfig;
use crate::map::TerrainMap;
use crate::mover::Mover;
use crate::neighbourhood::{Neighbourhood, Probe};
use crate::vector_math::{truncate, try_truncate};

/// Collision-aware velocity controller for a single mover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionManager {
    state: AvoidanceState,
}

impl CollisionManager {
    /// A manager using `config`.
    #[must_use]
    pub const fn new(config: AvoidanceConfig) -> Self {
        Self {
            state: AvoidanceState::new(config),
        }
    }

    /// A manager resuming from previously saved avoidance state.
    #[must_use]
    pub const fn with_state(state: AvoidanceState) -> Self {
        Self { state }
    }

    /// Avoidance state carried between ticks.
    #[must_use]
    pub const fn state(&self) -> &AvoidanceState {
        &self.state
    }

    fn config(&self) -> &AvoidanceConfig {
        self.state.config()
    }

    /// Applies `steering` to `mover` for one tick and moves it.
    ///
    /// A zero `steering` brakes. Otherwise the impulse is added to the
    /// current velocity, capped at the distance the mover can travel in
    /// `elapsed_time`, adapted around terrain and `neighbours` (unless the
    /// mover flies), and capped again so the mover does not overshoot its
    /// destination. The mover's position then advances by the velocity.
    pub fn apply_steering<'n, M, I>(
        &mut self,
        mover: &mut Mover,
        map: &M,
        steering: Vec3,
        elapsed_time: f32,
        neighbours: I,
    ) where
        M: TerrainMap,
        I: IntoIterator<Item = &'n Mover>,
    {
        let traveled = mover.speed * elapsed_time;
        if traveled < self.config().short_travel_warning {
            debug!("very short traveled distance {traveled} (elapsed {elapsed_time})");
        }

        let neighbourhood =
            Neighbourhood::sample(mover, map, neighbours, self.config().sample_radius);

        if steering == Vec3::ZERO {
            self.brake(mover, elapsed_time);
        } else {
            let candidate = truncate(mover.velocity + steering, traveled);
            mover.velocity = if mover.can_fly {
                candidate
            } else {
                self.adapt(mover, map, &neighbourhood, candidate)
            };

            if let Some(destination) = mover.destination() {
                let remaining = mover.position_2d().distance(destination);
                mover.velocity = truncate(mover.velocity, remaining);
            }
        }
        mover.position += mover.velocity;
    }

    /// Slows `mover` down, stopping it outright once it is slow enough.
    ///
    /// The braking force opposes the velocity and is capped at
    /// `elapsed_time`. A velocity the force cannot be computed for is left
    /// as it is.
    pub fn brake(&self, mover: &mut Mover, elapsed_time: f32) {
        match try_truncate(-mover.velocity * self.config().braking_ratio, elapsed_time) {
            Ok(force) => mover.velocity += force,
            Err(err) => warn!(
                "brake skipped for velocity {:?} (elapsed {elapsed_time}): {err}",
                mover.velocity
            ),
        }
        if mover.velocity.length() < self.config().stop_speed {
            mover.velocity = Vec3::ZERO;
        }
    }

    fn adapt<M>(
        &mut self,
        mover: &mut Mover,
        map: &M,
        neighbourhood: &Neighbourhood,
        desired: Vec3,
    ) -> Vec3
    where
        M: TerrainMap,
    {
        let probe = Probe::for_mover(mover, map, neighbourhood);
        let adaptation = self.state.adapt(desired, &probe);
        if adaptation.outcome == Outcome::GaveUp {
            mover.mark_destination_reached();
        }
        adaptation.velocity
    }
}
