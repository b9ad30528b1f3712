//! Velocity adaptation state machine.
//!
//! [`AvoidanceState`] is the per-mover memory of the collision manager: the
//! current angular search budget (`tolerance`) and the direction that last
//! resolved a collision. Each tick [`AvoidanceState::adapt`] picks, in order:
//!
//! 1. overlap repulsion when the mover already intersects something;
//! 2. an exhaustive search when the desired move hits terrain;
//! 3. for blockers, an exhaustive search while the budget is at rest, or a
//!    search continuing the committed direction during a manoeuvre;
//! 4. otherwise the desired velocity, relaxing the budget one step.
use glam::Vec3;
use log::{debug, info};

use crate::config::AvoidanceConfig;
use crate::neighbourhood::Probe;
use crate::numeric::iteration_budget;
use crate::overlap::flee_overlap;
use crate::search::{exhaustive, follow, Rotation, SearchOutcome};

/// How a desired velocity was adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing in the way; velocity unchanged.
    Clear,
    /// Pushed out of an existing overlap.
    Fled,
    /// Turned onto a free heading.
    Rerouted(Rotation),
    /// The committed direction is blocked; halted for this tick.
    Stalled,
    /// No heading found within budget; the move order should be dropped.
    GaveUp,
}

/// Adapted velocity together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adaptation {
    /// Velocity to apply this tick.
    pub velocity: Vec3,
    /// Which branch produced it.
    pub outcome: Outcome,
}

impl Adaptation {
    const fn new(velocity: Vec3, outcome: Outcome) -> Self {
        Self { velocity, outcome }
    }

    const fn halted(outcome: Outcome) -> Self {
        Self::new(Vec3::ZERO, outcome)
    }
}

/// Search budget and hysteresis direction carried between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AvoidanceState {
    config: AvoidanceConfig,
    tolerance: f32,
    rotation: Rotation,
}

impl Default for AvoidanceState {
    fn default() -> Self {
        Self::new(AvoidanceConfig::default())
    }
}

impl AvoidanceState {
    /// Fresh state starting at the maximum tolerance, turning clockwise.
    #[must_use]
    pub const fn new(config: AvoidanceConfig) -> Self {
        Self {
            tolerance: config.max_tolerance,
            config,
            rotation: Rotation::Clockwise,
        }
    }

    /// State resuming with `tolerance`, clamped to the configured range.
    #[must_use]
    pub fn with_tolerance(config: AvoidanceConfig, tolerance: f32) -> Self {
        Self {
            tolerance: tolerance.clamp(config.default_tolerance, config.max_tolerance),
            ..Self::new(config)
        }
    }

    /// Current angular search budget in radians.
    #[must_use]
    pub const fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Direction of the last successful search.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Tuning in use.
    #[must_use]
    pub const fn config(&self) -> &AvoidanceConfig {
        &self.config
    }

    /// Whether no avoidance manoeuvre is in progress.
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.tolerance <= self.config.default_tolerance
    }

    /// Adapts `desired` to the obstacles and blockers seen by `probe`.
    pub fn adapt(&mut self, desired: Vec3, probe: &Probe<'_>) -> Adaptation {
        if probe.is_overlapping() {
            debug!("overlap at {:?}, fleeing", probe.center());
            return Adaptation::new(flee_overlap(probe, desired), Outcome::Fled);
        }

        let contact = probe.contact(desired);
        if contact.hits_terrain() {
            return self.search_both_ways(desired, probe);
        }
        if contact.hits_blocker() {
            return if self.is_resting() {
                self.search_both_ways(desired, probe)
            } else {
                self.search_onward(desired, probe)
            };
        }

        self.tolerance = (self.tolerance - self.config.tolerance_decay)
            .max(self.config.default_tolerance);
        Adaptation::new(desired, Outcome::Clear)
    }

    fn budget(&self) -> u32 {
        iteration_budget(self.tolerance, self.config.adaptation_step)
    }

    fn search_both_ways(&mut self, desired: Vec3, probe: &Probe<'_>) -> Adaptation {
        match exhaustive(desired, self.budget(), self.config.adaptation_step, |v| {
            probe.is_blocked(v)
        }) {
            SearchOutcome::Found { velocity, rotation } => {
                self.rotation = rotation;
                debug!("rerouted {rotation:?} to {velocity:?}");
                Adaptation::new(velocity, Outcome::Rerouted(rotation))
            }
            SearchOutcome::Exhausted => self.give_up(probe),
        }
    }

    fn search_onward(&mut self, desired: Vec3, probe: &Probe<'_>) -> Adaptation {
        match follow(
            desired,
            self.rotation,
            self.budget(),
            self.config.adaptation_step,
            |v| probe.is_blocked(v),
        ) {
            SearchOutcome::Found { velocity, rotation } => {
                Adaptation::new(velocity, Outcome::Rerouted(rotation))
            }
            SearchOutcome::Exhausted => {
                self.rotation = self.rotation.flipped();
                self.tolerance += self.config.tolerance_increase;
                if self.tolerance > self.config.max_tolerance {
                    return self.give_up(probe);
                }
                debug!(
                    "stalled at {:?}; tolerance raised to {}, now turning {:?}",
                    probe.center(),
                    self.tolerance,
                    self.rotation
                );
                Adaptation::halted(Outcome::Stalled)
            }
        }
    }

    fn give_up(&mut self, probe: &Probe<'_>) -> Adaptation {
        info!("no free heading from {:?}; giving up", probe.center());
        self.tolerance = self.config.default_tolerance;
        Adaptation::halted(Outcome::GaveUp)
    }
}
