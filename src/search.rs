//! Angular search for a collision-free heading.
//!
//! Both searches turn the desired velocity in fixed angular steps and stop at
//! the first candidate the caller's predicate accepts. Neither touches any
//! state: committing a direction, raising tolerance or giving up is left to
//! [`crate::avoidance::AvoidanceState`].
use glam::Vec3;

use crate::vector_math::rotate_planar;

/// Direction in which candidate headings are turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Negative angles.
    #[default]
    Clockwise,
    /// Positive angles.
    CounterClockwise,
}

impl Rotation {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Signed angle for `steps` turns of `step` radians.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Step counts stay far below f32's exact integer range."
    )]
    #[must_use]
    pub fn angle(self, steps: u32, step: f32) -> f32 {
        let magnitude = steps as f32 * step;
        match self {
            Self::Clockwise => -magnitude,
            Self::CounterClockwise => magnitude,
        }
    }

    /// `velocity` turned by `steps` increments of `step` in this direction.
    #[must_use]
    pub fn turn(self, velocity: Vec3, steps: u32, step: f32) -> Vec3 {
        rotate_planar(velocity, self.angle(steps, step))
    }
}

/// Result of a heading search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// A free heading and the direction that produced it.
    Found {
        /// Collision-free velocity.
        velocity: Vec3,
        /// Direction the velocity was turned in.
        rotation: Rotation,
    },
    /// Every candidate within the budget was blocked.
    Exhausted,
}

/// Alternates clockwise and counter-clockwise turns of growing angle.
///
/// At each of the `budget` iterations the clockwise candidate is tried before
/// the counter-clockwise one, so ties resolve clockwise.
pub fn exhaustive<F>(desired: Vec3, budget: u32, step: f32, is_blocked: F) -> SearchOutcome
where
    F: Fn(Vec3) -> bool,
{
    (1..=budget)
        .flat_map(|turns| {
            [Rotation::Clockwise, Rotation::CounterClockwise]
                .map(|rotation| (rotation, rotation.turn(desired, turns, step)))
        })
        .find(|&(_, candidate)| !is_blocked(candidate))
        .map_or(SearchOutcome::Exhausted, |(rotation, velocity)| {
            SearchOutcome::Found { velocity, rotation }
        })
}

/// Turns only in `rotation`, for up to `budget` increments.
pub fn follow<F>(
    desired: Vec3,
    rotation: Rotation,
    budget: u32,
    step: f32,
    is_blocked: F,
) -> SearchOutcome
where
    F: Fn(Vec3) -> bool,
{
    (1..=budget)
        .map(|turns| rotation.turn(desired, turns, step))
        .find(|&candidate| !is_blocked(candidate))
        .map_or(SearchOutcome::Exhausted, |velocity| SearchOutcome::Found {
            velocity,
            rotation,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::f32::consts::FRAC_PI_2;

    const QUARTER_STEP: f32 = FRAC_PI_2 / 4.0;

    #[test]
    fn exhaustive_prefers_clockwise_on_ties() {
        let outcome = exhaustive(Vec3::X, 8, QUARTER_STEP, |v| v.x > 0.9);
        let SearchOutcome::Found { velocity, rotation } = outcome else {
            panic!("expected a heading, got {outcome:?}");
        };
        assert_eq!(rotation, Rotation::Clockwise);
        assert!(velocity.y < 0.0);
    }

    #[test]
    fn exhaustive_finds_counter_clockwise_gap() {
        let outcome = exhaustive(Vec3::X, 8, QUARTER_STEP, |v| v.y < 0.5);
        let SearchOutcome::Found { velocity, rotation } = outcome else {
            panic!("expected a heading, got {outcome:?}");
        };
        assert_eq!(rotation, Rotation::CounterClockwise);
        assert_relative_eq!(velocity.y, (2.0 * QUARTER_STEP).sin(), epsilon = 1e-6);
    }

    #[test]
    fn exhaustive_tests_two_candidates_per_iteration() {
        let calls = Cell::new(0);
        let outcome = exhaustive(Vec3::X, 5, QUARTER_STEP, |_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn follow_never_turns_the_other_way() {
        let outcome = follow(Vec3::X, Rotation::CounterClockwise, 3, QUARTER_STEP, |v| {
            v.y >= 0.0
        });
        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn follow_keeps_height() {
        let desired = Vec3::new(1.0, 0.0, 0.75);
        let outcome = follow(desired, Rotation::Clockwise, 4, QUARTER_STEP, |v| v.y > -0.5);
        let SearchOutcome::Found { velocity, .. } = outcome else {
            panic!("expected a heading, got {outcome:?}");
        };
        assert_relative_eq!(velocity.z, 0.75);
        assert_relative_eq!(velocity.y, -(2.0 * QUARTER_STEP).sin(), epsilon = 1e-6);
    }

    #[test]
    fn empty_budget_is_exhausted() {
        assert_eq!(
            exhaustive(Vec3::X, 0, QUARTER_STEP, |_| false),
            SearchOutcome::Exhausted
        );
    }
}
