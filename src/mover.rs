//! Mobile units steered by the collision manager.
use glam::{Vec2, Vec3};
use log::debug;

use crate::geometry::BoundingShape;

/// A simulated unit with position, velocity and movement capabilities.
///
/// Velocity is expressed as displacement per tick: the steering controller
/// adds it to `position` once per call.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    /// World position; `z` is carried along but ignored by collisions.
    pub position: Vec3,
    /// Displacement applied on the last tick.
    pub velocity: Vec3,
    /// Distance covered per unit of elapsed time.
    pub speed: f32,
    /// Collision radius.
    pub radius: f32,
    /// Extra clearance this mover wants around its neighbours.
    pub spacing: f32,
    /// Flying movers ignore terrain and other units.
    pub can_fly: bool,
    destination: Option<Vec2>,
}

impl Mover {
    /// A grounded, stationary mover at `position`.
    #[must_use]
    pub const fn new(position: Vec3, speed: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            speed,
            radius,
            spacing: 0.0,
            can_fly: false,
            destination: None,
        }
    }

    /// Sets the clearance kept around neighbours.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Marks the mover as airborne.
    #[must_use]
    pub const fn flying(mut self) -> Self {
        self.can_fly = true;
        self
    }

    /// Sets the destination the mover is heading for.
    #[must_use]
    pub const fn heading_to(mut self, destination: Vec2) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Horizontal position.
    #[must_use]
    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Current destination, if any.
    #[must_use]
    pub const fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    /// Whether a move order is active.
    #[must_use]
    pub const fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// Issues a new move order.
    pub fn set_destination(&mut self, destination: Vec2) {
        self.destination = Some(destination);
    }

    /// Ends the current move order as if the destination had been reached.
    ///
    /// Does nothing when no order is active.
    pub fn mark_destination_reached(&mut self) {
        if let Some(destination) = self.destination.take() {
            debug!(
                "mover at {:?} released destination {destination:?}",
                self.position_2d()
            );
        }
    }

    /// Planar distance between the two movers' centres.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        self.position_2d().distance(other.position_2d())
    }

    /// Centre distance below which `other` must be avoided.
    ///
    /// The two radii plus the larger of the two clearances.
    #[must_use]
    pub fn required_spacing(&self, other: &Self) -> f32 {
        self.radius + other.radius + self.spacing.max(other.spacing)
    }

    /// Collision circle at the current position.
    #[must_use]
    pub fn bounds(&self) -> BoundingShape {
        BoundingShape::circle(self.position_2d(), self.radius)
    }
}
