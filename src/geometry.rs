//! Planar bounding shapes and their overlap tests.
//!
//! Movers are circles; terrain tiles are axis-aligned boxes. Contact is
//! strict: shapes that merely touch do not collide, so a mover resting flush
//! against a wall can still slide along it.
use glam::Vec2;

/// A 2D bounding volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingShape {
    /// Circle described by its centre and radius.
    Circle {
        /// Centre of the circle.
        center: Vec2,
        /// Radius of the circle.
        radius: f32,
    },
    /// Axis-aligned box spanning `min` to `max`.
    Aabb {
        /// Lower-left corner.
        min: Vec2,
        /// Upper-right corner.
        max: Vec2,
    },
}

impl BoundingShape {
    /// Builds a circle.
    #[must_use]
    pub const fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// Builds an axis-aligned box from two corners in any order.
    #[must_use]
    pub fn aabb(corner_a: Vec2, corner_b: Vec2) -> Self {
        Self::Aabb {
            min: corner_a.min(corner_b),
            max: corner_a.max(corner_b),
        }
    }

    /// Centre point of the shape.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        match *self {
            Self::Circle { center, .. } => center,
            Self::Aabb { min, max } => (min + max) * 0.5,
        }
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        match *self {
            Self::Circle { center, radius } => Self::circle(center + offset, radius),
            Self::Aabb { min, max } => Self::Aabb {
                min: min + offset,
                max: max + offset,
            },
        }
    }

    /// Whether the two shapes overlap.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use sidestep::geometry::BoundingShape;
    /// let unit = BoundingShape::circle(Vec2::ZERO, 0.5);
    /// let tile = BoundingShape::aabb(Vec2::new(0.25, -1.0), Vec2::new(1.25, 0.0));
    /// assert!(unit.collides(&tile));
    /// assert!(!unit.collides(&tile.translated(Vec2::new(1.0, 0.0))));
    /// ```
    #[must_use]
    pub fn collides(&self, other: &Self) -> bool {
        match (*self, *other) {
            (
                Self::Circle { center, radius },
                Self::Circle {
                    center: other_center,
                    radius: other_radius,
                },
            ) => {
                let reach = radius + other_radius;
                center.distance_squared(other_center) < reach * reach
            }
            (Self::Circle { center, radius }, Self::Aabb { min, max })
            | (Self::Aabb { min, max }, Self::Circle { center, radius }) => {
                let closest = center.clamp(min, max);
                center.distance_squared(closest) < radius * radius
            }
            (
                Self::Aabb { min, max },
                Self::Aabb {
                    min: other_min,
                    max: other_max,
                },
            ) => {
                min.x < other_max.x && max.x > other_min.x && min.y < other_max.y && max.y > other_min.y
            }
        }
    }

    /// Whether the shape overlaps any of `others`.
    #[must_use]
    pub fn collides_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Self>,
    {
        others.into_iter().any(|other| self.collides(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::overlapping(Vec2::new(0.9, 0.0), true)]
    #[case::touching(Vec2::new(1.0, 0.0), false)]
    #[case::apart(Vec2::new(3.0, 3.0), false)]
    fn circle_pairs(#[case] other_center: Vec2, #[case] expected: bool) {
        let a = BoundingShape::circle(Vec2::ZERO, 0.5);
        let b = BoundingShape::circle(other_center, 0.5);
        assert_eq!(a.collides(&b), expected);
        assert_eq!(b.collides(&a), expected);
    }

    #[rstest]
    #[case::inside(Vec2::new(0.5, 0.5), true)]
    #[case::near_corner(Vec2::new(1.3, 1.3), true)]
    #[case::beyond_corner(Vec2::new(1.4, 1.4), false)]
    #[case::beside_face(Vec2::new(-0.49, 0.5), true)]
    fn circle_against_box(#[case] center: Vec2, #[case] expected: bool) {
        let tile = BoundingShape::aabb(Vec2::ZERO, Vec2::ONE);
        let unit = BoundingShape::circle(center, 0.5);
        assert_eq!(unit.collides(&tile), expected);
        assert_eq!(tile.collides(&unit), expected);
    }

    #[test]
    fn adjacent_tiles_do_not_collide() {
        let left = BoundingShape::aabb(Vec2::ZERO, Vec2::ONE);
        let right = left.translated(Vec2::X);
        assert!(!left.collides(&right));
        assert!(left.collides(&right.translated(Vec2::new(-0.5, 0.0))));
    }

    #[test]
    fn box_center_is_midpoint() {
        let tile = BoundingShape::aabb(Vec2::new(2.0, 3.0), Vec2::new(3.0, 4.0));
        assert_eq!(tile.center(), Vec2::new(2.5, 3.5));
    }

    #[test]
    fn collides_any_scans_all_shapes() {
        let unit = BoundingShape::circle(Vec2::ZERO, 0.5);
        let shapes = [
            BoundingShape::circle(Vec2::new(5.0, 0.0), 0.5),
            BoundingShape::circle(Vec2::new(0.0, 0.8), 0.5),
        ];
        assert!(unit.collides_any(&shapes));
        assert!(!unit.collides_any(shapes.iter().take(1)));
    }
}
