//! Repulsion for movers that already intersect something.
use glam::{Vec2, Vec3};

use crate::neighbourhood::Probe;
use crate::vector_math::{lift, truncate};

/// Pushes the mover away from everything it currently intersects.
///
/// Sums the vectors pointing from each intersecting shape's centre to the
/// mover's centre and truncates the sum to the length of `desired`. Returns
/// the zero vector when nothing intersects.
#[must_use]
pub fn flee_overlap(probe: &Probe<'_>, desired: Vec3) -> Vec3 {
    let center = probe.center();
    let push: Vec2 = probe
        .overlapping()
        .map(|shape| center - shape.center())
        .sum();
    truncate(lift(push), desired.length())
}
