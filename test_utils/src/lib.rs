//! Utility helpers for tests.
//! Fixture constructors for movers, maps and neighbour formations.
pub mod conversions;
pub mod steering;

use glam::Vec3;

/// Assert that two vectors agree component-wise within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "expected {expected:?}, got {actual:?} (epsilon {epsilon})"
    );
}

/// Assert that `velocity` is no longer than `limit`, allowing for rounding.
///
/// # Panics
/// Panics when the velocity exceeds the limit.
pub fn assert_within_length(velocity: Vec3, limit: f32) {
    assert!(
        velocity.length() <= limit + 1e-5 * limit.max(1.0),
        "velocity {velocity:?} has length {} above {limit}",
        velocity.length()
    );
}
