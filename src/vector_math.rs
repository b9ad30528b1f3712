//! Vector helpers layered over `glam`.
//! Length truncation, planar rotation and 2D/3D projection used by the steering core.
use glam::{Vec2, Vec3};

use crate::error::VectorError;

/// Shortens `vector` to at most `max_length`, reporting degenerate input.
///
/// Vectors already within the limit are returned untouched. Non-finite input,
/// a negative limit or a vector that cannot be normalised yield an error.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sidestep::vector_math::try_truncate;
/// let short = try_truncate(Vec3::new(3.0, 4.0, 0.0), 1.0).unwrap();
/// assert!((short.length() - 1.0).abs() < 1e-6);
///
/// assert!(try_truncate(Vec3::new(f32::NAN, 0.0, 0.0), 1.0).is_err());
/// ```
pub fn try_truncate(vector: Vec3, max_length: f32) -> Result<Vec3, VectorError> {
    if !vector.is_finite() || !max_length.is_finite() {
        return Err(VectorError::NonFinite);
    }
    if max_length < 0.0 {
        return Err(VectorError::NegativeLimit(max_length));
    }
    if vector.length_squared() <= max_length * max_length {
        return Ok(vector);
    }
    vector
        .try_normalize()
        .map(|direction| direction * max_length)
        .ok_or(VectorError::Degenerate)
}

/// Shortens `vector` to at most `max_length`.
///
/// Input that [`try_truncate`] rejects collapses to the zero vector.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sidestep::vector_math::truncate;
/// assert_eq!(truncate(Vec3::new(0.5, 0.0, 0.0), 1.0), Vec3::new(0.5, 0.0, 0.0));
/// assert_eq!(truncate(Vec3::new(2.0, 0.0, 0.0), -1.0), Vec3::ZERO);
/// ```
#[must_use]
pub fn truncate(vector: Vec3, max_length: f32) -> Vec3 {
    try_truncate(vector, max_length).unwrap_or(Vec3::ZERO)
}

/// Rotates the horizontal part of `vector` by `angle` radians, keeping `z`.
///
/// Positive angles turn counter-clockwise.
#[must_use]
pub fn rotate_planar(vector: Vec3, angle: f32) -> Vec3 {
    Vec2::from_angle(angle)
        .rotate(vector.truncate())
        .extend(vector.z)
}

/// Zero-extends a planar vector into 3D.
#[must_use]
pub const fn lift(vector: Vec2) -> Vec3 {
    Vec3::new(vector.x, vector.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn truncate_keeps_short_vectors() {
        let v = Vec3::new(0.3, 0.4, 0.0);
        assert_eq!(try_truncate(v, 1.0), Ok(v));
    }

    #[test]
    fn truncate_rejects_negative_limit() {
        assert_eq!(
            try_truncate(Vec3::X, -0.5),
            Err(VectorError::NegativeLimit(-0.5))
        );
    }

    #[test]
    fn zero_limit_collapses_vector() {
        assert_eq!(try_truncate(Vec3::new(2.0, 0.0, 0.0), 0.0), Ok(Vec3::ZERO));
    }

    #[test]
    fn rotation_is_counter_clockwise_and_keeps_height() {
        let rotated = rotate_planar(Vec3::new(1.0, 0.0, 2.0), FRAC_PI_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 2.0);
    }
}
