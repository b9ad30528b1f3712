//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so tile lookups and search budgets never wrap silently.

/// Floor a world coordinate into the `i32` tile domain.
///
/// Non-finite input maps to `i32::MIN`, which lies outside every map.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f32) -> i32 {
    if value.is_nan() {
        return i32::MIN;
    }
    // i32 bounds are not exactly representable in f32; the saturating cast
    // handles the rounding at either end.
    value.floor() as i32
}

/// Number of candidate headings that fit in an angular search budget.
///
/// The ratio is rounded so budgets configured as whole multiples of `step`
/// are not lost to floating-point error. Degenerate input yields zero.
///
/// # Examples
/// ```
/// use sidestep::numeric::iteration_budget;
/// assert_eq!(iteration_budget(1.0, 0.25), 4);
/// assert_eq!(iteration_budget(1.0, 0.0), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "The ratio is validated as finite and non-negative and clamped to u32."
)]
#[must_use]
pub fn iteration_budget(tolerance: f32, step: f32) -> u32 {
    if step <= 0.0 {
        return 0;
    }
    let ratio = (tolerance / step).round();
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    ratio.min(u32::MAX as f32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ADAPTATION_STEP, DEFAULT_TOLERANCE, MAX_TOLERANCE};

    #[test]
    fn floors_negative_coordinates_downwards() {
        assert_eq!(floor_to_i32(-0.25), -1);
        assert_eq!(floor_to_i32(3.99), 3);
        assert_eq!(floor_to_i32(f32::NAN), i32::MIN);
    }

    #[test]
    fn default_budgets_count_whole_degrees() {
        assert_eq!(iteration_budget(DEFAULT_TOLERANCE, ADAPTATION_STEP), 100);
        assert_eq!(iteration_budget(MAX_TOLERANCE, ADAPTATION_STEP), 180);
    }

    #[test]
    fn nan_budget_is_empty() {
        assert_eq!(iteration_budget(f32::NAN, ADAPTATION_STEP), 0);
    }
}
