//! Steering and avoidance tuning constants.
//!
//! Angles are expressed in radians. [`crate::config::AvoidanceConfig`]
//! defaults to these values; override them there rather than here.
use std::f32::consts::PI;

/// One degree in radians.
pub const DEGREE: f32 = PI / 180.0;

/// Fraction of the current velocity removed by a single brake.
pub const BRAKING_RATIO: f32 = 0.9;
/// Resting angular search budget.
pub const DEFAULT_TOLERANCE: f32 = 100.0 * DEGREE;
/// Upper bound of the angular search budget; exceeding it gives up.
pub const MAX_TOLERANCE: f32 = 180.0 * DEGREE;
/// Budget added each time a hysteresis search runs dry.
pub const TOLERANCE_INCREASE: f32 = 20.0 * DEGREE;
/// Budget removed on every tick that needs no avoidance.
pub const TOLERANCE_DECAY: f32 = 1.0;
/// Angle between two successive candidate headings.
pub const ADAPTATION_STEP: f32 = DEGREE;
/// Speeds below this snap to zero after braking.
pub const STOP_SPEED: f32 = 0.01;
/// Traveled distances below this are reported as suspicious.
pub const SHORT_TRAVEL_WARNING: f32 = 0.001;
/// Half-width, in tiles, of the terrain window sampled around a mover.
pub const SAMPLE_RADIUS: i32 = 2;
