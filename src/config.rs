//! Runtime tuning for collision avoidance.
//!
//! [`AvoidanceConfig`] defaults to the values in [`crate::constants`]. It can
//! be loaded from JSON, where missing fields keep their defaults:
//!
//! ```
//! use sidestep::config::AvoidanceConfig;
//! let config = AvoidanceConfig::from_json_str(r#"{ "braking_ratio": 0.5 }"#).unwrap();
//! assert_eq!(config.braking_ratio, 0.5);
//! assert_eq!(config.stop_speed, sidestep::STOP_SPEED);
//! ```
use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{
    ADAPTATION_STEP, BRAKING_RATIO, DEFAULT_TOLERANCE, MAX_TOLERANCE, SAMPLE_RADIUS,
    SHORT_TRAVEL_WARNING, STOP_SPEED, TOLERANCE_DECAY, TOLERANCE_INCREASE,
};

/// Tunable tolerances for the steering controller. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvoidanceConfig {
    /// Fraction of velocity removed per brake.
    pub braking_ratio: f32,
    /// Resting angular search budget.
    pub default_tolerance: f32,
    /// Search budget beyond which the mover gives up.
    pub max_tolerance: f32,
    /// Budget added after an exhausted hysteresis search.
    pub tolerance_increase: f32,
    /// Budget removed on each unobstructed tick.
    pub tolerance_decay: f32,
    /// Angle between successive candidate headings.
    pub adaptation_step: f32,
    /// Speed below which a braking mover stops dead.
    pub stop_speed: f32,
    /// Traveled distance below which a diagnostic is logged.
    pub short_travel_warning: f32,
    /// Half-width, in tiles, of the sampled terrain window.
    pub sample_radius: i32,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            braking_ratio: BRAKING_RATIO,
            default_tolerance: DEFAULT_TOLERANCE,
            max_tolerance: MAX_TOLERANCE,
            tolerance_increase: TOLERANCE_INCREASE,
            tolerance_decay: TOLERANCE_DECAY,
            adaptation_step: ADAPTATION_STEP,
            stop_speed: STOP_SPEED,
            short_travel_warning: SHORT_TRAVEL_WARNING,
            sample_radius: SAMPLE_RADIUS,
        }
    }
}

impl AvoidanceConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// or the first violation reported by [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values describe a usable controller.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("default_tolerance", self.default_tolerance),
            ("max_tolerance", self.max_tolerance),
            ("tolerance_increase", self.tolerance_increase),
            ("tolerance_decay", self.tolerance_decay),
            ("adaptation_step", self.adaptation_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.default_tolerance > self.max_tolerance {
            return Err(ConfigError::ToleranceOrder {
                default: self.default_tolerance,
                max: self.max_tolerance,
            });
        }
        if self.max_tolerance > TAU {
            return Err(ConfigError::ToleranceTooWide(self.max_tolerance));
        }
        if !(self.braking_ratio > 0.0 && self.braking_ratio <= 1.0) {
            return Err(ConfigError::BrakingRatio(self.braking_ratio));
        }
        for (field, value) in [
            ("stop_speed", self.stop_speed),
            ("short_travel_warning", self.short_travel_warning),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.sample_radius < 0 {
            return Err(ConfigError::SampleRadius(self.sample_radius));
        }
        Ok(())
    }
}
