use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::constants::*;
use crate::utils::errors::{require_non_negative, require_positive, ConfigError};

/// Constants of the flight model, collected so tests and hosts can override them.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Air density used for dynamic pressure [kg/m³]
    pub air_density: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Thrust at full throttle [N]
    pub max_thrust: f64,
    /// At or below this airspeed only gravity is applied [m/s]
    pub low_speed_threshold: f64,
    /// Airspeed at which controls reach full authority [m/s]
    pub control_saturation_speed: f64,
    pub roll_gain: f64,
    pub pitch_gain: f64,
    pub yaw_gain: f64,
    /// Fraction of the input gap closed each tick, in (0, 1].
    pub smoothing_factor: f64,
    /// Fixed simulation rate [Hz]
    pub tick_rate_hz: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            air_density: SEA_LEVEL_AIR_DENSITY,
            gravity: GRAVITY,
            max_thrust: MAX_THRUST,
            low_speed_threshold: LOW_SPEED_THRESHOLD,
            control_saturation_speed: CONTROL_SATURATION_SPEED,
            roll_gain: ROLL_GAIN,
            pitch_gain: PITCH_GAIN,
            yaw_gain: YAW_GAIN,
            smoothing_factor: INPUT_SMOOTHING,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl FlightConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses overrides; omitted fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("air_density", self.air_density)?;
        require_non_negative("gravity", self.gravity)?;
        require_non_negative("max_thrust", self.max_thrust)?;
        require_non_negative("low_speed_threshold", self.low_speed_threshold)?;
        require_positive("control_saturation_speed", self.control_saturation_speed)?;
        require_non_negative("roll_gain", self.roll_gain)?;
        require_non_negative("pitch_gain", self.pitch_gain)?;
        require_non_negative("yaw_gain", self.yaw_gain)?;
        require_positive("tick_rate_hz", self.tick_rate_hz)?;
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "smoothing_factor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        Ok(())
    }

    /// Length of one fixed tick [s]
    pub fn timestep(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}
