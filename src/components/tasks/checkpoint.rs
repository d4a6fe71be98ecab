use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::Aircraft;
use crate::utils::constants::SPEED_TOLERANCE;
use crate::utils::errors::{require_positive, ConfigError};

/// Inclusive altitude window, in metres of world `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeBand {
    pub min: f64,
    pub max: f64,
}

impl AltitudeBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, altitude: f64) -> bool {
        altitude >= self.min && altitude <= self.max
    }
}

/// A spatial gate the aircraft must pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    /// Centre of the capture sphere in world space [m]
    pub position: Vector3<f64>,
    /// Capture radius [m]
    pub radius: f64,
    #[serde(default)]
    pub altitude_band: Option<AltitudeBand>,
    /// Speed that must be held to within ±10% [m/s]
    #[serde(default)]
    pub required_speed: Option<f64>,
}

impl Checkpoint {
    pub fn new(id: impl Into<String>, position: Vector3<f64>, radius: f64) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
            altitude_band: None,
            required_speed: None,
        }
    }

    pub fn with_altitude_band(mut self, min: f64, max: f64) -> Self {
        self.altitude_band = Some(AltitudeBand::new(min, max));
        self
    }

    pub fn with_required_speed(mut self, speed: f64) -> Self {
        self.required_speed = Some(speed);
        self
    }

    pub fn distance_to(&self, aircraft: &Aircraft) -> f64 {
        (aircraft.position - self.position).norm()
    }

    /// True when the aircraft satisfies position, altitude and speed
    /// constraints at once. NaN positions or speeds never satisfy it.
    pub fn contains(&self, aircraft: &Aircraft) -> bool {
        if !(self.distance_to(aircraft) <= self.radius) {
            return false;
        }

        if let Some(band) = &self.altitude_band {
            if !band.contains(aircraft.altitude()) {
                return false;
            }
        }

        if let Some(required) = self.required_speed {
            let speed = aircraft.speed();
            let tolerance = required * SPEED_TOLERANCE;
            if !((speed - required).abs() <= tolerance) {
                return false;
            }
        }

        true
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(&format!("checkpoint '{}' radius", self.id), self.radius)?;
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "checkpoint '{}' position must be finite",
                self.id
            )));
        }
        if let Some(band) = &self.altitude_band {
            if !(band.min <= band.max) {
                return Err(ConfigError::ValidationError(format!(
                    "checkpoint '{}' altitude band min {} exceeds max {}",
                    self.id, band.min, band.max
                )));
            }
        }
        if let Some(speed) = self.required_speed {
            require_positive(&format!("checkpoint '{}' required speed", self.id), speed)?;
        }
        Ok(())
    }
}
