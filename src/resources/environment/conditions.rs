use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{safe_clamp, safe_normalize};

/// Weather for a mission. Fixed for the whole attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConditions {
    /// Direction the wind blows towards; normalized before use.
    pub wind_direction: Vector3<f64>,
    /// Steady wind speed [m/s]
    pub wind_speed: f64,
    /// Gust intensity in [0, 1].
    pub turbulence: f64,
    /// Visibility [m], for the presentation layer.
    pub visibility: f64,
    /// Local hour in [0, 24), for the presentation layer.
    pub time_of_day: f64,
}

impl Default for EnvironmentConditions {
    fn default() -> Self {
        Self::calm()
    }
}

impl EnvironmentConditions {
    pub fn calm() -> Self {
        Self {
            wind_direction: Vector3::x(),
            wind_speed: 0.0,
            turbulence: 0.0,
            visibility: 10_000.0,
            time_of_day: 12.0,
        }
    }

    pub fn with_wind(mut self, direction: Vector3<f64>, speed: f64) -> Self {
        self.wind_direction = direction;
        self.wind_speed = speed;
        self
    }

    pub fn with_turbulence(mut self, turbulence: f64) -> Self {
        self.turbulence = turbulence;
        self
    }

    /// Steady wind velocity. A degenerate direction or a non-finite speed
    /// yields still air.
    pub fn wind_vector(&self) -> Vector3<f64> {
        let direction = safe_normalize(&self.wind_direction, Vector3::zeros());
        let speed = if self.wind_speed.is_finite() {
            self.wind_speed.max(0.0)
        } else {
            0.0
        };
        direction * speed
    }

    pub fn turbulence_intensity(&self) -> f64 {
        safe_clamp(self.turbulence, 0.0, 1.0)
    }
}
