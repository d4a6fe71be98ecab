use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::safe_clamp;

/// Non-finite input means "no input", not full deflection.
fn sanitize(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        safe_clamp(value, min, max)
    } else {
        0.0
    }
}

/// Pilot input targets, the only control state the presentation layer may write.
///
/// The flight dynamics engine eases the aircraft's control surfaces towards
/// these values every tick; they never take effect instantly.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    throttle: f64,
    aileron: f64,
    elevator: f64,
    rudder: f64,
}

impl ControlInputs {
    pub fn new(throttle: f64, aileron: f64, elevator: f64, rudder: f64) -> Self {
        let mut inputs = Self::default();
        inputs.set_throttle(throttle);
        inputs.set_aileron(aileron);
        inputs.set_elevator(elevator);
        inputs.set_rudder(rudder);
        inputs
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn aileron(&self) -> f64 {
        self.aileron
    }

    pub fn elevator(&self) -> f64 {
        self.elevator
    }

    pub fn rudder(&self) -> f64 {
        self.rudder
    }

    /// Throttle is clamped to [0, 1].
    pub fn set_throttle(&mut self, value: f64) {
        self.throttle = sanitize(value, 0.0, 1.0);
    }

    /// Positive aileron rolls right wing down. Clamped to [-1, 1].
    pub fn set_aileron(&mut self, value: f64) {
        self.aileron = sanitize(value, -1.0, 1.0);
    }

    /// Positive elevator raises the nose. Clamped to [-1, 1].
    pub fn set_elevator(&mut self, value: f64) {
        self.elevator = sanitize(value, -1.0, 1.0);
    }

    /// Positive rudder yaws the nose toward the right wing, which lowers the
    /// heading reading. Clamped to [-1, 1].
    pub fn set_rudder(&mut self, value: f64) {
        self.rudder = sanitize(value, -1.0, 1.0);
    }

    pub fn neutral() -> Self {
        Self::default()
    }
}
