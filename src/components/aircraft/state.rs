use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{AeroCoefficients, AircraftClass, AircraftConfig};
use crate::components::ControlInputs;

/// Kinematic and control state of a simulated aircraft.
///
/// World frame is y-up; the body's nose points along local +Z. Only the
/// flight dynamics engine writes the smoothed control surfaces; callers
/// steer through [`Aircraft::requested`].
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub name: String,
    pub class: AircraftClass,
    pub aero: AeroCoefficients,
    /// Static weight, fixed at construction (N-equivalent).
    pub weight: f64,

    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Acceleration from the most recent tick [m/s²]
    pub acceleration: Vector3<f64>,
    /// Body to world rotation
    pub rotation: UnitQuaternion<f64>,

    /// Pilot input targets.
    pub requested: ControlInputs,
    pub(crate) controls: ControlSurfaces,
}

/// Smoothed control surface positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    /// [0, 1]
    pub throttle: f64,
    /// [-1, 1]
    pub aileron: f64,
    /// [-1, 1]
    pub elevator: f64,
    /// [-1, 1]
    pub rudder: f64,
}

impl ControlSurfaces {
    /// Closes `factor` of the gap towards each requested value.
    pub(crate) fn approach(&mut self, target: &ControlInputs, factor: f64) {
        self.throttle += (target.throttle() - self.throttle) * factor;
        self.aileron += (target.aileron() - self.aileron) * factor;
        self.elevator += (target.elevator() - self.elevator) * factor;
        self.rudder += (target.rudder() - self.rudder) * factor;
    }

    /// Resets any surface that went non-finite and re-applies the ranges.
    pub(crate) fn sanitize(&mut self) {
        let fix = |v: f64, lo: f64, hi: f64| if v.is_finite() { v.clamp(lo, hi) } else { 0.0 };
        self.throttle = fix(self.throttle, 0.0, 1.0);
        self.aileron = fix(self.aileron, -1.0, 1.0);
        self.elevator = fix(self.elevator, -1.0, 1.0);
        self.rudder = fix(self.rudder, -1.0, 1.0);
    }
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::new(AircraftClass::Light)
    }
}

impl Aircraft {
    /// Builds an aircraft of a built-in class at rest at the origin.
    pub fn new(class: AircraftClass) -> Self {
        Self::from_config(&AircraftConfig::from_class(class))
    }

    pub fn from_config(config: &AircraftConfig) -> Self {
        Self {
            name: config.name.clone(),
            class: config.class,
            aero: config.aero,
            weight: config.weight,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            requested: ControlInputs::default(),
            controls: ControlSurfaces::default(),
        }
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Current smoothed control surfaces.
    pub fn controls(&self) -> ControlSurfaces {
        self.controls
    }

    pub fn throttle(&self) -> f64 {
        self.controls.throttle
    }

    /// Nose direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.rotation * Vector3::z()
    }

    /// Canopy direction in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.rotation * Vector3::y()
    }

    /// Right wingtip direction in world space.
    pub fn right(&self) -> Vector3<f64> {
        self.rotation * -Vector3::x()
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Ground-frame speed, `|velocity|`.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}
