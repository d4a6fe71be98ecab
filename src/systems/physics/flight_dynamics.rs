use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::components::Aircraft;
use crate::resources::{Difficulty, FlightConfig};
use crate::systems::physics::integrator::{guard_step, integrate_euler, sanitize_kinematics};
use crate::utils::{is_finite_vector, safe_clamp, safe_normalize, validate_quaternion};

/// Individual forces acting on the airframe during one tick, in world space [N].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub thrust: Vector3<f64>,
    pub weight: Vector3<f64>,
    pub angle_of_attack: f64,
    pub dynamic_pressure: f64,
}

impl ForceBreakdown {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag + self.thrust + self.weight
    }
}

/// Signed angle between the nose and the air-relative velocity [rad].
///
/// Positive when the nose sits above the flight path, judged by the
/// component of `forward` perpendicular to the airflow.
pub fn angle_of_attack(forward: &Vector3<f64>, air_velocity: &Vector3<f64>) -> f64 {
    let flow = safe_normalize(air_velocity, *forward);
    let angle = safe_clamp(forward.dot(&flow), -1.0, 1.0).acos();

    // flow × (forward × flow) is the part of forward orthogonal to the flow
    let perpendicular = flow.cross(&forward.cross(&flow));
    if perpendicular.dot(&Vector3::y()) >= 0.0 {
        angle
    } else {
        -angle
    }
}

/// Arcade rigid-body flight model.
///
/// One engine can drive any number of aircraft; per-airframe coefficients
/// live on the [`Aircraft`] itself.
#[derive(Resource, Debug, Clone)]
pub struct FlightDynamicsEngine {
    config: FlightConfig,
    difficulty: Difficulty,
    stability_assist: f64,
}

impl Default for FlightDynamicsEngine {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

impl FlightDynamicsEngine {
    pub fn new(config: FlightConfig) -> Self {
        let difficulty = Difficulty::default();
        Self {
            config,
            difficulty,
            stability_assist: difficulty.stability_assist(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.set_difficulty(difficulty);
        self
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn stability_assist(&self) -> f64 {
        self.stability_assist
    }

    /// Selects the difficulty and the matching stability assist.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            info!("Flight difficulty set to {:?}", difficulty);
        }
        self.difficulty = difficulty;
        self.stability_assist = difficulty.stability_assist();
    }

    /// Overrides the assist strength directly, clamped to [0, 1].
    pub fn set_stability_assist(&mut self, assist: f64) {
        self.stability_assist = safe_clamp(assist, 0.0, 1.0);
    }

    /// Advances `aircraft` by `dt` seconds through `wind`.
    ///
    /// Never fails: a non-positive or non-finite `dt` skips the tick,
    /// non-finite wind is treated as still air and non-finite state is reset
    /// to safe defaults before integrating.
    pub fn update(&self, aircraft: &mut Aircraft, dt: f64, wind: Vector3<f64>) {
        if !(dt.is_finite() && dt > 0.0) {
            warn!("Skipping flight update with invalid dt {}", dt);
            return;
        }

        let wind = if is_finite_vector(&wind) {
            wind
        } else {
            warn!("Non-finite wind {:?} treated as still air", wind);
            Vector3::zeros()
        };

        sanitize_kinematics(aircraft);
        let before = aircraft.clone();

        let requested = aircraft.requested;
        aircraft
            .controls
            .approach(&requested, self.config.smoothing_factor);
        aircraft.controls.sanitize();

        let air_velocity = aircraft.velocity - wind;
        let airspeed = air_velocity.norm();

        if airspeed <= self.config.low_speed_threshold {
            debug!(
                "Airspeed {:.3} m/s at or below threshold, applying gravity only",
                airspeed
            );
            integrate_euler(aircraft, Vector3::new(0.0, -self.config.gravity, 0.0), dt);
            guard_step(aircraft, &before);
            return;
        }

        let forces = self.forces_at(aircraft, &air_velocity);
        let acceleration = forces.total() / aircraft.weight;
        integrate_euler(aircraft, acceleration, dt);
        guard_step(aircraft, &before);

        self.rotate(aircraft, airspeed, dt);
    }

    /// Force model for the aircraft's current state, or `None` when the
    /// airspeed is too low for aerodynamics to apply.
    pub fn forces(&self, aircraft: &Aircraft, wind: Vector3<f64>) -> Option<ForceBreakdown> {
        let air_velocity = aircraft.velocity - wind;
        if !(air_velocity.norm() > self.config.low_speed_threshold) {
            return None;
        }
        Some(self.forces_at(aircraft, &air_velocity))
    }

    fn forces_at(&self, aircraft: &Aircraft, air_velocity: &Vector3<f64>) -> ForceBreakdown {
        let aero = &aircraft.aero;
        let airspeed = air_velocity.norm();
        let forward = safe_normalize(&aircraft.forward(), Vector3::z());

        let alpha = angle_of_attack(&forward, air_velocity);
        let dynamic_pressure = 0.5 * self.config.air_density * airspeed * airspeed;

        let cl = safe_clamp(aero.lift_slope * alpha, -aero.cl_max, aero.cl_max);
        let cdi = cl * cl / (PI * aero.aspect_ratio() * aero.oswald_efficiency);
        let cd = aero.cd0 + cdi;

        // Lift acts along world up and drag along the tail, not relative to
        // the true airflow.
        let lift = Vector3::y() * (dynamic_pressure * aero.wing_area * cl);
        let drag = -forward * (dynamic_pressure * aero.wing_area * cd);
        let thrust = forward * (aircraft.controls.throttle * self.config.max_thrust);
        let weight = Vector3::new(0.0, -aircraft.weight * self.config.gravity, 0.0);

        ForceBreakdown {
            lift,
            drag,
            thrust,
            weight,
            angle_of_attack: alpha,
            dynamic_pressure,
        }
    }

    /// Body rates from the smoothed controls plus the wings-level assist.
    ///
    /// Returns (roll, pitch, yaw) in rad/s. Positive pitch raises the nose.
    pub fn angular_rates(&self, aircraft: &Aircraft, airspeed: f64) -> Vector3<f64> {
        let controls = aircraft.controls;
        let effectiveness = (airspeed / self.config.control_saturation_speed).min(1.0);

        let right = aircraft.right();
        let forward = aircraft.forward();

        // Assist fades out as the pilot commands the axis
        let roll_assist = self.stability_assist * (1.0 - controls.aileron.abs()) * right.y;
        let pitch_assist = self.stability_assist * (1.0 - controls.elevator.abs()) * -forward.y;

        let roll = controls.aileron * effectiveness * self.config.roll_gain + roll_assist;
        let pitch = controls.elevator * effectiveness * self.config.pitch_gain + pitch_assist;
        let yaw = controls.rudder * effectiveness * self.config.yaw_gain;

        let rates = Vector3::new(roll, pitch, yaw);
        if is_finite_vector(&rates) {
            rates
        } else {
            Vector3::zeros()
        }
    }

    fn rotate(&self, aircraft: &mut Aircraft, airspeed: f64, dt: f64) {
        let rates = self.angular_rates(aircraft, airspeed);

        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), rates.x * dt);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -rates.y * dt);
        // Right wing is -X, so yawing right is a negative turn about +Y
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -rates.z * dt);

        // Order matters: roll, then pitch, then yaw, all about body axes
        let composed = aircraft.rotation * roll * pitch * yaw;
        aircraft.rotation = validate_quaternion(composed.quaternion());
    }
}
