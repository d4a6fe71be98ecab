use bevy::log::warn;
use nalgebra::Vector3;

use crate::components::Aircraft;
use crate::utils::{is_finite_vector, validate_quaternion};

/// Advances velocity then position by one explicit Euler step.
///
/// Position is advanced with the freshly updated velocity.
pub fn integrate_euler(aircraft: &mut Aircraft, acceleration: Vector3<f64>, dt: f64) {
    aircraft.acceleration = acceleration;
    aircraft.velocity += acceleration * dt;
    aircraft.position += aircraft.velocity * dt;
}

/// Replaces non-finite kinematics with safe defaults before a tick runs.
pub fn sanitize_kinematics(aircraft: &mut Aircraft) {
    if !is_finite_vector(&aircraft.position) {
        warn!(
            "Non-finite position {:?} on '{}', resetting to origin",
            aircraft.position, aircraft.name
        );
        aircraft.position = Vector3::zeros();
    }
    if !is_finite_vector(&aircraft.velocity) {
        warn!(
            "Non-finite velocity {:?} on '{}', resetting to rest",
            aircraft.velocity, aircraft.name
        );
        aircraft.velocity = Vector3::zeros();
    }
    if !is_finite_vector(&aircraft.acceleration) {
        aircraft.acceleration = Vector3::zeros();
    }
    aircraft.rotation = validate_quaternion(aircraft.rotation.quaternion());
    aircraft.controls.sanitize();
}

/// Rolls back a step whose result overflowed.
///
/// `before` is the state the step started from; only the kinematic fields
/// that went non-finite are restored.
pub fn guard_step(aircraft: &mut Aircraft, before: &Aircraft) {
    if !is_finite_vector(&aircraft.velocity) {
        warn!("Velocity overflowed on '{}', holding previous value", aircraft.name);
        aircraft.velocity = before.velocity;
        aircraft.acceleration = Vector3::zeros();
    }
    if !is_finite_vector(&aircraft.position) {
        warn!("Position overflowed on '{}', holding previous value", aircraft.name);
        aircraft.position = before.position;
    }
    if !is_finite_vector(&aircraft.acceleration) {
        aircraft.acceleration = Vector3::zeros();
    }
}
