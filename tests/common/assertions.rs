use nalgebra::Vector3;
use sortie::components::Aircraft;

/// Assert that an aircraft's kinematic state is usable
#[track_caller]
pub fn assert_aircraft_valid(aircraft: &Aircraft) {
    // Verify position is finite
    assert!(aircraft.position.x.is_finite(), "Position x is not finite");
    assert!(aircraft.position.y.is_finite(), "Position y is not finite");
    assert!(aircraft.position.z.is_finite(), "Position z is not finite");

    // Verify velocity is finite
    assert!(aircraft.velocity.x.is_finite(), "Velocity x is not finite");
    assert!(aircraft.velocity.y.is_finite(), "Velocity y is not finite");
    assert!(aircraft.velocity.z.is_finite(), "Velocity z is not finite");

    assert_unit_rotation(aircraft);

    // Smoothed controls stay in range
    let controls = aircraft.controls();
    assert!((0.0..=1.0).contains(&controls.throttle), "Throttle out of range");
    assert!((-1.0..=1.0).contains(&controls.aileron), "Aileron out of range");
    assert!((-1.0..=1.0).contains(&controls.elevator), "Elevator out of range");
    assert!((-1.0..=1.0).contains(&controls.rudder), "Rudder out of range");
}

/// Assert that the orientation quaternion is finite and of unit length
#[track_caller]
pub fn assert_unit_rotation(aircraft: &Aircraft) {
    let q = aircraft.rotation.quaternion();
    assert!(
        q.coords.iter().all(|c| c.is_finite()),
        "Rotation is not finite: {:?}",
        q
    );
    assert!(
        (q.norm() - 1.0).abs() <= 1e-3,
        "Rotation norm {} drifted from 1",
        q.norm()
    );
}

#[track_caller]
pub fn assert_position_near(actual: &Vector3<f64>, expected: &Vector3<f64>, tolerance: f64) {
    let error = (actual - expected).norm();
    assert!(
        error <= tolerance,
        "Position {:?} is {} m from {:?} (tolerance {})",
        actual,
        error,
        expected,
        tolerance
    );
}
