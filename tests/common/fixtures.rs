use nalgebra::Vector3;
use sortie::components::{Aircraft, AircraftClass, Checkpoint, Mission};

pub const DT: f64 = 1.0 / 60.0;

/// Light aircraft at rest at `altitude`, nose along +Z.
pub fn parked_light_aircraft(altitude: f64) -> Aircraft {
    Aircraft::new(AircraftClass::Light).with_position(Vector3::new(0.0, altitude, 0.0))
}

/// Aircraft of `class` in straight flight along +Z.
pub fn cruising_aircraft(class: AircraftClass, altitude: f64, speed: f64) -> Aircraft {
    Aircraft::new(class)
        .with_position(Vector3::new(0.0, altitude, 0.0))
        .with_velocity(Vector3::new(0.0, 0.0, speed))
}

/// One unconstrained ring 500 m ahead with a three minute limit.
pub fn ring_mission() -> Mission {
    Mission::new("ring", "Ring")
        .with_checkpoint(Checkpoint::new("ring", Vector3::new(0.0, 100.0, 500.0), 100.0))
        .with_time_limit(180.0)
}

/// Gates spaced 100 m apart along +Z at 100 m altitude.
pub fn gate_mission(gates: usize) -> Mission {
    (0..gates).fold(Mission::new("gates", "Gates"), |mission, i| {
        mission.with_checkpoint(Checkpoint::new(
            format!("gate_{}", i),
            Vector3::new(0.0, 100.0, 100.0 * (i + 1) as f64),
            20.0,
        ))
    })
}

pub fn aircraft_at(position: Vector3<f64>, speed: f64) -> Aircraft {
    Aircraft::default()
        .with_position(position)
        .with_velocity(Vector3::new(0.0, 0.0, speed))
}
