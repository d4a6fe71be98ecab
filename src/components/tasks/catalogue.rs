use nalgebra::Vector3;

use crate::components::tasks::{Checkpoint, Mission, MissionStart, MissionTier};
use crate::resources::EnvironmentConditions;

impl Mission {
    /// The missions that ship with the simulator.
    pub fn catalogue() -> Vec<Mission> {
        vec![Self::first_flight(), Self::valley_run(), Self::speed_trial()]
    }

    /// Looks a built-in mission up by id.
    pub fn from_catalogue(id: &str) -> Option<Mission> {
        Self::catalogue().into_iter().find(|m| m.id == id)
    }

    /// One generous ring straight ahead.
    pub fn first_flight() -> Self {
        Mission::new("first_flight", "First Flight")
            .with_description("Take off and fly through the ring ahead.")
            .with_tier(MissionTier::Beginner)
            .with_time_limit(180.0)
            .with_checkpoint(Checkpoint::new("ring", Vector3::new(0.0, 120.0, 500.0), 100.0))
    }

    /// Gates along a valley floor with altitude restrictions and a crosswind.
    pub fn valley_run() -> Self {
        Mission::new("valley_run", "Valley Run")
            .with_description("Stay low through the valley gates.")
            .with_tier(MissionTier::Intermediate)
            .with_time_limit(240.0)
            .with_environment(
                EnvironmentConditions::calm()
                    .with_wind(Vector3::new(1.0, 0.0, 0.0), 6.0)
                    .with_turbulence(0.2),
            )
            .with_start(MissionStart {
                position: Vector3::new(0.0, 150.0, 0.0),
                heading: 0.0,
                speed: 45.0,
            })
            .with_checkpoint(
                Checkpoint::new("gate_1", Vector3::new(0.0, 120.0, 600.0), 60.0)
                    .with_altitude_band(80.0, 160.0),
            )
            .with_checkpoint(
                Checkpoint::new("gate_2", Vector3::new(250.0, 100.0, 1200.0), 60.0)
                    .with_altitude_band(60.0, 140.0),
            )
            .with_checkpoint(
                Checkpoint::new("gate_3", Vector3::new(0.0, 90.0, 1800.0), 60.0)
                    .with_altitude_band(50.0, 130.0),
            )
            .with_checkpoint(Checkpoint::new("exit", Vector3::new(0.0, 200.0, 2400.0), 80.0))
    }

    /// Timed gates that must be crossed at speed.
    pub fn speed_trial() -> Self {
        Mission::new("speed_trial", "Speed Trial")
            .with_description("Hold the target speed through every gate.")
            .with_tier(MissionTier::Expert)
            .with_time_limit(90.0)
            .with_environment(
                EnvironmentConditions::calm()
                    .with_wind(Vector3::new(0.0, 0.0, -1.0), 10.0)
                    .with_turbulence(0.5),
            )
            .with_start(MissionStart {
                position: Vector3::new(0.0, 300.0, 0.0),
                heading: 0.0,
                speed: 120.0,
            })
            .with_checkpoint(
                Checkpoint::new("sprint_1", Vector3::new(0.0, 300.0, 1500.0), 50.0)
                    .with_required_speed(150.0),
            )
            .with_checkpoint(
                Checkpoint::new("sprint_2", Vector3::new(0.0, 300.0, 3500.0), 50.0)
                    .with_required_speed(180.0),
            )
            .with_checkpoint(
                Checkpoint::new("sprint_3", Vector3::new(0.0, 300.0, 6000.0), 50.0)
                    .with_required_speed(200.0),
            )
    }
}
