use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::aircraft::config::{AircraftClass, AircraftConfig};
use crate::components::tasks::Checkpoint;
use crate::components::Aircraft;
use crate::resources::EnvironmentConditions;
use crate::utils::deg_to_rad;
use crate::utils::errors::{require_non_negative, require_positive, ConfigError};

/// Advertised challenge of a mission. Scoring uses the pilot's
/// [`Difficulty`](crate::resources::Difficulty), not this tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Where and how the aircraft enters the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionStart {
    pub position: Vector3<f64>,
    /// Degrees, same convention as the heading instrument.
    pub heading: f64,
    /// Initial speed along the nose [m/s]
    pub speed: f64,
}

impl Default for MissionStart {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 100.0, 0.0),
            heading: 0.0,
            speed: 0.0,
        }
    }
}

/// An ordered sequence of checkpoints plus the conditions they are flown in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Flown strictly in order.
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
    /// Seconds from start before the attempt fails.
    #[serde(default)]
    pub time_limit: Option<f64>,
    #[serde(default)]
    pub environment: EnvironmentConditions,
    #[serde(default)]
    pub tier: MissionTier,
    #[serde(default)]
    pub start: MissionStart,
}

impl Mission {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            checkpoints: Vec::new(),
            time_limit: None,
            environment: EnvironmentConditions::default(),
            tier: MissionTier::default(),
            start: MissionStart::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_checkpoint(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoints.push(checkpoint);
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentConditions) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_tier(mut self, tier: MissionTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_start(mut self, start: MissionStart) -> Self {
        self.start = start;
        self
    }

    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.len()
    }

    /// Places a fresh aircraft of `class` at the mission start.
    pub fn spawn_aircraft(&self, class: AircraftClass) -> Aircraft {
        self.spawn_configured(&AircraftConfig::from_class(class))
    }

    pub fn spawn_configured(&self, config: &AircraftConfig) -> Aircraft {
        let rotation =
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(self.start.heading));
        let velocity = rotation * Vector3::z() * self.start.speed;

        Aircraft::from_config(config)
            .with_position(self.start.position)
            .with_rotation(rotation)
            .with_velocity(velocity)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mission: Mission = serde_yaml::from_str(yaml)?;
        mission.validate()?;
        Ok(mission)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limit) = self.time_limit {
            require_positive("time_limit", limit)?;
        }
        require_non_negative("start speed", self.start.speed)?;
        for checkpoint in &self.checkpoints {
            checkpoint.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let mission = Mission::new("m1", "Test")
            .with_checkpoint(Checkpoint::new("a", Vector3::zeros(), 10.0))
            .with_checkpoint(Checkpoint::new("b", Vector3::zeros(), 10.0))
            .with_time_limit(60.0);

        assert_eq!(mission.checkpoint_count(), 2);
        assert_eq!(mission.checkpoints[1].id, "b");
        assert_eq!(mission.time_limit, Some(60.0));
    }

    #[test]
    fn test_spawn_uses_start_heading() {
        let mission = Mission::new("m", "Spawn").with_start(MissionStart {
            position: Vector3::new(1.0, 200.0, 3.0),
            heading: 90.0,
            speed: 50.0,
        });
        let aircraft = mission.spawn_aircraft(AircraftClass::Fighter);

        assert_eq!(aircraft.class, AircraftClass::Fighter);
        assert_eq!(aircraft.position, Vector3::new(1.0, 200.0, 3.0));
        assert_relative_eq!(aircraft.velocity, Vector3::new(50.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(aircraft.forward(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_yaml_mission() {
        let yaml = r#"
id: ridge
name: Ridge Line
time_limit: 120.0
tier: Intermediate
checkpoints:
  - id: first
    position: [0.0, 150.0, 400.0]
    radius: 80.0
  - id: second
    position: [200.0, 150.0, 800.0]
    radius: 80.0
    altitude_band: { min: 100.0, max: 200.0 }
"#;
        let mission = Mission::from_yaml_str(yaml).unwrap();
        assert_eq!(mission.id, "ridge");
        assert_eq!(mission.tier, MissionTier::Intermediate);
        assert_eq!(mission.checkpoint_count(), 2);
        assert_eq!(mission.checkpoints[0].position, Vector3::new(0.0, 150.0, 400.0));
        assert!(mission.checkpoints[1].altitude_band.is_some());
        assert_eq!(mission.environment, EnvironmentConditions::default());
    }

    #[test]
    fn test_yaml_rejects_invalid_time_limit() {
        let yaml = "id: bad\nname: Bad\ntime_limit: -5.0\n";
        assert!(matches!(
            Mission::from_yaml_str(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
