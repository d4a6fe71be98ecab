use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::resources::{Difficulty, FlightConfig, WindModel};
use crate::systems::mission::GameState;
use crate::systems::physics::{
    flight_dynamics_system, handle_difficulty_events, FlightDynamicsEngine, SetDifficultyEvent,
};

/// Fixed-tick simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Dynamics,
    Progress,
}

/// Steps every [`Aircraft`](crate::components::Aircraft) at the configured
/// tick rate while a mission is being flown.
pub struct FlightPlugin {
    pub config: FlightConfig,
    pub difficulty: Difficulty,
    pub wind: WindModel,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            config: FlightConfig::default(),
            difficulty: Difficulty::default(),
            wind: WindModel::default(),
        }
    }
}

impl FlightPlugin {
    pub fn with_config(config: FlightConfig) -> Self {
        Self {
            config,
            ..default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_wind(mut self, wind: WindModel) -> Self {
        self.wind = wind;
        self
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        app.init_state::<GameState>();

        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                warn!("Invalid flight config ({}), using defaults", e);
                FlightConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_rate_hz))
            .insert_resource(FlightDynamicsEngine::new(config.clone()).with_difficulty(self.difficulty))
            .insert_resource(self.wind.clone())
            .insert_resource(config)
            .add_event::<SetDifficultyEvent>();

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Progress)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(Update, handle_difficulty_events)
            .add_systems(
                FixedUpdate,
                flight_dynamics_system.in_set(FlightSet::Dynamics),
            );
    }
}
