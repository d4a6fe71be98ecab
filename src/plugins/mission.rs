use bevy::prelude::*;

use crate::plugins::{FlightPlugin, FlightSet};
use crate::systems::mission::{
    mission_in_progress, mission_progress_system, pause_system, return_to_menu_system, select_mission_system,
    start_mission_system, ActiveMission, CheckpointReachedEvent, MissionCompleteEvent,
    MissionFailedEvent, PauseRequestEvent, ResumeRequestEvent, RetryMissionEvent,
    ReturnToMenuEvent, SelectMissionEvent, StartMissionEvent,
};

/// Drives the mission lifecycle: request events in, progress events and
/// [`GameState`](crate::systems::mission::GameState) changes out.
///
/// Requires [`FlightPlugin`], which is added with defaults if missing.
pub struct MissionPlugin;

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FlightPlugin>() {
            app.add_plugins(FlightPlugin::default());
        }

        app.init_resource::<ActiveMission>()
            .add_event::<CheckpointReachedEvent>()
            .add_event::<MissionCompleteEvent>()
            .add_event::<MissionFailedEvent>()
            .add_event::<SelectMissionEvent>()
            .add_event::<StartMissionEvent>()
            .add_event::<PauseRequestEvent>()
            .add_event::<ResumeRequestEvent>()
            .add_event::<RetryMissionEvent>()
            .add_event::<ReturnToMenuEvent>();

        // Terminal state changes only land next frame
        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Progress).run_if(mission_in_progress),
        );

        app.add_systems(
            Update,
            (
                select_mission_system,
                start_mission_system,
                pause_system,
                return_to_menu_system,
            )
                .chain(),
        )
        .add_systems(
            FixedUpdate,
            mission_progress_system.in_set(FlightSet::Progress),
        );
    }
}
