pub mod mission;
pub mod physics;

pub use mission::{
    mission_in_progress, mission_progress_system, pause_system, return_to_menu_system,
    select_mission_system, start_mission_system, ActiveMission, CheckpointReachedEvent, GameState, GameTrigger,
    MissionCompleteEvent, MissionEvent, MissionFailedEvent, MissionProgress,
    MissionProgressTracker, PauseRequestEvent, ResumeRequestEvent, RetryMissionEvent,
    ReturnToMenuEvent, SelectMissionEvent, StartMissionEvent,
};
pub use physics::{
    angle_of_attack, flight_dynamics_system, handle_difficulty_events, FlightDynamicsEngine,
    ForceBreakdown, SetDifficultyEvent,
};
