mod events;
mod game_state;
mod progress;
mod tracker;

pub use events::{MissionEvent, MissionProgress};
pub use game_state::{GameState, GameTrigger};
pub use progress::{
    mission_in_progress, mission_progress_system, pause_system, return_to_menu_system,
    select_mission_system, start_mission_system, ActiveMission, CheckpointReachedEvent,
    MissionCompleteEvent, MissionFailedEvent, PauseRequestEvent, ResumeRequestEvent,
    RetryMissionEvent, ReturnToMenuEvent, SelectMissionEvent, StartMissionEvent,
};
pub use tracker::{MissionProgressTracker, TIME_LIMIT_EXCEEDED};
