use bevy::prelude::*;

/// Top-level lifecycle of a play session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    #[default]
    Menu,
    Briefing,
    Playing,
    Paused,
    GameOver,
    MissionComplete,
}

/// Something that may move the game to a new [`GameState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GameTrigger {
    SelectMission,
    StartMission,
    Pause,
    Resume,
    MissionFailed,
    MissionCompleted,
    Retry,
    ReturnToMenu,
}

impl GameState {
    /// Next state after `trigger`, or `None` if the trigger does not apply here.
    pub fn apply(self, trigger: GameTrigger) -> Option<GameState> {
        use GameState::*;
        use GameTrigger::*;

        match (self, trigger) {
            (Menu, SelectMission) => Some(Briefing),
            (Menu | Briefing, StartMission) => Some(Playing),
            (Playing, Pause) => Some(Paused),
            (Paused, Resume) => Some(Playing),
            (Playing, MissionFailed) => Some(GameOver),
            (Playing, MissionCompleted) => Some(MissionComplete),
            (GameOver | MissionComplete, Retry) => Some(Playing),
            (Briefing | Playing | Paused | GameOver | MissionComplete, ReturnToMenu) => Some(Menu),
            _ => None,
        }
    }

    /// Whether the simulation should be stepping.
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::MissionComplete)
    }
}
