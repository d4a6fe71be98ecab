use serde::{Deserialize, Serialize};

use crate::components::Checkpoint;

/// Read-only progress snapshot, rebuilt from the tracker on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionProgress {
    pub mission_id: String,
    pub checkpoints_completed: usize,
    pub total_checkpoints: usize,
    pub score: i64,
    /// Seconds since the mission started, frozen once it ends.
    pub elapsed_time: f64,
}

impl MissionProgress {
    /// Fraction of checkpoints passed in [0, 1]. An empty mission reads as done.
    pub fn percent_complete(&self) -> f64 {
        if self.total_checkpoints == 0 {
            return 1.0;
        }
        self.checkpoints_completed as f64 / self.total_checkpoints as f64
    }
}

/// Notifications produced by a tracker update, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionEvent {
    CheckpointReached(Checkpoint),
    MissionComplete(MissionProgress),
    MissionFailed(String),
}

impl MissionEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MissionEvent::CheckpointReached(_))
    }
}
