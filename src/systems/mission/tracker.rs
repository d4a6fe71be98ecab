use bevy::log::info;
use std::collections::HashMap;

use crate::components::{Aircraft, Checkpoint, Mission};
use crate::resources::Difficulty;
use crate::systems::mission::{MissionEvent, MissionProgress};
use crate::utils::constants::{
    CHECKPOINT_BASE_SCORE, EFFICIENCY_POINTS_PER_SECOND, EFFICIENCY_WINDOW,
};
use crate::utils::safe_truncate_to_int;

pub const TIME_LIMIT_EXCEEDED: &str = "Time limit exceeded";

/// Sequences an aircraft through a mission's checkpoints in order.
///
/// Time is supplied by the caller in seconds on any monotonic clock; the
/// tracker only ever looks at differences from the `start` time.
#[derive(Debug, Clone)]
pub struct MissionProgressTracker {
    mission: Mission,
    difficulty: Difficulty,

    current_index: usize,
    score: i64,
    checkpoint_times: HashMap<String, f64>,
    last_checkpoint_time: Option<f64>,

    start_time: Option<f64>,
    now: f64,
    completion_time: Option<f64>,
    failure: Option<(f64, String)>,
}

impl MissionProgressTracker {
    pub fn new(mission: Mission, difficulty: Difficulty) -> Self {
        Self {
            mission,
            difficulty,
            current_index: 0,
            score: 0,
            checkpoint_times: HashMap::new(),
            last_checkpoint_time: None,
            start_time: None,
            now: 0.0,
            completion_time: None,
            failure: None,
        }
    }

    /// Begins (or restarts) the mission at `now`, discarding all progress.
    pub fn start(&mut self, now: f64) {
        self.current_index = 0;
        self.score = 0;
        self.checkpoint_times.clear();
        self.last_checkpoint_time = None;
        self.start_time = Some(now);
        self.now = now;
        self.completion_time = None;
        self.failure = None;

        info!(
            "Mission '{}' started with {} checkpoints",
            self.mission.id,
            self.mission.checkpoint_count()
        );
    }

    /// Evaluates one tick and returns the notifications it produced.
    ///
    /// Does nothing before `start` or after the mission has ended.
    pub fn update(&mut self, aircraft: &Aircraft, now: f64) -> Vec<MissionEvent> {
        let mut events = Vec::new();
        let Some(start) = self.start_time else {
            return events;
        };
        if self.is_finished() {
            return events;
        }

        // A clock running backwards or NaN holds the last known time
        if now.is_finite() && now >= self.now {
            self.now = now;
        }
        let elapsed = self.now - start;

        if let Some(limit) = self.mission.time_limit {
            if elapsed > limit {
                info!(
                    "Mission '{}' failed after {:.1}s: time limit {:.1}s exceeded",
                    self.mission.id, elapsed, limit
                );
                self.failure = Some((self.now, TIME_LIMIT_EXCEEDED.to_string()));
                events.push(MissionEvent::MissionFailed(TIME_LIMIT_EXCEEDED.to_string()));
                return events;
            }
        }

        if let Some(checkpoint) = self.mission.checkpoints.get(self.current_index) {
            if checkpoint.contains(aircraft) {
                let checkpoint = checkpoint.clone();
                let delta = self.checkpoint_score(aircraft.speed(), elapsed);
                self.score = self.score.saturating_add(delta);
                self.checkpoint_times.insert(checkpoint.id.clone(), elapsed);
                self.last_checkpoint_time = Some(elapsed);
                self.current_index += 1;

                info!(
                    "Checkpoint '{}' reached at {:.1}s (+{}, total {})",
                    checkpoint.id, elapsed, delta, self.score
                );
                events.push(MissionEvent::CheckpointReached(checkpoint));
            }
        }

        if self.is_objective_complete() {
            self.completion_time = Some(self.now);
            let progress = self.snapshot();
            info!(
                "Mission '{}' complete in {:.1}s with score {}",
                self.mission.id, progress.elapsed_time, progress.score
            );
            events.push(MissionEvent::MissionComplete(progress));
        }

        events
    }

    /// Points for passing a checkpoint at `speed` after `elapsed` seconds.
    fn checkpoint_score(&self, speed: f64, elapsed: f64) -> i64 {
        let speed_bonus = (speed / 10.0).floor().max(0.0);
        let efficiency_bonus = match self.last_checkpoint_time {
            Some(previous) => {
                (EFFICIENCY_WINDOW - (elapsed - previous)).max(0.0) * EFFICIENCY_POINTS_PER_SECOND
            }
            None => 0.0,
        };
        let raw = CHECKPOINT_BASE_SCORE + speed_bonus + efficiency_bonus;
        safe_truncate_to_int(raw * self.difficulty.score_multiplier())
    }

    /// True once every checkpoint has been passed. An empty mission is
    /// complete from the outset.
    pub fn is_objective_complete(&self) -> bool {
        self.current_index >= self.mission.checkpoints.len()
    }

    pub fn snapshot(&self) -> MissionProgress {
        let end = self
            .completion_time
            .or(self.failure.as_ref().map(|(time, _)| *time))
            .unwrap_or(self.now);
        let elapsed_time = self.start_time.map_or(0.0, |start| end - start);

        MissionProgress {
            mission_id: self.mission.id.clone(),
            checkpoints_completed: self.current_index.min(self.mission.checkpoints.len()),
            total_checkpoints: self.mission.checkpoints.len(),
            score: self.score,
            elapsed_time,
        }
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Applies to the next `start`; a running attempt keeps its multiplier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if !self.is_started() || self.is_finished() {
            self.difficulty = difficulty;
        }
    }

    /// The checkpoint the aircraft must reach next.
    pub fn current_checkpoint(&self) -> Option<&Checkpoint> {
        self.mission.checkpoints.get(self.current_index)
    }

    /// Elapsed seconds at which each checkpoint was reached, keyed by id.
    pub fn checkpoint_times(&self) -> &HashMap<String, f64> {
        &self.checkpoint_times
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some() || self.failure.is_some()
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure.as_ref().map(|(_, reason)| reason.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use pretty_assertions::assert_eq;

    fn single_ring() -> Mission {
        Mission::new("ring", "Ring")
            .with_checkpoint(Checkpoint::new("cp1", Vector3::new(0.0, 100.0, 500.0), 100.0))
            .with_time_limit(180.0)
    }

    fn three_gates() -> Mission {
        Mission::new("gates", "Gates")
            .with_checkpoint(Checkpoint::new("a", Vector3::new(0.0, 100.0, 100.0), 20.0))
            .with_checkpoint(Checkpoint::new("b", Vector3::new(0.0, 100.0, 200.0), 20.0))
            .with_checkpoint(Checkpoint::new("c", Vector3::new(0.0, 100.0, 300.0), 20.0))
    }

    fn aircraft_at(z: f64, speed: f64) -> Aircraft {
        Aircraft::default()
            .with_position(Vector3::new(0.0, 100.0, z))
            .with_velocity(Vector3::new(0.0, 0.0, speed))
    }

    #[test]
    fn test_update_before_start_is_noop() {
        let mut tracker = MissionProgressTracker::new(single_ring(), Difficulty::Easy);
        let events = tracker.update(&aircraft_at(500.0, 50.0), 1.0);

        assert!(events.is_empty());
        assert_eq!(tracker.snapshot().checkpoints_completed, 0);
        assert!(!tracker.is_finished());
    }

    #[test]
    fn test_empty_mission_completes_on_first_update() {
        let mut tracker = MissionProgressTracker::new(Mission::new("empty", "Empty"), Difficulty::Normal);
        tracker.start(0.0);
        assert!(tracker.is_objective_complete());

        let events = tracker.update(&Aircraft::default(), 0.0);
        assert_eq!(events.len(), 1);
        match &events[0] {
            MissionEvent::MissionComplete(progress) => {
                assert_eq!(progress.total_checkpoints, 0);
                assert_eq!(progress.score, 0);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(tracker.is_finished());
        assert!(tracker.update(&Aircraft::default(), 1.0).is_empty());
    }

    #[test]
    fn test_single_checkpoint_completes_mission() {
        let mut tracker = MissionProgressTracker::new(single_ring(), Difficulty::Easy);
        tracker.start(10.0);

        assert!(tracker.update(&aircraft_at(0.0, 50.0), 11.0).is_empty());

        let events = tracker.update(&aircraft_at(420.0, 50.0), 20.0);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], MissionEvent::CheckpointReached(cp) if cp.id == "cp1"));

        let MissionEvent::MissionComplete(progress) = &events[1] else {
            panic!("expected completion, got {:?}", events[1]);
        };
        // 100 base + 5 speed bonus, no previous checkpoint
        assert_eq!(progress.score, 105);
        assert_eq!(progress.checkpoints_completed, 1);
        assert_eq!(progress.elapsed_time, 10.0);
        assert!(tracker.is_objective_complete());
        assert_eq!(tracker.checkpoint_times().get("cp1"), Some(&10.0));
    }

    #[test]
    fn test_time_limit_fails_once() {
        let mut tracker = MissionProgressTracker::new(single_ring(), Difficulty::Normal);
        tracker.start(0.0);

        assert!(tracker.update(&aircraft_at(0.0, 50.0), 180.0).is_empty());

        let events = tracker.update(&aircraft_at(0.0, 50.0), 180.5);
        assert_eq!(
            events,
            vec![MissionEvent::MissionFailed(TIME_LIMIT_EXCEEDED.to_string())]
        );
        assert!(tracker.is_failed());
        assert_eq!(tracker.failure_reason(), Some(TIME_LIMIT_EXCEEDED));

        // Flying into the ring afterwards changes nothing
        assert!(tracker.update(&aircraft_at(500.0, 50.0), 181.0).is_empty());
        let progress = tracker.snapshot();
        assert_eq!(progress.score, 0);
        assert_eq!(progress.checkpoints_completed, 0);
        assert_eq!(progress.elapsed_time, 180.5);
    }

    #[test]
    fn test_checkpoints_are_sequential() {
        let mut tracker = MissionProgressTracker::new(three_gates(), Difficulty::Easy);
        tracker.start(0.0);

        // Sitting inside gate "b" does not count while "a" is outstanding
        assert!(tracker.update(&aircraft_at(200.0, 40.0), 1.0).is_empty());
        assert_eq!(tracker.current_checkpoint().map(|cp| cp.id.as_str()), Some("a"));

        let events = tracker.update(&aircraft_at(100.0, 40.0), 2.0);
        assert!(matches!(&events[..], [MissionEvent::CheckpointReached(cp)] if cp.id == "a"));

        // Only one checkpoint per tick even when the next one also contains us
        let events = tracker.update(&aircraft_at(200.0, 40.0), 3.0);
        assert_eq!(events.len(), 1);
        assert_eq!(tracker.current_checkpoint().map(|cp| cp.id.as_str()), Some("c"));
    }

    #[test]
    fn test_efficiency_bonus_and_multiplier() {
        let mut tracker = MissionProgressTracker::new(three_gates(), Difficulty::Realistic);
        tracker.start(0.0);

        tracker.update(&aircraft_at(100.0, 25.0), 5.0);
        // (100 + 2) * 2
        assert_eq!(tracker.score(), 204);

        tracker.update(&aircraft_at(200.0, 25.0), 15.0);
        // (100 + 2 + (30 - 10) * 10) * 2
        assert_eq!(tracker.score(), 204 + 604);

        tracker.update(&aircraft_at(300.0, 25.0), 60.0);
        // Slower than the efficiency window earns no bonus
        assert_eq!(tracker.score(), 204 + 604 + 204);
        assert!(tracker.is_finished());
    }

    #[test]
    fn test_normal_multiplier_truncates() {
        let mission = Mission::new("one", "One")
            .with_checkpoint(Checkpoint::new("a", Vector3::new(0.0, 100.0, 0.0), 10.0));
        let mut tracker = MissionProgressTracker::new(mission, Difficulty::Normal);
        tracker.start(0.0);
        tracker.update(&aircraft_at(0.0, 15.0), 1.0);

        // (100 + 1) * 1.5 = 151.5
        assert_eq!(tracker.score(), 151);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut tracker = MissionProgressTracker::new(three_gates(), Difficulty::Easy);
        tracker.start(0.0);
        tracker.update(&aircraft_at(100.0, 40.0), 1.0);
        assert!(tracker.score() > 0);

        tracker.start(50.0);
        let progress = tracker.snapshot();
        assert_eq!(progress.score, 0);
        assert_eq!(progress.checkpoints_completed, 0);
        assert_eq!(progress.elapsed_time, 0.0);
        assert!(tracker.checkpoint_times().is_empty());
        assert_eq!(tracker.current_checkpoint().map(|cp| cp.id.as_str()), Some("a"));
    }

    #[test]
    fn test_restart_after_failure() {
        let mut tracker = MissionProgressTracker::new(single_ring(), Difficulty::Easy);
        tracker.start(0.0);
        tracker.update(&aircraft_at(0.0, 50.0), 200.0);
        assert!(tracker.is_failed());

        tracker.start(200.0);
        assert!(!tracker.is_failed());
        assert_eq!(tracker.failure_reason(), None);

        let events = tracker.update(&aircraft_at(500.0, 50.0), 210.0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_nan_position_never_reaches_checkpoint() {
        let mut tracker = MissionProgressTracker::new(single_ring(), Difficulty::Easy);
        tracker.start(0.0);
        let lost = Aircraft::default().with_position(Vector3::new(f64::NAN, 100.0, 500.0));

        assert!(tracker.update(&lost, 1.0).is_empty());
        assert_eq!(tracker.snapshot().checkpoints_completed, 0);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut tracker = MissionProgressTracker::new(three_gates(), Difficulty::Easy);
        tracker.start(10.0);
        tracker.update(&aircraft_at(0.0, 0.0), 15.0);
        tracker.update(&aircraft_at(0.0, 0.0), 12.0);
        tracker.update(&aircraft_at(0.0, 0.0), f64::NAN);

        assert_eq!(tracker.snapshot().elapsed_time, 5.0);
    }
}
