use bevy::prelude::*;

use crate::components::{
    Aircraft, AircraftClass, Checkpoint, ControlInputs, FlightInstruments, Mission,
};
use crate::resources::WindModel;
use crate::systems::mission::{
    GameState, GameTrigger, MissionEvent, MissionProgress, MissionProgressTracker,
};
use crate::systems::physics::FlightDynamicsEngine;

#[derive(Event, Debug, Clone)]
pub struct CheckpointReachedEvent(pub Checkpoint);

#[derive(Event, Debug, Clone)]
pub struct MissionCompleteEvent(pub MissionProgress);

#[derive(Event, Debug, Clone)]
pub struct MissionFailedEvent(pub String);

/// Load the briefing for a mission without starting it.
#[derive(Event, Debug, Clone)]
pub struct SelectMissionEvent(pub Mission);

/// Begin flying `mission` in a fresh aircraft of `class`.
#[derive(Event, Debug, Clone)]
pub struct StartMissionEvent {
    pub mission: Mission,
    pub class: AircraftClass,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PauseRequestEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct ResumeRequestEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct RetryMissionEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct ReturnToMenuEvent;

/// The mission being briefed or flown, with its progress tracker.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveMission {
    pub tracker: Option<MissionProgressTracker>,
    pub class: AircraftClass,
}

impl ActiveMission {
    pub fn progress(&self) -> Option<MissionProgress> {
        self.tracker.as_ref().map(|tracker| tracker.snapshot())
    }
}

/// Run condition for the fixed flight sets: false once the loaded mission
/// has finished, so later ticks in the same frame leave the aircraft alone.
pub fn mission_in_progress(active: Option<Res<ActiveMission>>) -> bool {
    active
        .and_then(|active| active.tracker.as_ref().map(|tracker| !tracker.is_finished()))
        .unwrap_or(true)
}

/// Queues the state change for `trigger`, returning the target state when
/// the trigger is valid from the current one.
fn request_transition(
    current: &State<GameState>,
    next: &mut NextState<GameState>,
    trigger: GameTrigger,
) -> Option<GameState> {
    let from = *current.get();
    match from.apply(trigger) {
        Some(to) => {
            info!("Game state {:?} -> {:?} on {:?}", from, to, trigger);
            next.set(to);
            Some(to)
        }
        None => {
            warn!("Ignoring {:?} while in {:?}", trigger, from);
            None
        }
    }
}

/// Puts the piloted aircraft at the mission start, spawning one if needed.
fn reset_aircraft(
    commands: &mut Commands,
    query: &mut Query<(&mut Aircraft, &mut ControlInputs, Option<&mut FlightInstruments>)>,
    mission: &Mission,
    class: AircraftClass,
) {
    let mut found = false;
    for (mut aircraft, mut inputs, instruments) in query.iter_mut() {
        found = true;
        *aircraft = mission.spawn_aircraft(class);
        *inputs = ControlInputs::neutral();
        if let Some(mut instruments) = instruments {
            *instruments = FlightInstruments::from_aircraft(&aircraft);
        }
    }

    if !found {
        let aircraft = mission.spawn_aircraft(class);
        let instruments = FlightInstruments::from_aircraft(&aircraft);
        commands.spawn((aircraft, ControlInputs::neutral(), instruments));
    }
}

pub fn select_mission_system(
    mut events: EventReader<SelectMissionEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut active: ResMut<ActiveMission>,
    engine: Res<FlightDynamicsEngine>,
) {
    if let Some(SelectMissionEvent(mission)) = events.read().last() {
        if request_transition(&state, &mut next_state, GameTrigger::SelectMission).is_some() {
            info!("Briefing mission '{}'", mission.id);
            active.tracker = Some(MissionProgressTracker::new(
                mission.clone(),
                engine.difficulty(),
            ));
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn start_mission_system(
    mut commands: Commands,
    mut starts: EventReader<StartMissionEvent>,
    mut retries: EventReader<RetryMissionEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut active: ResMut<ActiveMission>,
    mut wind: ResMut<WindModel>,
    mut virtual_time: ResMut<Time<Virtual>>,
    fixed_time: Res<Time<Fixed>>,
    engine: Res<FlightDynamicsEngine>,
    mut aircraft: Query<(&mut Aircraft, &mut ControlInputs, Option<&mut FlightInstruments>)>,
) {
    let start = starts.read().last().cloned();
    let retry = retries.read().last().is_some();

    let mission = if let Some(start) = start {
        if request_transition(&state, &mut next_state, GameTrigger::StartMission).is_none() {
            return;
        }
        active.class = start.class;
        start.mission
    } else if retry {
        let Some(tracker) = active.tracker.as_ref() else {
            warn!("Retry requested with no mission loaded");
            return;
        };
        if request_transition(&state, &mut next_state, GameTrigger::Retry).is_none() {
            return;
        }
        tracker.mission().clone()
    } else {
        return;
    };

    wind.set_conditions(mission.environment.clone());
    reset_aircraft(&mut commands, &mut aircraft, &mission, active.class);

    let mut tracker = MissionProgressTracker::new(mission, engine.difficulty());
    tracker.start(fixed_time.elapsed_secs_f64());
    active.tracker = Some(tracker);

    if virtual_time.is_paused() {
        virtual_time.unpause();
    }
}

pub fn pause_system(
    mut pauses: EventReader<PauseRequestEvent>,
    mut resumes: EventReader<ResumeRequestEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    let pause = pauses.read().last().is_some();
    let resume = resumes.read().last().is_some();

    // The tracker clock is the fixed clock, which stops with virtual time
    if pause && request_transition(&state, &mut next_state, GameTrigger::Pause).is_some() {
        virtual_time.pause();
    } else if resume && request_transition(&state, &mut next_state, GameTrigger::Resume).is_some()
    {
        virtual_time.unpause();
    }
}

pub fn return_to_menu_system(
    mut events: EventReader<ReturnToMenuEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut active: ResMut<ActiveMission>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    if events.read().last().is_none() {
        return;
    }
    if request_transition(&state, &mut next_state, GameTrigger::ReturnToMenu).is_some() {
        active.tracker = None;
        virtual_time.unpause();
    }
}

/// Feeds the piloted aircraft (the one carrying [`ControlInputs`]) to the
/// tracker once per fixed tick and turns its outbox into Bevy events and
/// state changes.
pub fn mission_progress_system(
    time: Res<Time<Fixed>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut active: ResMut<ActiveMission>,
    aircraft: Query<&Aircraft, With<ControlInputs>>,
    mut checkpoint_events: EventWriter<CheckpointReachedEvent>,
    mut complete_events: EventWriter<MissionCompleteEvent>,
    mut failed_events: EventWriter<MissionFailedEvent>,
) {
    let Some(tracker) = active.tracker.as_mut() else {
        return;
    };
    let Some(aircraft) = aircraft.iter().next() else {
        return;
    };

    for event in tracker.update(aircraft, time.elapsed_secs_f64()) {
        match event {
            MissionEvent::CheckpointReached(checkpoint) => {
                checkpoint_events.send(CheckpointReachedEvent(checkpoint));
            }
            MissionEvent::MissionComplete(progress) => {
                request_transition(&state, &mut next_state, GameTrigger::MissionCompleted);
                complete_events.send(MissionCompleteEvent(progress));
            }
            MissionEvent::MissionFailed(reason) => {
                request_transition(&state, &mut next_state, GameTrigger::MissionFailed);
                failed_events.send(MissionFailedEvent(reason));
            }
        }
    }
}
