use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use sortie::{
    components::{Aircraft, AircraftClass, Mission},
    plugins::{FlightPlugin, MissionPlugin},
    resources::{Difficulty, FlightConfig, WindModel},
    systems::mission::{
        CheckpointReachedEvent, GameState, MissionCompleteEvent, MissionFailedEvent,
        MissionProgress, StartMissionEvent,
    },
};

/// Everything the mission plugin announced since the app was built.
#[derive(Resource, Debug, Default)]
pub struct EventLog {
    pub checkpoints: Vec<String>,
    pub completed: Vec<MissionProgress>,
    pub failed: Vec<String>,
}

fn record_events(
    mut log: ResMut<EventLog>,
    mut checkpoints: EventReader<CheckpointReachedEvent>,
    mut completed: EventReader<MissionCompleteEvent>,
    mut failed: EventReader<MissionFailedEvent>,
) {
    log.checkpoints
        .extend(checkpoints.read().map(|CheckpointReachedEvent(cp)| cp.id.clone()));
    log.completed
        .extend(completed.read().map(|MissionCompleteEvent(p)| p.clone()));
    log.failed
        .extend(failed.read().map(|MissionFailedEvent(reason)| reason.clone()));
}

// Builder for creating a headless test application
pub struct TestAppBuilder {
    config: FlightConfig,
    difficulty: Difficulty,
    wind: Option<WindModel>,
    frame_time: Duration,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: FlightConfig::default(),
            difficulty: Difficulty::Normal,
            wind: None,
            frame_time: Duration::from_secs_f64(1.0 / 60.0),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlightConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_wind(mut self, wind: WindModel) -> Self {
        self.wind = Some(wind);
        self
    }

    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        let mut flight = FlightPlugin::with_config(self.config).with_difficulty(self.difficulty);
        if let Some(wind) = self.wind {
            flight = flight.with_wind(wind);
        }

        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .add_plugins(flight)
            .add_plugins(MissionPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_time))
            .init_resource::<EventLog>()
            .add_systems(Update, record_events);

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Starts `mission` and runs a frame so the state change lands.
    pub fn start_mission(&mut self, mission: Mission, class: AircraftClass) {
        self.send(StartMissionEvent { mission, class });
        self.run_frames(2);
    }

    pub fn state(&self) -> GameState {
        *self.app.world().resource::<State<GameState>>().get()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn aircraft(&mut self) -> Option<Aircraft> {
        let world = self.app.world_mut();
        let mut query = world.query::<&Aircraft>();
        query.get_single(world).ok().cloned()
    }

    pub fn aircraft_mut(&mut self) -> Option<Mut<Aircraft>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut Aircraft>();
        query.get_single_mut(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn events(&self) -> &EventLog {
        self.app.world().resource::<EventLog>()
    }

    /// Fixed-clock seconds, the clock missions are timed on.
    pub fn fixed_elapsed(&self) -> f64 {
        self.app.world().resource::<Time<Fixed>>().elapsed_secs_f64()
    }
}
