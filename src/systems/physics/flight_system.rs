use bevy::prelude::*;

use crate::components::{Aircraft, ControlInputs, FlightInstruments};
use crate::resources::{Difficulty, WindModel};
use crate::systems::physics::FlightDynamicsEngine;

/// Request to change the pilot difficulty mid-flight.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetDifficultyEvent(pub Difficulty);

/// Steps every aircraft through one fixed tick.
///
/// Pilot input on a [`ControlInputs`] component replaces the aircraft's
/// requested controls, and any attached [`FlightInstruments`] are refreshed
/// after the step.
pub fn flight_dynamics_system(
    time: Res<Time>,
    engine: Res<FlightDynamicsEngine>,
    mut wind: ResMut<WindModel>,
    mut query: Query<(
        &mut Aircraft,
        Option<&ControlInputs>,
        Option<&mut FlightInstruments>,
    )>,
) {
    let dt = time.delta_secs_f64();
    if dt <= 0.0 {
        return;
    }

    let wind_vector = wind.sample();

    for (mut aircraft, inputs, instruments) in query.iter_mut() {
        if let Some(inputs) = inputs {
            aircraft.requested = *inputs;
        }

        engine.update(&mut aircraft, dt, wind_vector);

        if let Some(mut instruments) = instruments {
            *instruments = FlightInstruments::from_aircraft(&aircraft);
        }
    }
}

pub fn handle_difficulty_events(
    mut events: EventReader<SetDifficultyEvent>,
    mut engine: ResMut<FlightDynamicsEngine>,
) {
    // Only the most recent request in a frame matters
    if let Some(SetDifficultyEvent(difficulty)) = events.read().last() {
        engine.set_difficulty(*difficulty);
    }
}
