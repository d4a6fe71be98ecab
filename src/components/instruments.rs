use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Aircraft;
use crate::utils::{heading_degrees, pitch_degrees, roll_degrees, safe_truncate_to_int};

/// Values a heads-up display reads back each frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightInstruments {
    /// Height above the world origin plane (m).
    pub altitude: f64,
    /// `|velocity|` (m/s).
    pub airspeed: f64,
    /// Climb rate (m/s).
    pub vertical_speed: f64,
    /// [0, 360) degrees.
    pub heading: f64,
    pub roll: f64,
    pub pitch: f64,
}

impl FlightInstruments {
    pub fn from_aircraft(aircraft: &Aircraft) -> Self {
        let forward = aircraft.forward();
        let up = aircraft.up();

        Self {
            altitude: aircraft.position.y,
            airspeed: aircraft.velocity.norm(),
            vertical_speed: aircraft.velocity.y,
            heading: heading_degrees(&forward),
            roll: roll_degrees(&up),
            pitch: pitch_degrees(&forward),
        }
    }

    pub fn altitude_display(&self) -> i64 {
        safe_truncate_to_int(self.altitude)
    }

    pub fn airspeed_display(&self) -> i64 {
        safe_truncate_to_int(self.airspeed)
    }

    pub fn vertical_speed_display(&self) -> i64 {
        safe_truncate_to_int(self.vertical_speed)
    }

    pub fn heading_display(&self) -> i64 {
        safe_truncate_to_int(self.heading)
    }
}
