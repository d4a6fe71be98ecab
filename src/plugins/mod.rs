mod flight;
mod mission;

pub use flight::{FlightPlugin, FlightSet};
pub use mission::MissionPlugin;
