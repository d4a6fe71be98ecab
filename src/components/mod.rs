pub mod aircraft;
pub mod controller;
pub mod instruments;
pub mod tasks;

pub use aircraft::{
    AeroCoefficients, Aircraft, AircraftClass, AircraftConfig, AircraftSource, ControlSurfaces,
    RawAircraftConfig,
};
pub use controller::ControlInputs;
pub use instruments::FlightInstruments;
pub use tasks::{AltitudeBand, Checkpoint, Mission, MissionStart, MissionTier};
