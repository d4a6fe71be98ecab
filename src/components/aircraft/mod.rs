pub mod config;
pub mod state;

pub use config::{
    AeroCoefficients, AircraftClass, AircraftConfig, AircraftSource, RawAircraftConfig,
};
pub use state::{Aircraft, ControlSurfaces};
