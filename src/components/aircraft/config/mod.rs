mod aero_coef;
mod aircraft;
mod loader;

pub use aero_coef::AeroCoefficients;
pub use aircraft::{AircraftClass, AircraftConfig, AircraftSource};
pub use loader::RawAircraftConfig;
