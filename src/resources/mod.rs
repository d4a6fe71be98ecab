pub mod config;
pub mod environment;

pub use config::{Difficulty, FlightConfig};
pub use environment::{EnvironmentConditions, WindModel};
