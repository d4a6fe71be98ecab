pub mod difficulty;
pub mod physics;

pub use difficulty::Difficulty;
pub use physics::FlightConfig;
