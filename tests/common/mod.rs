#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_aircraft_valid, assert_position_near, assert_unit_rotation};
pub use fixtures::*;
pub use test_app::{EventLog, TestApp, TestAppBuilder};
